use crate::quote::client::QuoteSource;
use crate::quote::request::AssetQuoteRequest;
use crate::quote::response::CoinListing;
use crate::quote::retry::{fetch_or_empty, RetryPolicy};
use bigdecimal::BigDecimal;
use tracing::{debug, instrument};

/// Finds the coin whose ticker matches `symbol`, ignoring case.
///
/// Tickers are not unique in the provider's listing. The first match in
/// listing order wins, so e.g. a lookup may land on a lesser-known coin that
/// happens to be listed before the one the user meant.
#[instrument(skip(source, policy))]
pub async fn resolve_coin<S>(source: &S, policy: &RetryPolicy, symbol: &str) -> Option<CoinListing>
where
    S: QuoteSource + ?Sized,
{
    let coins = fetch_or_empty(policy, "coins list", Vec::new(), move || source.list_coins()).await;
    debug!("Searching {} coins for symbol {}", coins.len(), symbol);

    coins.into_iter().find(|coin| coin.matches_symbol(symbol))
}

/// Current USD price of the coin with the given provider id, if the provider has one.
#[instrument(skip(source, policy))]
pub async fn fetch_usd_price<S>(source: &S, policy: &RetryPolicy, id: &str) -> Option<BigDecimal>
where
    S: QuoteSource + ?Sized,
{
    let req = AssetQuoteRequest::usd(id);
    let req = &req;

    fetch_or_empty(policy, "cryptocurrency price", None, move || async move {
        source.simple_price(req).await.map(|resp| {
            debug!("Price for {} is {} USD", resp.id, resp.price);
            Some(resp.price)
        })
    })
    .await
}
