use bigdecimal::BigDecimal;
use clap::Parser;
use tracing::debug;
use tracing::instrument;
use tracing_subscriber::EnvFilter;

mod config;
mod quote;

use crate::config::Config;
use crate::quote::client::{CoinGeckoClient, QuoteSource};
use crate::quote::lookup::{fetch_usd_price, resolve_coin};
use crate::quote::response::CoinListing;
use crate::quote::retry::RetryPolicy;

/// Resolves `symbol` and prices it, returning the line to show the user.
#[instrument(skip(source, policy))]
async fn lookup_price_line<S>(source: &S, policy: &RetryPolicy, symbol: Option<&str>) -> String
where
    S: QuoteSource + ?Sized,
{
    // an empty argument counts as no symbol at all
    let symbol = match symbol.filter(|s| !s.is_empty()) {
        Some(symbol) => symbol,
        None => return missing_symbol_message(),
    };

    let coin = match resolve_coin(source, policy, symbol).await {
        Some(coin) => coin,
        None => return not_found_message(symbol),
    };

    debug!("Symbol {} resolved to CoinGecko id {}", symbol, coin.id);

    match fetch_usd_price(source, policy, &coin.id).await {
        Some(price) => format_price_line(&coin, &price),
        None => price_error_message(symbol),
    }
}

/// Prices print in plain decimal notation without trailing zeros.
fn format_price_line(coin: &CoinListing, price: &BigDecimal) -> String {
    format!(
        "{} ({}): {} USD",
        coin.name,
        coin.symbol.to_uppercase(),
        price.normalized().to_plain_string()
    )
}

fn missing_symbol_message() -> String {
    "Please provide a cryptocurrency symbol.".to_string()
}

fn not_found_message(symbol: &str) -> String {
    format!("Cryptocurrency with symbol '{}' not found.", symbol)
}

fn price_error_message(symbol: &str) -> String {
    format!(
        "Error fetching price for cryptocurrency with symbol '{}'.",
        symbol
    )
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::parse();
    debug!("Using CoinGecko API at {}", config.api_url);

    let client = CoinGeckoClient::new(&config.api_url, &config.api_key);
    let line = lookup_price_line(&client, &RetryPolicy::default(), config.symbol.as_deref()).await;

    println!("{}", line);
    debug!("Lookup finished.");
}
