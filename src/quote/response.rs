use crate::quote::error::QuoteRequestError;
use bigdecimal::BigDecimal;
use serde::Deserialize;
use std::str::FromStr;

/// One row of the provider's `/coins/list` payload.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct CoinListing {
    pub id: String,
    pub symbol: String,
    pub name: String,
}

impl CoinListing {
    pub fn matches_symbol(&self, symbol: &str) -> bool {
        self.symbol.to_lowercase() == symbol.to_lowercase()
    }
}

#[derive(Debug)]
pub struct AssetQuoteResponse {
    pub id: String,
    pub price: BigDecimal,
}

impl AssetQuoteResponse {
    // example response
    // {"bitcoin":{"usd":65761}}
    pub fn from_simple_price(
        id: &str,
        vs_currency: &str,
        price_json: &serde_json::Value,
    ) -> Result<Self, QuoteRequestError> {
        let prices = price_json
            .as_object()
            .ok_or("simple price response is not an object")?;

        let price_json_target = prices
            .get(id)
            .and_then(|v| v.as_object())
            .ok_or_else(|| {
                format!("missing id '{}' in the API response, or is not an object", id)
            })?;

        let price = price_json_target
            .get(vs_currency)
            .and_then(|v| v.as_number())
            .ok_or_else(|| {
                format!(
                    "cannot parse `{}` price as Number from the API response",
                    vs_currency
                )
            })?;

        Ok(Self {
            id: id.to_string(),
            price: BigDecimal::from_str(price.as_str())?,
        })
    }
}
