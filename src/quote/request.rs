pub const VS_CURRENCY_USD: &str = "usd";

#[derive(Clone, Debug, PartialEq)]
pub struct AssetQuoteRequest {
    pub id: String,
    pub vs_currency: String,
}

impl AssetQuoteRequest {
    pub fn usd(id: &str) -> Self {
        Self {
            id: id.to_string(),
            vs_currency: VS_CURRENCY_USD.to_string(),
        }
    }
}
