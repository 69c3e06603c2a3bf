use crate::quote::error::QuoteRequestError;
use crate::quote::request::AssetQuoteRequest;
use crate::quote::response::{AssetQuoteResponse, CoinListing};
use async_trait::async_trait;
use reqwest::header;
use reqwest::RequestBuilder;
use tracing::{debug, instrument, trace};

pub const DEFAULT_API_URL: &str = "https://api.coingecko.com/api/v3";

/// A provider that can list every known coin and quote a single one.
///
/// Each method performs exactly one outbound call; retrying is up to the caller.
#[async_trait]
pub trait QuoteSource {
    async fn list_coins(&self) -> Result<Vec<CoinListing>, QuoteRequestError>;

    async fn simple_price(
        &self,
        req: &AssetQuoteRequest,
    ) -> Result<AssetQuoteResponse, QuoteRequestError>;
}

#[derive(Clone, Debug)]
pub struct CoinGeckoClient {
    http_client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl CoinGeckoClient {
    pub fn new(base_url: &str, api_key: &str) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.trim().to_string(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    fn get(&self, path: &str) -> RequestBuilder {
        let mut http_req_build = self
            .http_client
            .get(self.endpoint(path))
            .header(header::ACCEPT, "application/json");

        if !self.api_key.is_empty() {
            http_req_build = http_req_build.header("x-cg-demo-api-key", &self.api_key);
        }

        http_req_build
    }

    async fn send(&self, http_req_build: RequestBuilder) -> Result<String, QuoteRequestError> {
        let response = http_req_build.send().await?;
        let status = response.status();
        trace!("CoinGecko API answered with {}", status);

        if !status.is_success() {
            return Err(status.into());
        }

        Ok(response.text().await?)
    }
}

#[async_trait]
impl QuoteSource for CoinGeckoClient {
    #[instrument(skip(self))]
    async fn list_coins(&self) -> Result<Vec<CoinListing>, QuoteRequestError> {
        debug!("Requesting coins list from CoinGecko API");
        let body = self.send(self.get("coins/list")).await?;
        let coins: Vec<CoinListing> = serde_json::from_str(body.as_str())?;
        debug!("CoinGecko API listed {} coins", coins.len());
        Ok(coins)
    }

    #[instrument(skip(self))]
    async fn simple_price(
        &self,
        req: &AssetQuoteRequest,
    ) -> Result<AssetQuoteResponse, QuoteRequestError> {
        debug!("Requesting {} price for {} from CoinGecko API", &req.vs_currency, &req.id);
        let http_req_build = self.get("simple/price").query(&[
            ("ids", req.id.as_str()),
            ("vs_currencies", req.vs_currency.as_str()),
        ]);
        let body = self.send(http_req_build).await?;
        let price_json: serde_json::Value = serde_json::from_str(body.as_str())?;
        AssetQuoteResponse::from_simple_price(&req.id, &req.vs_currency, &price_json)
    }
}
