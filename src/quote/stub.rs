use crate::quote::client::QuoteSource;
use crate::quote::error::QuoteRequestError;
use crate::quote::request::AssetQuoteRequest;
use crate::quote::response::{AssetQuoteResponse, CoinListing};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// In-memory provider: a fixed listing, a fixed price table and optional
/// failures served before the real answers.
pub struct StubSource {
    coins: Vec<CoinListing>,
    prices: serde_json::Value,
    list_failures: Mutex<VecDeque<QuoteRequestError>>,
    price_failures: Mutex<VecDeque<QuoteRequestError>>,
    list_calls: AtomicUsize,
    price_calls: AtomicUsize,
    priced_ids: Mutex<Vec<String>>,
}

pub fn coin(id: &str, symbol: &str, name: &str) -> CoinListing {
    CoinListing {
        id: id.to_string(),
        symbol: symbol.to_string(),
        name: name.to_string(),
    }
}

impl StubSource {
    /// `prices` is a simple-price payload covering every id the stub knows.
    pub fn new(coins: Vec<CoinListing>, prices: &str) -> Self {
        Self {
            coins,
            prices: serde_json::from_str(prices).unwrap(),
            list_failures: Mutex::new(VecDeque::new()),
            price_failures: Mutex::new(VecDeque::new()),
            list_calls: AtomicUsize::new(0),
            price_calls: AtomicUsize::new(0),
            priced_ids: Mutex::new(Vec::new()),
        }
    }

    pub fn fail_list_with(self, errors: Vec<QuoteRequestError>) -> Self {
        *self.list_failures.lock().unwrap() = errors.into();
        self
    }

    pub fn fail_price_with(self, errors: Vec<QuoteRequestError>) -> Self {
        *self.price_failures.lock().unwrap() = errors.into();
        self
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn price_calls(&self) -> usize {
        self.price_calls.load(Ordering::SeqCst)
    }

    pub fn priced_ids(&self) -> Vec<String> {
        self.priced_ids.lock().unwrap().clone()
    }
}

#[async_trait]
impl QuoteSource for StubSource {
    async fn list_coins(&self) -> Result<Vec<CoinListing>, QuoteRequestError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(err) = self.list_failures.lock().unwrap().pop_front() {
            return Err(err);
        }
        Ok(self.coins.clone())
    }

    async fn simple_price(
        &self,
        req: &AssetQuoteRequest,
    ) -> Result<AssetQuoteResponse, QuoteRequestError> {
        self.price_calls.fetch_add(1, Ordering::SeqCst);
        self.priced_ids.lock().unwrap().push(req.id.clone());
        if let Some(err) = self.price_failures.lock().unwrap().pop_front() {
            return Err(err);
        }

        // the provider answers `{}` for ids it does not know
        let mut body = serde_json::Map::new();
        if let Some(entry) = self.prices.get(&req.id) {
            body.insert(req.id.clone(), entry.clone());
        }
        AssetQuoteResponse::from_simple_price(
            &req.id,
            &req.vs_currency,
            &serde_json::Value::Object(body),
        )
    }
}
