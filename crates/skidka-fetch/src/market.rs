//! Market sell-orders source.

use serde::Deserialize;
use serde_json::Value;

use skidka_types::{MarketItem, RawMarketItem, normalize_discount};

use crate::source::{PageRequest, PageSource, TransformError};

/// Base URL of the market sell-orders endpoint.
pub const MARKET_URL: &str = "https://cs.money/1.0/market/sell-orders";

/// Static browser-fingerprint header set sent with every market request.
/// The user-agent entry is stamped per request by the pagination driver.
const MARKET_HEADERS: &[(&str, &str)] = &[
    ("authority", "cs.money"),
    ("accept", "application/json, text/plain, */*"),
    ("accept-language", "ru-RU,ru;q=0.9,en-US;q=0.8,en;q=0.7"),
    ("referer", "https://cs.money/market/buy/"),
    (
        "sec-ch-ua",
        "\"Not A(Brand\";v=\"99\", \"Google Chrome\";v=\"121\", \"Chromium\";v=\"121\"",
    ),
    ("sec-ch-ua-mobile", "?0"),
    ("sec-ch-ua-platform", "\"Windows\""),
    ("sec-fetch-dest", "empty"),
    ("sec-fetch-mode", "cors"),
    ("sec-fetch-site", "same-origin"),
    ("x-client-app", "web"),
];

/// Static cookie set sent with every market request.
const MARKET_COOKIES: &[(&str, &str)] = &[
    ("group_id", "169ccdd2-99c3-484c-9e66-a3904bc0a26f"),
    ("onboarding__skin_quick_view", "false"),
    ("new_language", "en"),
];

/// Query parameters for a market collection run.
#[derive(Debug, Clone, PartialEq)]
pub struct MarketQuery {
    /// Page size (the `limit` query parameter).
    pub limit: u32,
    /// Minimum listing price in USD.
    pub min_price: u64,
    /// Maximum listing price in USD.
    pub max_price: u64,
    /// Category identifiers for the `type[]` parameter; empty keeps all.
    pub types: Vec<u32>,
    /// Minimum discount to keep; accepted as a percentage (`30`) or a
    /// ratio (`0.3`).
    pub min_discount: f64,
}

impl Default for MarketQuery {
    fn default() -> Self {
        Self {
            limit: 60,
            min_price: 0,
            max_price: 1_000_000,
            types: Vec::new(),
            min_discount: 0.0,
        }
    }
}

/// The market sell-orders endpoint as a paginated source of [`MarketItem`]s.
///
/// Uses an offset cursor: `offset = page_index * limit`.
#[derive(Debug, Clone)]
pub struct MarketSource {
    base_url: String,
    query: MarketQuery,
    min_discount: f64,
}

/// Page envelope of the sell-orders response.
#[derive(Debug, Deserialize)]
struct MarketPage {
    items: Vec<RawMarketItem>,
}

impl MarketSource {
    /// Creates a market source for the given query.
    ///
    /// The discount threshold is normalized to the 0-1 range up front, so
    /// callers may pass either `30` or `0.3`.
    #[must_use]
    pub fn new(query: MarketQuery) -> Self {
        let min_discount = normalize_discount(query.min_discount);
        Self {
            base_url: MARKET_URL.to_string(),
            query,
            min_discount,
        }
    }

    /// Overrides the endpoint base URL (tests point this at a local server).
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Returns the normalized minimum discount threshold.
    #[must_use]
    pub const fn min_discount(&self) -> f64 {
        self.min_discount
    }
}

impl PageSource for MarketSource {
    type Record = MarketItem;

    fn name(&self) -> &'static str {
        "market"
    }

    fn first_cursor(&self) -> u64 {
        0
    }

    fn advance(&self, cursor: u64) -> u64 {
        cursor + u64::from(self.query.limit)
    }

    fn request(&self, cursor: u64, user_agent: &str) -> PageRequest {
        let mut headers: Vec<(String, String)> = MARKET_HEADERS
            .iter()
            .map(|(name, value)| ((*name).to_string(), (*value).to_string()))
            .collect();
        headers.push(("user-agent".to_string(), user_agent.to_string()));

        let mut query = vec![
            ("limit".to_string(), self.query.limit.to_string()),
            ("maxPrice".to_string(), self.query.max_price.to_string()),
            ("minPrice".to_string(), self.query.min_price.to_string()),
            ("offset".to_string(), cursor.to_string()),
        ];
        for type_id in &self.query.types {
            query.push(("type[]".to_string(), type_id.to_string()));
        }

        PageRequest {
            url: self.base_url.clone(),
            headers,
            cookies: MARKET_COOKIES
                .iter()
                .map(|(name, value)| ((*name).to_string(), (*value).to_string()))
                .collect(),
            query,
        }
    }

    fn transform(&self, body: Value) -> Result<Vec<MarketItem>, TransformError> {
        let page: MarketPage = serde_json::from_value(body)?;
        Ok(page
            .items
            .into_iter()
            .filter(|raw| raw.pricing.discount >= self.min_discount)
            .map(RawMarketItem::into_item)
            .collect())
    }
}
