//! Store special-offers source.

use serde::Deserialize;
use serde_json::Value;

use skidka_types::PromoProduct;

use crate::source::{PageRequest, PageSource, TransformError};

/// Base URL of the store special-offers endpoint.
pub const PROMO_URL: &str = "https://5ka.ru/api/v2/special_offers";

/// The store special-offers endpoint as a paginated source of
/// [`PromoProduct`]s.
///
/// Uses a page-number cursor starting at 1.
#[derive(Debug, Clone)]
pub struct PromoSource {
    base_url: String,
    store_id: String,
    records_per_page: u32,
}

/// Page envelope of the special-offers response.
#[derive(Debug, Deserialize)]
struct PromoPage {
    results: Vec<PromoProduct>,
}

impl PromoSource {
    /// Creates a promo source for the given store.
    #[must_use]
    pub fn new(store_id: impl Into<String>) -> Self {
        Self {
            base_url: PROMO_URL.to_string(),
            store_id: store_id.into(),
            records_per_page: 20,
        }
    }

    /// Overrides the endpoint base URL (tests point this at a local server).
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Overrides the page size.
    #[must_use]
    pub const fn with_records_per_page(mut self, records_per_page: u32) -> Self {
        self.records_per_page = records_per_page;
        self
    }

    /// Returns the store identifier this source collects for.
    #[must_use]
    pub fn store_id(&self) -> &str {
        &self.store_id
    }
}

impl PageSource for PromoSource {
    type Record = PromoProduct;

    fn name(&self) -> &'static str {
        "promo"
    }

    fn first_cursor(&self) -> u64 {
        1
    }

    fn advance(&self, cursor: u64) -> u64 {
        cursor + 1
    }

    fn request(&self, cursor: u64, user_agent: &str) -> PageRequest {
        PageRequest {
            url: self.base_url.clone(),
            headers: vec![
                ("User-Agent".to_string(), user_agent.to_string()),
                ("Accept".to_string(), "*/*".to_string()),
            ],
            cookies: Vec::new(),
            query: vec![
                (
                    "records_per_page".to_string(),
                    self.records_per_page.to_string(),
                ),
                ("page".to_string(), cursor.to_string()),
                ("store".to_string(), self.store_id.clone()),
            ],
        }
    }

    /// All offers in the page are kept; there is no promo-side filtering.
    fn transform(&self, body: Value) -> Result<Vec<PromoProduct>, TransformError> {
        let page: PromoPage = serde_json::from_value(body)?;
        Ok(page.results)
    }
}
