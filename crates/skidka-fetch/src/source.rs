//! Page source abstraction shared by the pagination driver.

use serde_json::Value;
use thiserror::Error;

/// One fully assembled HTTP GET against a paginated endpoint.
///
/// Only the cursor-bearing query field and the identity header vary between
/// the requests of a single collection run; everything else is fixed when
/// the source is constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    /// Endpoint URL.
    pub url: String,
    /// Header name/value pairs, including the rotating identity header.
    pub headers: Vec<(String, String)>,
    /// Cookie name/value pairs; may be empty.
    pub cookies: Vec<(String, String)>,
    /// Query parameters, including the page/offset cursor.
    pub query: Vec<(String, String)>,
}

impl PageRequest {
    /// Renders the cookie pairs as a single `Cookie` header value.
    #[must_use]
    pub fn cookie_header(&self) -> String {
        self.cookies
            .iter()
            .map(|(name, value)| format!("{name}={value}"))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// Errors produced while turning a page payload into domain records.
#[derive(Error, Debug)]
pub enum TransformError {
    /// The page envelope or a record was missing a required field.
    #[error("malformed page: {0}")]
    Schema(#[from] serde_json::Error),
}

/// A paginated upstream endpoint: how to address one page and how to turn
/// its payload into domain records.
///
/// The pagination driver in [`crate::page_stream`] is generic over this
/// trait, so both endpoints share one control flow while differing in
/// cursor convention (offset vs. page number) and transformation.
pub trait PageSource {
    /// Record type the source produces.
    type Record;

    /// Short source name used in logs.
    fn name(&self) -> &'static str;

    /// Cursor addressing the first page.
    fn first_cursor(&self) -> u64;

    /// Cursor addressing the page after `cursor`.
    fn advance(&self, cursor: u64) -> u64;

    /// Assembles the request for the page at `cursor`, stamped with the
    /// run's current identity header.
    fn request(&self, cursor: u64, user_agent: &str) -> PageRequest;

    /// Converts one page's payload into records, applying any per-source
    /// filtering. An empty vec signals the end of available data.
    ///
    /// # Errors
    ///
    /// Returns an error when a required field is absent; the driver treats
    /// this as the end of available data and keeps what was collected.
    fn transform(&self, body: Value) -> Result<Vec<Self::Record>, TransformError>;
}
