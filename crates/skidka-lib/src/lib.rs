//! Offer collection and export library for paginated discount APIs.
//!
//! This is a facade crate that re-exports functionality from the skidka
//! workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```ignore
//! use skidka_lib::prelude::*;
//! use futures::{StreamExt, pin_mut};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = PageClient::with_defaults()?;
//!     let source = MarketSource::new(MarketQuery {
//!         min_discount: 30.0,
//!         ..Default::default()
//!     });
//!
//!     let items = market_stream(&client, &source).take(5);
//!     pin_mut!(items);
//!     while let Some(item) = items.next().await {
//!         println!("{} (-{}%)", item.name, item.discount * 100.0);
//!     }
//!
//!     Ok(())
//! }
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/skidka-rs/skidka/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use skidka_types::*;

// Re-export the category registry
pub use skidka_catalog::CategoryRegistry;

// Re-export fetch functionality
#[cfg(feature = "fetch")]
pub use skidka_fetch::{
    ClientConfig, FetchError, MarketQuery, MarketSource, PageBatch, PageClient, PageRequest,
    PageSource, PromoSource, TransformError, flatten_records, page_stream,
};

// Re-export export functionality
#[cfg(feature = "export")]
pub use skidka_export::{
    CsvFormatter, ExportArtifact, ExportError, Formatter, JsonFormatter, OutputFormat,
    PROMO_COLUMNS, export_filename, write_promo_report,
};

#[cfg(all(feature = "fetch", feature = "export"))]
mod service;

#[cfg(all(feature = "fetch", feature = "export"))]
pub use service::{collect_promos, export_promos, market_stream};

/// Prelude module for convenient imports.
///
/// ```
/// use skidka_lib::prelude::*;
/// ```
pub mod prelude {
    pub use skidka_types::{
        ItemCategory, MarketItem, PricePair, PromoProduct, PromoWindow, Result, SkidkaError,
    };

    pub use skidka_catalog::CategoryRegistry;

    #[cfg(feature = "fetch")]
    pub use skidka_fetch::{
        ClientConfig, MarketQuery, MarketSource, PageClient, PromoSource, flatten_records,
        page_stream,
    };

    #[cfg(feature = "export")]
    pub use skidka_export::{ExportArtifact, OutputFormat, write_promo_report};

    #[cfg(all(feature = "fetch", feature = "export"))]
    pub use crate::service::{collect_promos, export_promos, market_stream};
}
