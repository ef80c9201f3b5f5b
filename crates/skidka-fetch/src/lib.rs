//! HTTP client and paginated offer collection for skidka.
//!
//! This crate provides the collection pipeline:
//!
//! - [`PageClient`] - HTTP client with connection pooling and timeouts
//! - [`PageSource`] - per-endpoint request building and record transformation
//! - [`MarketSource`] / [`PromoSource`] - the two supported endpoints
//! - [`page_stream`] - lazy page-by-page collection driver

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/skidka-rs/skidka/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod agent;
mod client;
mod market;
mod promo;
mod source;
mod stream;

pub use agent::random_user_agent;
pub use client::{ClientConfig, FetchError, PageClient};
pub use market::{MARKET_URL, MarketQuery, MarketSource};
pub use promo::{PROMO_URL, PromoSource};
pub use source::{PageRequest, PageSource, TransformError};
pub use stream::{PageBatch, flatten_records, page_stream};
