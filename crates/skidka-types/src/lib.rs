//! Core types for the skidka offer collection pipeline.
//!
//! This crate provides the fundamental data structures used throughout skidka:
//!
//! - [`MarketItem`] - A discounted market listing after normalization
//! - [`RawMarketItem`] - Raw listing as the market API serves it
//! - [`PromoProduct`] - A store promo offer with its promo window and prices
//! - [`ItemCategory`] - A market item category with its query identifier

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/skidka-rs/skidka/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod category;
mod error;
mod market;
mod promo;

pub use category::ItemCategory;
pub use error::{Result, SkidkaError};
pub use market::{MARKET_SEARCH_URL, MarketItem, RawMarketItem, normalize_discount, search_link};
pub use promo::{PricePair, PromoProduct, PromoWindow};
