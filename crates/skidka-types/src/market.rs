//! Market listing representation.

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use serde::{Deserialize, Serialize};

/// Base URL of the market's buy page, used to derive per-item search links.
pub const MARKET_SEARCH_URL: &str = "https://cs.money/market/buy/";

/// Characters percent-encoded when an item name is embedded in a search link.
const SEARCH_SET: &AsciiSet = &CONTROLS.add(b' ');

/// A discounted market listing after price and discount normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketItem {
    /// Full display name of the item.
    pub name: String,
    /// Reference price on the Steam market (USD).
    pub steam_price: f64,
    /// Listing price before the discount was applied (USD).
    pub list_price: f64,
    /// Listing price with the discount applied (USD).
    pub discounted_price: f64,
    /// Discount as a 0-1 ratio, rounded to 3 decimal places.
    pub discount: f64,
    /// Wear quality of the item.
    pub float: f64,
    /// Paint pattern identifier.
    pub pattern: i64,
    /// Search link for this item on the market's buy page.
    pub market_link: String,
}

/// Raw market listing as the sell-orders API serves it (before normalization).
///
/// Only the fields the pipeline reads are mirrored; the upstream payload
/// carries many more.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawMarketItem {
    /// Asset metadata (name, wear, pattern).
    pub asset: RawAsset,
    /// Pricing block (discount, reference and computed prices).
    pub pricing: RawPricing,
}

/// Asset metadata of a raw listing.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawAsset {
    /// Name variants; only the full name is used.
    pub names: RawNames,
    /// Wear quality.
    pub float: f64,
    /// Paint pattern identifier.
    pub pattern: i64,
}

/// Name variants of a raw listing.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawNames {
    /// Full display name.
    pub full: String,
}

/// Pricing block of a raw listing.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawPricing {
    /// Discount as a 0-1 ratio.
    pub discount: f64,
    /// Reference price on the Steam market.
    pub default: f64,
    /// Listing price before the discount.
    #[serde(rename = "priceBeforeDiscount")]
    pub price_before_discount: f64,
    /// Listing price with the discount applied.
    pub computed: f64,
}

impl RawMarketItem {
    /// Converts the raw listing into a [`MarketItem`].
    ///
    /// Rounds the discount to 3 decimal places and derives the search link
    /// from the item name.
    #[must_use]
    pub fn into_item(self) -> MarketItem {
        let name = self.asset.names.full;
        let market_link = search_link(&name);
        MarketItem {
            steam_price: self.pricing.default,
            list_price: self.pricing.price_before_discount,
            discounted_price: self.pricing.computed,
            discount: (self.pricing.discount * 1000.0).round() / 1000.0,
            float: self.asset.float,
            pattern: self.asset.pattern,
            market_link,
            name,
        }
    }
}

/// Normalizes a discount threshold to the 0-1 range.
///
/// Callers may supply the threshold either as a percentage (`30`) or as a
/// ratio (`0.3`); values above 1 are divided by 100. Already-normalized
/// values pass through unchanged.
#[must_use]
pub fn normalize_discount(discount: f64) -> f64 {
    if discount > 1.0 {
        discount / 100.0
    } else {
        discount
    }
}

/// Builds the market search link for an item name.
///
/// Spaces (and control characters) in the name are percent-encoded so the
/// link survives being pasted into a message verbatim.
#[must_use]
pub fn search_link(name: &str) -> String {
    format!(
        "{MARKET_SEARCH_URL}?search={}",
        utf8_percent_encode(name, SEARCH_SET)
    )
}
