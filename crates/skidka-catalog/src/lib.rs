//! Item category registry for the skidka offer collector.
//!
//! This crate provides named access to the market's item categories and the
//! numeric identifiers its sell-orders API expects in the `type[]` query
//! parameter.
//!
//! # Example
//!
//! ```
//! use skidka_catalog::CategoryRegistry;
//!
//! let registry = CategoryRegistry::global();
//!
//! // Lookup by slug
//! if let Some(category) = registry.get("knife") {
//!     println!("{}: {}", category.name(), category.type_id());
//! }
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/skidka-rs/skidka/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

use std::collections::HashMap;
use std::sync::OnceLock;

use skidka_types::ItemCategory;

/// The category metadata JSON embedded at compile time.
const CATEGORIES_JSON: &str = include_str!("../data/categories.json");

/// Global category registry instance.
static REGISTRY: OnceLock<CategoryRegistry> = OnceLock::new();

/// Registry of all market item categories the collector can query.
#[derive(Debug)]
pub struct CategoryRegistry {
    categories: HashMap<String, ItemCategory>,
}

impl CategoryRegistry {
    /// Returns the global category registry.
    ///
    /// The registry is initialized lazily on first access.
    #[must_use]
    pub fn global() -> &'static Self {
        REGISTRY.get_or_init(Self::load)
    }

    /// Loads categories from the embedded JSON data.
    fn load() -> Self {
        let categories: HashMap<String, ItemCategory> =
            serde_json::from_str(CATEGORIES_JSON).expect("Invalid categories.json");
        Self { categories }
    }

    /// Looks up a category by slug (case-insensitive).
    #[must_use]
    pub fn get(&self, slug: &str) -> Option<&ItemCategory> {
        self.categories.get(&slug.to_lowercase())
    }

    /// Returns all categories as an iterator.
    pub fn all(&self) -> impl Iterator<Item = &ItemCategory> {
        self.categories.values()
    }

    /// Returns the total number of categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Returns true if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Searches categories by slug or name pattern (case-insensitive).
    pub fn search(&self, pattern: &str) -> Vec<&ItemCategory> {
        let pattern = pattern.to_lowercase();
        self.categories
            .values()
            .filter(|c| {
                c.slug().to_lowercase().contains(&pattern)
                    || c.name().to_lowercase().contains(&pattern)
            })
            .collect()
    }
}
