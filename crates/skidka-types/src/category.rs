//! Market item category definitions.

use serde::{Deserialize, Serialize};

/// A market item category with the numeric identifier the sell-orders API
/// expects in its `type[]` query parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemCategory {
    /// Unique identifier (e.g. "knife", "rifle").
    slug: String,
    /// Human-readable name (e.g. "Knives").
    name: String,
    /// Numeric identifier sent to the API.
    type_id: u32,
}

impl ItemCategory {
    /// Creates a new item category.
    #[must_use]
    pub fn new(slug: impl Into<String>, name: impl Into<String>, type_id: u32) -> Self {
        Self {
            slug: slug.into(),
            name: name.into(),
            type_id,
        }
    }

    /// Returns the category slug.
    #[must_use]
    pub fn slug(&self) -> &str {
        &self.slug
    }

    /// Returns the human-readable name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the numeric identifier the API expects.
    #[must_use]
    pub const fn type_id(&self) -> u32 {
        self.type_id
    }
}

impl std::fmt::Display for ItemCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.slug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_creation() {
        let category = ItemCategory::new("knife", "Knives", 1);
        assert_eq!(category.slug(), "knife");
        assert_eq!(category.name(), "Knives");
        assert_eq!(category.type_id(), 1);
        assert_eq!(category.to_string(), "Knives (knife)");
    }
}
