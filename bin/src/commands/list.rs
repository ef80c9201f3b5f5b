//! List command implementation.
//!
//! This module handles listing the known market item categories with an
//! optional search pattern.

use anyhow::Result;

use skidka_lib::prelude::*;

/// List known item categories, optionally filtered by a search pattern.
pub(crate) fn list_categories(search: Option<&str>) -> Result<()> {
    let registry = CategoryRegistry::global();

    let mut categories: Vec<_> = match search {
        Some(pattern) => registry.search(pattern),
        None => registry.all().collect(),
    };
    categories.sort_by_key(|c| c.type_id());

    if categories.is_empty() {
        println!("No categories found.");
        return Ok(());
    }

    println!("{:<15} {:<20} {:<8}", "SLUG", "NAME", "TYPE");
    println!("{}", "-".repeat(45));

    for category in &categories {
        println!(
            "{:<15} {:<20} {:<8}",
            category.slug(),
            category.name(),
            category.type_id()
        );
    }

    println!("\nTotal: {} categories", categories.len());
    Ok(())
}
