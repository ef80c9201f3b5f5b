//! Market streaming command implementation.
//!
//! Pulls from the lazy market stream and prints one block per item, stopping
//! as soon as the requested count is reached.

use anyhow::{Context, Result};
use futures::{StreamExt, pin_mut};

use skidka_lib::prelude::*;

use crate::display::render_market_item;

/// Stream up to `count` discounted market items to stdout.
pub(crate) async fn market(
    count: u32,
    discount: f64,
    min_price: u64,
    max_price: u64,
    types: &[String],
    limit: u32,
) -> Result<()> {
    // Resolve category slugs to the numeric ids the API expects.
    let registry = CategoryRegistry::global();
    let mut type_ids = Vec::with_capacity(types.len());
    for slug in types {
        let category = registry
            .get(slug)
            .with_context(|| format!("Unknown category: {slug} (see `skidka list`)"))?;
        type_ids.push(category.type_id());
    }

    let client = PageClient::with_defaults().context("Failed to create HTTP client")?;
    let source = MarketSource::new(MarketQuery {
        limit,
        min_price,
        max_price,
        types: type_ids,
        min_discount: discount,
    });

    let items = market_stream(&client, &source).take(count as usize);
    pin_mut!(items);
    let mut emitted = 0u32;
    while let Some(item) = items.next().await {
        println!("{}\n", render_market_item(&item));
        emitted += 1;
    }

    if emitted < count {
        println!("No more items available.");
    }

    Ok(())
}
