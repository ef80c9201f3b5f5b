//! Promo export command implementation.
//!
//! Drains a store's promo offers page by page - reporting progress as the
//! run advances - then writes the collected offers as a report file.

use std::path::Path;

use anyhow::{Context, Result};
use futures::{StreamExt, pin_mut};
use indicatif::{ProgressBar, ProgressStyle};

use skidka_lib::prelude::*;

use crate::display::Format;

/// Collect every promo offer for `store` and write the report.
pub(crate) async fn export(
    store: &str,
    output_dir: &Path,
    format: Format,
    quiet: bool,
) -> Result<()> {
    let client = PageClient::with_defaults().context("Failed to create HTTP client")?;
    let source = PromoSource::new(store);

    let progress = if quiet {
        ProgressBar::hidden()
    } else {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .expect("Invalid progress template"),
        );
        pb.set_message(format!("Collecting offers for store {store}"));
        pb
    };

    // Drive the page stream here rather than through collect_promos so the
    // spinner can follow the run.
    let mut products = Vec::new();
    let batches = page_stream(&client, &source);
    pin_mut!(batches);
    while let Some(batch) = batches.next().await {
        products.extend(batch.records);
        progress.set_message(format!(
            "Collected {} offers ({} pages)",
            products.len(),
            batch.page
        ));
        progress.tick();
    }
    progress.finish_with_message(format!("Collected {} offers", products.len()));

    if products.is_empty() {
        println!("No promo data available for store {store}.");
        return Ok(());
    }

    let stamp = chrono::Local::now().naive_local();
    let artifact = write_promo_report(&products, output_dir, format.to_output(), stamp)
        .context("Failed to write report")?;

    if !quiet {
        println!("Report written to: {}", artifact.path.display());
    }

    Ok(())
}
