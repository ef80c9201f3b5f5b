//! Transport-boundary operations.
//!
//! These are the two entry points a delivery layer (bot, CLI) consumes:
//! a lazy stream of market items to bound and forward one by one, and a
//! drain-everything promo export that hands back a report artifact.
//! Per-session parameters travel through the source arguments; nothing here
//! is process-wide.

use std::path::Path;

use futures::{Stream, StreamExt, pin_mut};

use skidka_export::{ExportArtifact, ExportError, OutputFormat, write_promo_report};
use skidka_fetch::{MarketSource, PageClient, PromoSource, flatten_records, page_stream};
use skidka_types::{MarketItem, PromoProduct, SkidkaError};

/// Returns the lazy stream of market items for one collection run.
///
/// The stream ends when the upstream runs out of matching data or on the
/// first anomaly. Consumers bound it with [`StreamExt::take`]; dropping the
/// stream halts further fetches.
pub fn market_stream<'a>(
    client: &'a PageClient,
    source: &'a MarketSource,
) -> impl Stream<Item = MarketItem> + 'a {
    flatten_records(page_stream(client, source))
}

/// Drains one promo collection run into an ordered collection.
///
/// A mid-run anomaly truncates the collection to what was gathered so far;
/// partial results are preserved rather than discarded.
pub async fn collect_promos(client: &PageClient, source: &PromoSource) -> Vec<PromoProduct> {
    let mut products = Vec::new();
    let batches = page_stream(client, source);
    pin_mut!(batches);
    while let Some(batch) = batches.next().await {
        products.extend(batch.records);
    }
    products
}

/// Collects a store's promo offers and writes them into `out_dir` as a
/// report file.
///
/// Returns the artifact; delivering the file - and deleting it afterwards -
/// is the caller's responsibility.
///
/// # Errors
///
/// [`SkidkaError::NoData`] when the run produced zero records, otherwise an
/// I/O or serialization error from writing the file.
pub async fn export_promos(
    client: &PageClient,
    source: &PromoSource,
    out_dir: &Path,
    format: OutputFormat,
) -> Result<ExportArtifact, SkidkaError> {
    let products = collect_promos(client, source).await;
    let stamp = chrono::Local::now().naive_local();
    write_promo_report(&products, out_dir, format, stamp).map_err(|e| match e {
        ExportError::NoData => SkidkaError::NoData {
            store: source.store_id().to_string(),
        },
        ExportError::Io(io) => SkidkaError::Io(io),
        ExportError::Json(json) => SkidkaError::Json(json),
        other => SkidkaError::Export(other.to_string()),
    })
}
