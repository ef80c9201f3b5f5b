//! Report file generation.

use chrono::NaiveDateTime;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use skidka_types::PromoProduct;

use crate::csv::CsvFormatter;
use crate::formatter::{ExportError, Formatter, OutputFormat};
use crate::json::JsonFormatter;

/// A written report file and its derived name.
///
/// Ownership passes to the caller once the write completes; the exporter
/// keeps no reference to the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    /// Derived file name, e.g. `Москва_01_03_2024_12_00.csv`.
    pub filename: String,
    /// Full path of the written file.
    pub path: PathBuf,
    /// Number of data rows written.
    pub rows: usize,
}

/// Derives the report filename from a store label and a timestamp.
///
/// Takes the first whitespace-delimited token of the label and drops its
/// first two characters (store labels carry a `г.` city prefix), then
/// appends the timestamp as `_DD_MM_YYYY_HH_MM` and the format extension.
#[must_use]
pub fn export_filename(store_label: &str, stamp: NaiveDateTime, extension: &str) -> String {
    let token = store_label.split_whitespace().next().unwrap_or("");
    let city: String = token.chars().skip(2).collect();
    format!("{city}_{}.{extension}", stamp.format("%d_%m_%Y_%H_%M"))
}

/// Writes a promo report into `out_dir` and returns the artifact.
///
/// The store label is taken from the first record; rows keep collection
/// order. The timestamp is supplied by the caller so the filename is
/// deterministic under test.
///
/// # Errors
///
/// [`ExportError::NoData`] when `products` is empty (there is no record to
/// take the store label from), or an I/O error from writing the file.
pub fn write_promo_report(
    products: &[PromoProduct],
    out_dir: &Path,
    format: OutputFormat,
    stamp: NaiveDateTime,
) -> Result<ExportArtifact, ExportError> {
    let first = products.first().ok_or(ExportError::NoData)?;
    let filename = export_filename(&first.store_name, stamp, format.extension());
    let path = out_dir.join(&filename);

    let file = File::create(&path)?;
    let writer = BufWriter::new(file);
    match format {
        OutputFormat::Csv => CsvFormatter::new().write_promos(products, writer)?,
        OutputFormat::Json => JsonFormatter::new().write_promos(products, writer)?,
        OutputFormat::Ndjson => JsonFormatter::ndjson().write_promos(products, writer)?,
    }

    Ok(ExportArtifact {
        filename,
        path,
        rows: products.len(),
    })
}
