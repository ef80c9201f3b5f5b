//! Output formatters and bulk export for skidka.
//!
//! This crate turns a collected promo run into a report file:
//!
//! - [`Formatter`] - output format abstraction
//! - [`CsvFormatter`] / [`JsonFormatter`] - the concrete formats
//! - [`write_promo_report`] - derives the filename and writes the artifact

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/skidka-rs/skidka/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod artifact;
mod csv;
mod formatter;
mod json;

pub use artifact::{ExportArtifact, export_filename, write_promo_report};
pub use csv::{CsvFormatter, PROMO_COLUMNS};
pub use formatter::{ExportError, Formatter, OutputFormat};
pub use json::{JsonFormatter, JsonStyle};
