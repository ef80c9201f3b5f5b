//! Display utilities and output formatting for the skidka CLI.

use clap::ValueEnum;
use skidka_lib::prelude::*;

/// Output format for exported reports.
#[derive(Clone, Copy, ValueEnum)]
pub(crate) enum Format {
    Csv,
    Json,
    Ndjson,
}

impl Format {
    /// Returns the file extension for this format.
    pub(crate) const fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
            Self::Ndjson => "ndjson",
        }
    }

    /// Maps the CLI flag onto the library's format identifier.
    pub(crate) const fn to_output(self) -> OutputFormat {
        match self {
            Self::Csv => OutputFormat::Csv,
            Self::Json => OutputFormat::Json,
            Self::Ndjson => OutputFormat::Ndjson,
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}

/// Renders one market item as a multi-line terminal block.
pub(crate) fn render_market_item(item: &MarketItem) -> String {
    format!(
        "{}\n  price: ${}  steam: ${}  discount: {}%\n  float: {}  pattern: {}\n  {}",
        item.name,
        item.discounted_price,
        item.steam_price,
        item.discount * 100.0,
        item.float,
        item.pattern,
        item.market_link
    )
}
