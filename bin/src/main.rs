//! skidka CLI - collect discounted offers from paginated shop APIs.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod display;

use display::Format;

#[derive(Parser)]
#[command(name = "skidka")]
#[command(about = "Collect discounted offers from paginated shop APIs", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Quiet mode (suppress progress output)
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Stream discounted market items
    Market {
        /// Maximum number of items to emit (must be positive)
        #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
        count: u32,

        /// Minimum discount to keep, as a percentage (30) or ratio (0.3)
        #[arg(short, long, default_value = "0")]
        discount: f64,

        /// Minimum listing price in USD
        #[arg(long, default_value = "0")]
        min_price: u64,

        /// Maximum listing price in USD
        #[arg(long, default_value = "1000000")]
        max_price: u64,

        /// Category slugs to include (see `skidka list`)
        #[arg(short, long)]
        types: Vec<String>,

        /// Page size per request
        #[arg(long, default_value = "60")]
        limit: u32,
    },

    /// Export a store's promo offers to a report file
    Export {
        /// Store identifier (e.g. 12122)
        store: String,

        /// Output directory for the report
        #[arg(short, long, default_value = ".")]
        output_dir: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "csv")]
        format: Format,
    },

    /// List known market item categories
    List {
        /// Search pattern
        #[arg(short, long)]
        search: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Show help if no command provided
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Market {
            count,
            discount,
            min_price,
            max_price,
            types,
            limit,
        } => commands::market::market(count, discount, min_price, max_price, &types, limit).await,
        Commands::Export {
            store,
            output_dir,
            format,
        } => commands::export::export(&store, &output_dir, format, cli.quiet).await,
        Commands::List { search } => commands::list::list_categories(search.as_deref()),
    }
}

/// Initializes the log subscriber; `RUST_LOG` wins over the verbosity flag.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();
}
