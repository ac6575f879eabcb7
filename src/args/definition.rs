//! Command-line argument definition and processing.

use clap::Parser;

use crate::theme::Settings;

/// npmtag - search the npm registry and collect packages as tags
#[derive(Parser, Debug, Default)]
#[command(name = "npmtag")]
#[command(version)]
#[command(about = "Search the npm registry and collect packages as tags", long_about = None)]
pub struct Args {
    /// Pre-fill the search input with this text
    #[arg(short, long)]
    pub query: Option<String>,

    /// Search once, print `name@version  description` lines, and exit
    #[arg(short, long)]
    pub search: Option<String>,

    /// Quiet period in milliseconds before a query is sent (overrides settings.conf)
    #[arg(long)]
    pub debounce_ms: Option<u64>,

    /// Registry base URL (overrides settings.conf)
    #[arg(long)]
    pub registry_url: Option<String>,

    /// Number of results to request, 1-250 (overrides settings.conf)
    #[arg(short, long, value_parser = clap::value_parser!(u16).range(1..=250))]
    pub limit: Option<u16>,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Enable verbose output (equivalent to --log-level debug)
    #[arg(short, long)]
    pub verbose: bool,
}

/// What: Apply command-line overrides on top of file settings.
///
/// Inputs:
/// - `args`: Parsed command-line arguments
/// - `settings`: Settings loaded from `settings.conf`
///
/// Output:
/// - Settings with every provided flag taking precedence.
#[must_use]
pub fn apply_overrides(args: &Args, mut settings: Settings) -> Settings {
    if let Some(ms) = args.debounce_ms {
        settings.debounce_ms = ms;
    }
    if let Some(url) = &args.registry_url {
        settings.registry_url = url.trim_end_matches('/').to_string();
    }
    if let Some(limit) = args.limit {
        settings.results_limit = limit;
    }
    settings
}
