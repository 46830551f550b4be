//! Command-line surface for the scout binary

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Extensions scanned when no `--ext` is given
pub const DEFAULT_EXTENSIONS: &[&str] = &[".js", ".ts", ".py", ".go", ".sh"];

#[derive(Parser)]
#[command(name = "scout")]
#[command(version, about = "Recursive source file discovery", long_about = None)]
pub struct Cli {
    /// Directory to scan
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// File extension to include, in `.ext` form (repeatable)
    #[arg(long = "ext", value_name = "EXT")]
    pub extensions: Vec<String>,

    /// Directory name fragment to prune (repeatable; replaces the
    /// node_modules/.git/dist defaults)
    #[arg(long = "exclude", value_name = "FRAGMENT")]
    pub exclude: Vec<String>,

    /// Abort on the first unreadable entry instead of skipping it
    #[arg(long)]
    pub fail_fast: bool,

    /// Follow symbolic links that point to directories
    #[arg(long)]
    pub follow_links: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Extension allow-list for the run: explicit `--ext` values, or the
/// default list when none were given
#[must_use]
pub fn effective_extensions(explicit: &[String]) -> Vec<String> {
    if explicit.is_empty() {
        DEFAULT_EXTENSIONS.iter().map(|s| (*s).to_string()).collect()
    } else {
        explicit.to_vec()
    }
}

/// Pick the log filter level for the verbose flag
#[must_use]
pub fn log_filter(verbose: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    }
}

/// Initialize the global tracing subscriber
pub fn setup_logging(verbose: bool) {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(log_filter(verbose))
        .init();
}
