//! Tests for logging setup
//!
//! The global tracing subscriber can only be initialized once per process,
//! so these tests exercise the filter selection rather than `init` itself.

use crate::cli::log_filter;

#[test]
fn test_log_filter_defaults_to_info() {
    let filter = log_filter(false);
    let debug_str = format!("{filter:?}");
    assert!(debug_str.contains("info") || debug_str.contains("INFO"));
}

#[test]
fn test_log_filter_verbose_selects_debug() {
    let filter = log_filter(true);
    let debug_str = format!("{filter:?}");
    assert!(debug_str.contains("debug") || debug_str.contains("DEBUG"));
}
