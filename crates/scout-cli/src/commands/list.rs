//! List command: Discover and print matching source files

use std::path::Path;

use anyhow::Result;
use scout_core::{Discoverer, ErrorPolicy, ExclusionFilter, ExtensionSet};
use tracing::{info, warn};

/// Run the list command
///
/// # Errors
/// Returns an error if the root is not a directory or cannot be read, or,
/// with `fail_fast`, if any directory entry cannot be read.
pub fn run(
    path: &Path,
    extensions: &[String],
    exclude: &[String],
    fail_fast: bool,
    follow_links: bool,
) -> Result<()> {
    info!("Scanning directory: {}", path.display());

    let policy = if fail_fast {
        ErrorPolicy::FailFast
    } else {
        ErrorPolicy::Collect
    };

    let mut discoverer = Discoverer::new(path)
        .with_extensions(ExtensionSet::new(extensions.iter().cloned()))
        .with_error_policy(policy)
        .with_follow_links(follow_links);
    if !exclude.is_empty() {
        discoverer = discoverer.with_exclusions(ExclusionFilter::new(exclude.iter().cloned()));
    }

    let discovery = discoverer.discover()?;
    info!("Found {} matching files", discovery.files.len());

    for file in &discovery.files {
        println!("{}", file.display());
    }

    // Report skipped subtrees without failing the run
    for err in &discovery.errors {
        warn!("{err}");
    }

    if discovery.is_complete() {
        info!("✓ Discovery complete");
    } else {
        info!(
            "✓ Discovery finished, {} unreadable entries skipped",
            discovery.errors.len()
        );
    }

    Ok(())
}
