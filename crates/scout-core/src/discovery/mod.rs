//! Discovery module: File discovery with extension filtering
//!
//! Responsible for walking a directory tree, pruning excluded
//! directories, and selecting files by their extension.

mod exclude;
mod extensions;
mod walker;

pub use exclude::ExclusionFilter;
pub use extensions::ExtensionSet;
pub use walker::{Discoverer, Discovery, DiscoveryError, ErrorPolicy, TraversalError};

#[cfg(test)]
mod tests;
