//! Directory exclusion predicate

/// Directory name fragments pruned when the caller does not override them:
/// version-control metadata, dependency caches, and build output.
pub const DEFAULT_EXCLUDED_FRAGMENTS: &[&str] = &["node_modules", ".git", "dist"];

/// Decides whether a directory (and everything beneath it) is skipped.
///
/// A directory is excluded when its base name *contains* one of the
/// configured fragments. Containment is a policy choice, not exact
/// matching: with the defaults, `my.git.bak` and `distribution` are both
/// pruned. Files are never tested against this filter, only directories.
#[derive(Debug, Clone)]
pub struct ExclusionFilter {
    fragments: Vec<String>,
}

impl Default for ExclusionFilter {
    fn default() -> Self {
        Self::new(DEFAULT_EXCLUDED_FRAGMENTS.iter().copied())
    }
}

impl ExclusionFilter {
    /// Create a filter from directory name fragments
    #[must_use]
    pub fn new<I, S>(fragments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            fragments: fragments.into_iter().map(Into::into).collect(),
        }
    }

    /// A filter that prunes nothing
    #[must_use]
    pub fn none() -> Self {
        Self {
            fragments: Vec::new(),
        }
    }

    /// Whether a directory base name matches one of the fragments
    #[must_use]
    pub fn is_excluded(&self, name: &str) -> bool {
        self.fragments.iter().any(|f| name.contains(f))
    }
}
