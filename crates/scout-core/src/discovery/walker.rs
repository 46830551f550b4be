//! File walker: Discovers files in a directory tree

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use thiserror::Error;
use tracing::debug;
use walkdir::{DirEntry, WalkDir};

use super::{ExclusionFilter, ExtensionSet};

/// Errors that can occur during discovery
#[derive(Debug, Error)]
pub enum DiscoveryError {
    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error(transparent)]
    Traversal(#[from] TraversalError),

    #[error("Discovery cancelled")]
    Cancelled,
}

/// A directory entry that could not be listed or classified
#[derive(Debug, Error)]
#[error("Failed to read {}: {}", path.display(), source)]
pub struct TraversalError {
    /// The entry the failure occurred on
    pub path: PathBuf,
    /// The underlying I/O failure
    #[source]
    pub source: io::Error,
}

/// What to do when a directory entry cannot be listed or classified
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    /// Abort the whole discovery on the first failure
    FailFast,
    /// Skip the unreadable subtree, record the failure, keep walking
    #[default]
    Collect,
}

/// The outcome of one discovery run
#[derive(Debug, Default)]
pub struct Discovery {
    /// Discovered files, in pre-order depth-first visit order
    pub files: Vec<PathBuf>,
    /// Failures skipped under [`ErrorPolicy::Collect`]
    pub errors: Vec<TraversalError>,
}

impl Discovery {
    /// Whether the walk covered the whole tree without skipping anything.
    ///
    /// Distinguishes "no files matched" from "discovery was cut short".
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Walks a directory tree and collects files matching an extension allow-list
#[derive(Debug, Clone)]
pub struct Discoverer {
    root: PathBuf,
    extensions: ExtensionSet,
    exclusions: ExclusionFilter,
    error_policy: ErrorPolicy,
    follow_links: bool,
    cancel: Option<Arc<AtomicBool>>,
}

impl Discoverer {
    /// Create a discoverer rooted at the given directory, with the default
    /// exclusion filter and an empty extension allow-list
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            extensions: ExtensionSet::default(),
            exclusions: ExclusionFilter::default(),
            error_policy: ErrorPolicy::default(),
            follow_links: false,
            cancel: None,
        }
    }

    /// Set the extension allow-list
    #[must_use]
    pub fn with_extensions(mut self, extensions: ExtensionSet) -> Self {
        self.extensions = extensions;
        self
    }

    /// Replace the directory exclusion filter
    #[must_use]
    pub fn with_exclusions(mut self, exclusions: ExclusionFilter) -> Self {
        self.exclusions = exclusions;
        self
    }

    /// Choose how unreadable entries are handled
    #[must_use]
    pub fn with_error_policy(mut self, policy: ErrorPolicy) -> Self {
        self.error_policy = policy;
        self
    }

    /// Follow symbolic links that point to directories.
    ///
    /// Off by default so the walk terminates on arbitrary trees. When
    /// enabled, link cycles surface as traversal errors.
    #[must_use]
    pub fn with_follow_links(mut self, follow: bool) -> Self {
        self.follow_links = follow;
        self
    }

    /// Abort the walk once the flag is set; checked between entry visits
    #[must_use]
    pub fn with_cancel_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    /// Get the root directory being scanned
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Walk the tree and collect matching files.
    ///
    /// Files come back in pre-order depth-first order, as the underlying
    /// directory listings yield them. An empty allow-list matches nothing.
    ///
    /// # Errors
    /// Returns [`DiscoveryError::NotADirectory`] if the root exists but is
    /// not a directory, a [`TraversalError`] for an unreadable root or,
    /// under [`ErrorPolicy::FailFast`], for the first unreadable entry,
    /// and [`DiscoveryError::Cancelled`] once the cancel flag is set.
    pub fn discover(&self) -> Result<Discovery, DiscoveryError> {
        self.check_root()?;

        let mut discovery = Discovery::default();
        let walk = WalkDir::new(&self.root)
            .follow_links(self.follow_links)
            .into_iter()
            .filter_entry(|entry| self.keep_entry(entry));

        for result in walk {
            if self.is_cancelled() {
                return Err(DiscoveryError::Cancelled);
            }
            match result {
                Ok(entry) => self.collect_match(entry, &mut discovery.files),
                Err(err) => self.handle_walk_error(err, &mut discovery.errors)?,
            }
        }

        Ok(discovery)
    }

    fn check_root(&self) -> Result<(), DiscoveryError> {
        let meta = fs::metadata(&self.root).map_err(|source| TraversalError {
            path: self.root.clone(),
            source,
        })?;
        if meta.is_dir() {
            Ok(())
        } else {
            Err(DiscoveryError::NotADirectory(self.root.clone()))
        }
    }

    /// Pruning predicate: an excluded directory is not descended into and
    /// its contents are never listed. The root itself is never pruned, and
    /// files are never tested against the exclusion filter.
    fn keep_entry(&self, entry: &DirEntry) -> bool {
        if entry.depth() == 0 || !entry.file_type().is_dir() {
            return true;
        }
        !self
            .exclusions
            .is_excluded(&entry.file_name().to_string_lossy())
    }

    /// Keep regular files whose base name carries an allowed extension.
    /// Non-UTF-8 names cannot match the allow-list and are skipped.
    fn collect_match(&self, entry: DirEntry, files: &mut Vec<PathBuf>) {
        if !entry.file_type().is_file() {
            return;
        }
        let matches = entry
            .file_name()
            .to_str()
            .is_some_and(|name| self.extensions.matches_file_name(name));
        if matches {
            files.push(entry.into_path());
        }
    }

    fn handle_walk_error(
        &self,
        err: walkdir::Error,
        errors: &mut Vec<TraversalError>,
    ) -> Result<(), DiscoveryError> {
        let err = traversal_error(err);
        match self.error_policy {
            ErrorPolicy::FailFast => Err(err.into()),
            ErrorPolicy::Collect => {
                debug!(
                    "Skipping unreadable entry {}: {}",
                    err.path.display(),
                    err.source
                );
                errors.push(err);
                Ok(())
            }
        }
    }

    fn is_cancelled(&self) -> bool {
        self.cancel
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::Relaxed))
    }
}

fn traversal_error(err: walkdir::Error) -> TraversalError {
    let path = err.path().map(Path::to_path_buf).unwrap_or_default();
    let source = err
        .into_io_error()
        .unwrap_or_else(|| io::Error::other("symbolic link cycle"));
    TraversalError { path, source }
}
