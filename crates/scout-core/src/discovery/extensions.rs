//! Extension allow-list and file-name extension rules

/// The allow-list of file-name suffixes used to select matching files.
///
/// Entries are kept in the conventional `.ext` form and compared exactly,
/// with no case normalization: `.ts` does not match `file.TS`.
#[derive(Debug, Clone, Default)]
pub struct ExtensionSet {
    entries: Vec<String>,
}

impl ExtensionSet {
    /// Create an allow-list from `.ext`-form suffixes
    #[must_use]
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            entries: entries.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether the allow-list has no entries (nothing can match)
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Exact membership test for an already-extracted extension
    #[must_use]
    pub fn contains(&self, extension: &str) -> bool {
        self.entries.iter().any(|e| e == extension)
    }

    /// Whether a file base name carries one of the allowed extensions
    #[must_use]
    pub fn matches_file_name(&self, name: &str) -> bool {
        self.contains(extension_of(name))
    }
}

/// Extract the extension of a base name: the substring from the last `.`
/// onward, including the dot.
///
/// Names without a `.`, and names whose only `.` is their first character
/// (`.gitignore`), have the empty extension.
#[must_use]
pub(crate) fn extension_of(name: &str) -> &str {
    match name.rfind('.') {
        Some(idx) if idx > 0 => &name[idx..],
        _ => "",
    }
}
