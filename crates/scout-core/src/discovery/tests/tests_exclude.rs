//! Tests for the directory exclusion filter

use crate::discovery::ExclusionFilter;

#[test]
fn test_default_fragments_are_excluded() {
    let filter = ExclusionFilter::default();

    assert!(filter.is_excluded("node_modules"));
    assert!(filter.is_excluded(".git"));
    assert!(filter.is_excluded("dist"));
}

#[test]
fn test_matching_is_by_substring() {
    let filter = ExclusionFilter::default();

    assert!(filter.is_excluded("my.git.bak"));
    assert!(filter.is_excluded("distribution"));
    assert!(filter.is_excluded("old_node_modules"));
}

#[test]
fn test_ordinary_names_are_kept() {
    let filter = ExclusionFilter::default();

    assert!(!filter.is_excluded("src"));
    assert!(!filter.is_excluded("docs"));
    assert!(!filter.is_excluded("github"));
}

#[test]
fn test_custom_fragments_replace_defaults() {
    let filter = ExclusionFilter::new(["target"]);

    assert!(filter.is_excluded("target"));
    assert!(!filter.is_excluded("node_modules"));
}

#[test]
fn test_none_excludes_nothing() {
    let filter = ExclusionFilter::none();

    assert!(!filter.is_excluded("node_modules"));
    assert!(!filter.is_excluded(".git"));
}
