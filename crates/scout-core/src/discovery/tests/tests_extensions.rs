//! Tests for the extension allow-list

use crate::discovery::extensions::extension_of;
use crate::discovery::ExtensionSet;
use rstest::rstest;

#[rstest]
#[case("file1.ts", ".ts")]
#[case("archive.tar.gz", ".gz")]
#[case("trailing.", ".")]
#[case("README", "")]
#[case(".gitignore", "")]
#[case(".env.local", ".local")]
fn test_extension_of(#[case] name: &str, #[case] expected: &str) {
    assert_eq!(extension_of(name), expected);
}

#[test]
fn test_contains_is_exact() {
    let set = ExtensionSet::new([".ts", ".js"]);

    assert!(set.contains(".ts"));
    assert!(!set.contains("ts"));
    assert!(!set.contains(".tsx"));
}

#[test]
fn test_matching_is_case_sensitive() {
    let set = ExtensionSet::new([".ts"]);

    assert!(set.matches_file_name("app.ts"));
    assert!(!set.matches_file_name("app.TS"));
    assert!(!set.matches_file_name("app.Ts"));
}

#[test]
fn test_matches_file_name_uses_last_delimiter() {
    let set = ExtensionSet::new([".gz"]);

    assert!(set.matches_file_name("backup.tar.gz"));
    assert!(!set.matches_file_name("gz"));
}

#[test]
fn test_empty_set_matches_nothing() {
    let set = ExtensionSet::default();

    assert!(set.is_empty());
    assert!(!set.matches_file_name("main.rs"));
    assert!(!set.matches_file_name("README"));
}
