use crate::document::{TargetDocument, INDEX_HTML};
use std::fs;
use tempfile::TempDir;

pub mod checks_tests;
pub mod fixtures;

/// Write `html` as index.html into a fresh directory.
/// The directory lives as long as the returned guard.
pub fn write_index(html: impl AsRef<[u8]>) -> (TempDir, TargetDocument) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join(INDEX_HTML);
    fs::write(&path, html).expect("Failed to write index.html");
    (dir, TargetDocument::at(path))
}

/// A document whose index.html was never written
pub fn missing_index() -> (TempDir, TargetDocument) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let document = TargetDocument::at(dir.path().join(INDEX_HTML));
    (dir, document)
}

/// `prefix` padded with filler up to exactly `len` characters
pub fn padded(prefix: &str, len: usize) -> String {
    let used = prefix.chars().count();
    assert!(used <= len, "prefix longer than {}", len);
    format!("{}{}", prefix, "x".repeat(len - used))
}
