//! Shared test-only helpers for minipaste_core.

use crate::PasteStore;
use std::collections::BTreeSet;
use tempfile::TempDir;

/// Creates a store over an isolated temporary data directory.
///
/// Keep the [`TempDir`] alive for the full test to preserve the backing files.
///
/// # Panics
/// Panics if temp-dir creation or store initialization fails.
pub(crate) fn setup_temp_store() -> (PasteStore, TempDir) {
    let temp_dir = TempDir::new().expect("temp dir");
    let store = PasteStore::open(temp_dir.path().join("data"), 6).expect("store");
    (store, temp_dir)
}

/// File names currently present in the store directory, sorted.
pub(crate) fn stored_file_names(store: &PasteStore) -> BTreeSet<String> {
    std::fs::read_dir(store.dir())
        .expect("read data dir")
        .map(|entry| {
            entry
                .expect("dir entry")
                .file_name()
                .into_string()
                .expect("utf-8 file name")
        })
        .collect()
}
