//! Common test utilities shared by the integration tests.

use std::fs;
use std::path::{Path, PathBuf};

use shipyard_lib::{Catalog, Spacecraft, TABLE_FILES};

/// Directory holding the built-in lookup tables.
#[allow(dead_code)]
pub fn data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
}

/// Copy every built-in table into `dir` so a test can edit one of them.
#[allow(dead_code)]
pub fn copy_tables(dir: &Path) {
    for name in TABLE_FILES {
        fs::copy(data_dir().join(name), dir.join(name)).expect("copy table");
    }
}

/// A fresh hull on the built-in catalog.
#[allow(dead_code)]
pub fn ship(tonnage: u32) -> Spacecraft<'static> {
    Spacecraft::new(Catalog::builtin(), tonnage).expect("standard hull")
}

/// Compare two MCr or ton values.
#[allow(dead_code)]
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-6,
        "expected {expected}, got {actual}"
    );
}
