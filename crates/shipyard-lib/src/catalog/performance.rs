//! Drive performance by hull tonnage.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::error::{Error, Result};

use super::drives::{DriveCode, DriveTable};

pub(crate) const PERFORMANCE_TABLE: &str = "hull_performance.json";

#[derive(Debug, Clone, Deserialize)]
struct PerformanceFile {
    columns: Vec<u32>,
    drives: BTreeMap<DriveCode, Vec<u8>>,
}

/// Performance rating of each drive code per tonnage column.
///
/// A zero entry, or a column past the end of a code's list, means the drive
/// cannot be fitted to hulls of that size.
#[derive(Debug, Clone)]
pub struct PerformanceTable {
    columns: Vec<u32>,
    drives: BTreeMap<DriveCode, Vec<u8>>,
}

impl PerformanceTable {
    pub(crate) fn from_json(text: &str, drives: &DriveTable) -> Result<Self> {
        let file: PerformanceFile = serde_json::from_str(text)?;

        if file.columns.is_empty() {
            return Err(Error::TableValidation {
                table: PERFORMANCE_TABLE,
                message: "no tonnage columns defined".to_string(),
            });
        }
        if file.columns.windows(2).any(|w| w[0] >= w[1]) {
            return Err(Error::TableValidation {
                table: PERFORMANCE_TABLE,
                message: "tonnage columns must be strictly ascending".to_string(),
            });
        }
        for (code, values) in &file.drives {
            if values.len() > file.columns.len() {
                return Err(Error::TableValidation {
                    table: PERFORMANCE_TABLE,
                    message: format!(
                        "drive {code} lists {} values for {} columns",
                        values.len(),
                        file.columns.len()
                    ),
                });
            }
        }
        if let Some(code) = drives.codes().find(|c| !file.drives.contains_key(c)) {
            return Err(Error::TableValidation {
                table: PERFORMANCE_TABLE,
                message: format!("drive {code} has no performance row"),
            });
        }

        Ok(Self {
            columns: file.columns,
            drives: file.drives,
        })
    }

    /// Index of the largest column not above `tonnage`.
    pub fn column_index(&self, tonnage: u32) -> Option<usize> {
        self.columns.iter().rposition(|&column| column <= tonnage)
    }

    pub fn columns(&self) -> &[u32] {
        &self.columns
    }

    /// Performance of `code` at `tonnage`, or `None` when incompatible.
    pub fn rating(&self, code: DriveCode, tonnage: u32) -> Option<u8> {
        let index = self.column_index(tonnage)?;
        self.drives
            .get(&code)
            .and_then(|values| values.get(index))
            .copied()
            .filter(|&value| value > 0)
    }

    pub fn is_compatible(&self, code: DriveCode, tonnage: u32) -> bool {
        self.rating(code, tonnage).is_some()
    }
}
