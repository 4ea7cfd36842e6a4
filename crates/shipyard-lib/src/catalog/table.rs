//! Case-insensitive keyed lookup shared by every named table.

use std::collections::BTreeMap;

use crate::components::ComponentKind;
use crate::error::{Error, Result};

/// Minimum similarity score for a name to be offered as a suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.7;

/// Maximum number of suggestions attached to an unknown-name error.
const MAX_SUGGESTIONS: usize = 3;

/// A table entry: the display name as written in the data file plus its row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Entry<'a, T> {
    pub name: &'a str,
    pub spec: &'a T,
}

/// Rows of one lookup table, keyed by normalized name.
#[derive(Debug, Clone)]
pub struct Table<T> {
    kind: ComponentKind,
    rows: BTreeMap<String, (String, T)>,
}

impl<T> Table<T> {
    /// Build a table from raw rows, rejecting names that collide once normalized.
    pub(crate) fn from_rows(
        kind: ComponentKind,
        table: &'static str,
        rows: impl IntoIterator<Item = (String, T)>,
    ) -> Result<Self> {
        let mut normalized = BTreeMap::new();
        for (name, spec) in rows {
            let display = name.trim().to_string();
            if display.is_empty() {
                return Err(Error::TableValidation {
                    table,
                    message: "entry name must not be empty".to_string(),
                });
            }
            let key = normalize_name(&display);
            if normalized.contains_key(&key) {
                return Err(Error::TableValidation {
                    table,
                    message: format!("duplicate entry name: {display}"),
                });
            }
            normalized.insert(key, (display, spec));
        }
        Ok(Self {
            kind,
            rows: normalized,
        })
    }

    /// Look up a row by name (case-insensitive).
    pub fn get(&self, name: &str) -> Result<Entry<'_, T>> {
        self.rows
            .get(&normalize_name(name))
            .map(|(display, spec)| Entry {
                name: display.as_str(),
                spec,
            })
            .ok_or_else(|| Error::UnknownComponent {
                kind: self.kind,
                name: name.trim().to_string(),
                suggestions: self.suggestions(name),
            })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.rows.contains_key(&normalize_name(name))
    }

    /// Display names sorted alphabetically.
    pub fn names(&self) -> Vec<&str> {
        self.rows.values().map(|(name, _)| name.as_str()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = Entry<'_, T>> {
        self.rows.values().map(|(name, spec)| Entry {
            name: name.as_str(),
            spec,
        })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn kind(&self) -> ComponentKind {
        self.kind
    }

    fn suggestions(&self, name: &str) -> Vec<String> {
        let needle = normalize_name(name);
        let mut scored: Vec<(f64, &str)> = self
            .rows
            .iter()
            .map(|(key, (display, _))| {
                let score = if !needle.is_empty() && key.contains(&needle) {
                    1.0
                } else {
                    strsim::jaro_winkler(&needle, key)
                };
                (score, display.as_str())
            })
            .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
            .collect();
        scored.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(b.1)));
        scored
            .into_iter()
            .take(MAX_SUGGESTIONS)
            .map(|(_, display)| display.to_string())
            .collect()
    }
}

/// Normalize a name for case-insensitive lookup.
pub(crate) fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}
