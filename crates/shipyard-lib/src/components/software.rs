use serde::Serialize;

use crate::catalog::Catalog;
use crate::error::{Error, Result};

/// Package whose rating is reduced by the Jump Control Spec computer addon.
pub const JUMP_CONTROL: &str = "Jump Control";

/// Rating points the Jump Control Spec addon takes off Jump Control.
pub(crate) const JUMP_CONTROL_SPEC_DISCOUNT: u32 = 5;

/// A software package installed at one level.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Software {
    name: String,
    level: u8,
    tl: u8,
    rating: u32,
    cost: f64,
}

impl Software {
    pub fn new(catalog: &Catalog, name: &str, level: u8) -> Result<Self> {
        let entry = catalog.software().get(name)?;
        let spec = entry
            .spec
            .levels
            .get(&level)
            .ok_or_else(|| Error::InvalidSoftwareLevel {
                name: entry.name.to_string(),
                level,
            })?;
        Ok(Self {
            name: entry.name.to_string(),
            level,
            tl: spec.tl,
            rating: spec.rating,
            cost: spec.cost,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    pub fn tl(&self) -> u8 {
        self.tl
    }

    /// Rating as listed in the table, before any computer addon.
    pub fn rating(&self) -> u32 {
        self.rating
    }

    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Rating this package consumes on a computer with or without Jump Control Spec.
    pub fn effective_rating(&self, jump_control_spec: bool) -> u32 {
        if jump_control_spec && self.name.eq_ignore_ascii_case(JUMP_CONTROL) {
            self.rating.saturating_sub(JUMP_CONTROL_SPEC_DISCOUNT)
        } else {
            self.rating
        }
    }
}
