use serde::Serialize;

use crate::catalog::{Catalog, MiscCategory, MiscScaling};
use crate::error::Result;

/// Name of the living-space item that escape pods are counted against.
pub(crate) const STATEROOM: &str = "Stateroom";

/// A stack of identical miscellaneous fittings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MiscItem {
    name: String,
    category: MiscCategory,
    count: u32,
    unit_tonnage: f64,
    unit_cost: f64,
    scaling: MiscScaling,
}

impl MiscItem {
    pub fn new(catalog: &Catalog, name: &str, count: u32) -> Result<Self> {
        let entry = catalog.misc().get(name)?;
        Ok(Self {
            name: entry.name.to_string(),
            category: entry.spec.category,
            count,
            unit_tonnage: entry.spec.tonnage,
            unit_cost: entry.spec.cost,
            scaling: entry.spec.scaling,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> MiscCategory {
        self.category
    }

    pub fn scaling(&self) -> MiscScaling {
        self.scaling
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn with_count(mut self, count: u32) -> Self {
        self.count = count;
        self
    }

    pub fn is_stateroom(&self) -> bool {
        self.name.eq_ignore_ascii_case(STATEROOM)
    }

    /// Tonnage for a hull of `hull_tonnage` carrying `staterooms` staterooms.
    pub fn tonnage(&self, hull_tonnage: u32, staterooms: u32) -> f64 {
        match self.scaling {
            MiscScaling::Flat => self.unit_tonnage * f64::from(self.count),
            MiscScaling::HullFraction => {
                self.unit_tonnage * f64::from(hull_tonnage) * f64::from(self.count)
            }
            MiscScaling::PerStateroom => self.unit_tonnage * f64::from(staterooms),
        }
    }

    /// Cost for a hull of `hull_tonnage` carrying `staterooms` staterooms.
    pub fn cost(&self, hull_tonnage: u32, staterooms: u32) -> f64 {
        match self.scaling {
            MiscScaling::Flat => self.unit_cost * f64::from(self.count),
            MiscScaling::HullFraction => self.unit_cost * self.tonnage(hull_tonnage, staterooms),
            MiscScaling::PerStateroom => self.unit_cost * f64::from(staterooms),
        }
    }
}
