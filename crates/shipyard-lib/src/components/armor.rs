use serde::Serialize;

use crate::catalog::Catalog;
use crate::error::Result;

/// One layer of hull armor.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Armor {
    name: String,
    tl: u8,
    protection: u32,
    hull_amount: f64,
    cost_by_hull_percentage: f64,
}

impl Armor {
    pub fn new(catalog: &Catalog, name: &str) -> Result<Self> {
        let entry = catalog.armor().get(name)?;
        Ok(Self {
            name: entry.name.to_string(),
            tl: entry.spec.tl,
            protection: entry.spec.protection,
            hull_amount: entry.spec.hull_amount,
            cost_by_hull_percentage: entry.spec.cost_by_hull_percentage,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tl(&self) -> u8 {
        self.tl
    }

    pub fn protection(&self) -> u32 {
        self.protection
    }

    /// Tonnage this layer takes from a hull of `hull_tonnage`.
    pub fn tonnage(&self, hull_tonnage: u32) -> f64 {
        f64::from(hull_tonnage) * self.hull_amount
    }

    /// Price of this layer on a hull whose base cost is `hull_cost`.
    pub fn cost(&self, hull_cost: f64) -> f64 {
        hull_cost * self.cost_by_hull_percentage
    }
}
