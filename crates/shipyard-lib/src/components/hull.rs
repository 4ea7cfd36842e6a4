use serde::Serialize;

use crate::catalog::Catalog;
use crate::error::Result;

/// Hull shape: Standard, Streamlined, or Distributed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HullConfig {
    name: String,
    mod_hull_cost: f64,
    builtin_fuel_scoops: bool,
    allows_fuel_scoops: bool,
}

impl HullConfig {
    pub fn new(catalog: &Catalog, name: &str) -> Result<Self> {
        let entry = catalog.hull_configs().get(name)?;
        Ok(Self {
            name: entry.name.to_string(),
            mod_hull_cost: entry.spec.mod_hull_cost,
            builtin_fuel_scoops: entry.spec.builtin_fuel_scoops,
            allows_fuel_scoops: entry.spec.allows_fuel_scoops,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Multiplier applied to the base hull cost.
    pub fn mod_hull_cost(&self) -> f64 {
        self.mod_hull_cost
    }

    pub fn builtin_fuel_scoops(&self) -> bool {
        self.builtin_fuel_scoops
    }

    pub fn allows_fuel_scoops(&self) -> bool {
        self.allows_fuel_scoops
    }
}

/// Hull coating or treatment priced per hull ton.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HullOption {
    name: String,
    tl: u8,
    cost_per_hull_ton: f64,
}

impl HullOption {
    pub fn new(catalog: &Catalog, name: &str) -> Result<Self> {
        let entry = catalog.hull_options().get(name)?;
        Ok(Self {
            name: entry.name.to_string(),
            tl: entry.spec.tl,
            cost_per_hull_ton: entry.spec.cost_per_hull_ton,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tl(&self) -> u8 {
        self.tl
    }

    pub fn cost(&self, hull_tonnage: u32) -> f64 {
        f64::from(hull_tonnage) * self.cost_per_hull_ton
    }
}
