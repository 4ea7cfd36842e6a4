use serde::Serialize;

use crate::catalog::Catalog;
use crate::error::Result;

/// Sensor suite. Every hull carries exactly one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sensor {
    name: String,
    tl: u8,
    equipment: String,
    tonnage: f64,
    cost: f64,
    sensors_dm: i8,
}

impl Sensor {
    pub fn new(catalog: &Catalog, name: &str) -> Result<Self> {
        let entry = catalog.sensors().get(name)?;
        Ok(Self {
            name: entry.name.to_string(),
            tl: entry.spec.tl,
            equipment: entry.spec.equipment.clone(),
            tonnage: entry.spec.tonnage,
            cost: entry.spec.cost,
            sensors_dm: entry.spec.sensors_dm,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tl(&self) -> u8 {
        self.tl
    }

    pub fn equipment(&self) -> &str {
        &self.equipment
    }

    pub fn tonnage(&self) -> f64 {
        self.tonnage
    }

    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Dice modifier for sensor checks.
    pub fn sensors_dm(&self) -> i8 {
        self.sensors_dm
    }
}
