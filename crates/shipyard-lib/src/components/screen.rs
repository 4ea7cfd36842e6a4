use serde::Serialize;

use crate::catalog::Catalog;
use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Screen {
    name: String,
    tl: u8,
    tonnage: f64,
    cost: f64,
}

impl Screen {
    pub fn new(catalog: &Catalog, name: &str) -> Result<Self> {
        let entry = catalog.screens().get(name)?;
        Ok(Self {
            name: entry.name.to_string(),
            tl: entry.spec.tl,
            tonnage: entry.spec.tonnage,
            cost: entry.spec.cost,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tl(&self) -> u8 {
        self.tl
    }

    pub fn tonnage(&self) -> f64 {
        self.tonnage
    }

    pub fn cost(&self) -> f64 {
        self.cost
    }
}
