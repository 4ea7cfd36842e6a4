use std::fmt;

use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, DriveCode};
use crate::error::Result;

use super::ComponentKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DriveKind {
    Jump,
    Maneuver,
    PowerPlant,
}

impl DriveKind {
    pub const ALL: [DriveKind; 3] = [DriveKind::Jump, DriveKind::Maneuver, DriveKind::PowerPlant];

    pub fn component_kind(&self) -> ComponentKind {
        match self {
            DriveKind::Jump => ComponentKind::JumpDrive,
            DriveKind::Maneuver => ComponentKind::ManeuverDrive,
            DriveKind::PowerPlant => ComponentKind::PowerPlant,
        }
    }
}

impl fmt::Display for DriveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.component_kind().fmt(f)
    }
}

/// A jump drive, maneuver drive, or power plant of a given size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Drive {
    kind: DriveKind,
    code: DriveCode,
    tonnage: f64,
    cost: f64,
    fuel_two_weeks: f64,
}

impl Drive {
    /// Look up a drive of `kind` by its code letter.
    pub fn new(catalog: &Catalog, kind: DriveKind, code: &str) -> Result<Self> {
        let code: DriveCode = code.parse()?;
        Self::from_code(catalog, kind, code)
    }

    pub fn from_code(catalog: &Catalog, kind: DriveKind, code: DriveCode) -> Result<Self> {
        let spec = catalog.drive(code)?;
        let (stats, fuel_two_weeks) = match kind {
            DriveKind::Jump => (spec.jump, 0.0),
            DriveKind::Maneuver => (spec.maneuver, 0.0),
            DriveKind::PowerPlant => (spec.plant, spec.plant_fuel_two_weeks),
        };
        Ok(Self {
            kind,
            code,
            tonnage: stats.tonnage,
            cost: stats.cost,
            fuel_two_weeks,
        })
    }

    pub fn jump(catalog: &Catalog, code: &str) -> Result<Self> {
        Self::new(catalog, DriveKind::Jump, code)
    }

    pub fn maneuver(catalog: &Catalog, code: &str) -> Result<Self> {
        Self::new(catalog, DriveKind::Maneuver, code)
    }

    pub fn power_plant(catalog: &Catalog, code: &str) -> Result<Self> {
        Self::new(catalog, DriveKind::PowerPlant, code)
    }

    pub fn kind(&self) -> DriveKind {
        self.kind
    }

    pub fn code(&self) -> DriveCode {
        self.code
    }

    pub fn tonnage(&self) -> f64 {
        self.tonnage
    }

    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Fuel burned over two weeks; zero for anything but a power plant.
    pub fn fuel_two_weeks(&self) -> f64 {
        self.fuel_two_weeks
    }
}
