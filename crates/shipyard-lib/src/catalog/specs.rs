//! Row types for the JSON lookup tables.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// One hull band: designation letter plus base hull cost.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HullBand {
    #[serde(default)]
    pub designation: String,
    pub tonnage: u32,
    pub cost: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArmorSpec {
    pub tl: u8,
    pub protection: u32,
    /// Fraction of hull tonnage consumed by one layer.
    pub hull_amount: f64,
    /// Fraction of base hull cost charged for one layer.
    pub cost_by_hull_percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigSpec {
    pub mod_hull_cost: f64,
    pub builtin_fuel_scoops: bool,
    pub allows_fuel_scoops: bool,
    #[serde(default)]
    pub mod_additional: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionSpec {
    pub tl: u8,
    pub cost_per_hull_ton: f64,
    #[serde(default)]
    pub mod_additional: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorSpec {
    pub tl: u8,
    pub equipment: String,
    pub tonnage: f64,
    pub cost: f64,
    pub sensors_dm: i8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreenSpec {
    pub tl: u8,
    pub tonnage: f64,
    pub cost: f64,
    #[serde(default)]
    pub mod_additional: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComputerSpec {
    pub tl: u8,
    pub rating: u32,
    pub cost: f64,
}

/// A software package and the levels it can be installed at.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoftwareSpec {
    #[serde(default)]
    pub mod_additional: String,
    pub levels: BTreeMap<u8, SoftwareLevel>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SoftwareLevel {
    pub tl: u8,
    pub rating: u32,
    pub cost: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MiscCategory {
    Living,
    Drone,
    Vehicle,
    Other,
}

impl MiscCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            MiscCategory::Living => "living",
            MiscCategory::Drone => "drone",
            MiscCategory::Vehicle => "vehicle",
            MiscCategory::Other => "other",
        }
    }
}

/// How a misc item's tonnage and cost grow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MiscScaling {
    /// Fixed tonnage and cost per unit.
    Flat,
    /// Tonnage is a fraction of hull tonnage; cost is charged per ton.
    HullFraction,
    /// One unit per installed stateroom; the item count is ignored.
    PerStateroom,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MiscSpec {
    pub category: MiscCategory,
    pub tonnage: f64,
    pub cost: f64,
    pub scaling: MiscScaling,
    #[serde(default)]
    pub mod_additional: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TurretModelSpec {
    pub tonnage: f64,
    pub cost: f64,
    pub num_weapons: usize,
    pub hardpoint_slots: u32,
    pub bay: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeaponSpec {
    pub tl: u8,
    pub range: String,
    pub damage: String,
    pub cost: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PopUpSpec {
    pub tonnage: f64,
    pub cost: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FixedMountSpec {
    #[serde(default)]
    pub tonnage: f64,
    pub cost_multiplier: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MountAddonSpecs {
    #[serde(rename = "Pop-up Turret")]
    pub popup: PopUpSpec,
    #[serde(rename = "Fixed Mounting")]
    pub fixed: FixedMountSpec,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SandcasterSpec {
    pub barrel_cost: f64,
    pub barrel_tonnage: f64,
    pub canisters_per_barrel: u32,
}

/// The turret file as it appears on disk.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct TurretFile {
    pub models: BTreeMap<String, TurretModelSpec>,
    pub addons: MountAddonSpecs,
    pub weapons: BTreeMap<String, WeaponSpec>,
    pub missiles: BTreeMap<String, f64>,
    pub missiles_per_ton: u32,
    pub sandcaster: SandcasterSpec,
    pub bayweapons: BTreeMap<String, WeaponSpec>,
}

/// Reject negative or non-finite numbers in a table row.
pub(crate) fn ensure_non_negative(
    table: &'static str,
    name: &str,
    fields: &[(f64, &str)],
) -> Result<()> {
    for (value, field) in fields {
        if !value.is_finite() || *value < 0.0 {
            return Err(Error::TableValidation {
                table,
                message: format!("{field} for '{name}' must be a finite non-negative number"),
            });
        }
    }
    Ok(())
}
