use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::error::{Error, Result};

/// Each addon raises the price by this fraction of the base cost.
const ADDON_COST_FRACTION: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComputerAddon {
    /// Dedicated jump control hardware; Jump Control software needs less rating.
    JumpControlSpec,
    /// Shielded against electronic attack.
    HardenedSystem,
}

impl ComputerAddon {
    pub const ALL: [ComputerAddon; 2] =
        [ComputerAddon::JumpControlSpec, ComputerAddon::HardenedSystem];

    pub fn as_str(&self) -> &'static str {
        match self {
            ComputerAddon::JumpControlSpec => "Jump Control Spec",
            ComputerAddon::HardenedSystem => "Hardened System",
        }
    }
}

impl fmt::Display for ComputerAddon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComputerAddon {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        ComputerAddon::ALL
            .into_iter()
            .find(|addon| addon.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| Error::UnknownComponent {
                kind: super::ComponentKind::Computer,
                name: wanted.to_string(),
                suggestions: ComputerAddon::ALL
                    .iter()
                    .map(|addon| addon.as_str().to_string())
                    .collect(),
            })
    }
}

/// Ship's computer: a model with a rating budget and optional addons.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Computer {
    model: String,
    tl: u8,
    rating: u32,
    base_cost: f64,
    jump_control_spec: bool,
    hardened: bool,
}

impl Computer {
    pub fn new(catalog: &Catalog, model: &str) -> Result<Self> {
        let entry = catalog.computers().get(model)?;
        Ok(Self {
            model: entry.name.to_string(),
            tl: entry.spec.tl,
            rating: entry.spec.rating,
            base_cost: entry.spec.cost,
            jump_control_spec: false,
            hardened: false,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn tl(&self) -> u8 {
        self.tl
    }

    pub fn rating(&self) -> u32 {
        self.rating
    }

    pub fn base_cost(&self) -> f64 {
        self.base_cost
    }

    /// Base cost plus half the base cost for each fitted addon.
    pub fn cost(&self) -> f64 {
        let addons = [self.jump_control_spec, self.hardened]
            .into_iter()
            .filter(|&fitted| fitted)
            .count();
        self.base_cost * (1.0 + ADDON_COST_FRACTION * addons as f64)
    }

    pub fn has_addon(&self, addon: ComputerAddon) -> bool {
        match addon {
            ComputerAddon::JumpControlSpec => self.jump_control_spec,
            ComputerAddon::HardenedSystem => self.hardened,
        }
    }

    pub fn set_addon(&mut self, addon: ComputerAddon, fitted: bool) {
        match addon {
            ComputerAddon::JumpControlSpec => self.jump_control_spec = fitted,
            ComputerAddon::HardenedSystem => self.hardened = fitted,
        }
    }

    /// Flip an addon and return whether it is now fitted.
    pub fn toggle_addon(&mut self, addon: ComputerAddon) -> bool {
        let fitted = !self.has_addon(addon);
        self.set_addon(addon, fitted);
        fitted
    }

    pub fn with_addon(mut self, addon: ComputerAddon) -> Self {
        self.set_addon(addon, true);
        self
    }

    pub fn addons(&self) -> Vec<ComputerAddon> {
        ComputerAddon::ALL
            .into_iter()
            .filter(|&addon| self.has_addon(addon))
            .collect()
    }
}
