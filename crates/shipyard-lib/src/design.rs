//! Saved ship designs.
//!
//! A [`ShipDesign`] is the JSON document written to `.srd` files. Loading a
//! design replays the same mutators a user would call, so every rule that
//! applies while editing also applies on load.

use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::catalog::{Catalog, DriveCode, MiscScaling};
use crate::components::{
    Armor, Computer, ComputerAddon, Drive, DriveKind, Hardpoint, HullConfig, HullOption, MiscItem,
    MountAddon, Screen, Sensor, Software, Turret,
};
use crate::error::{Error, Result};
use crate::spacecraft::Spacecraft;

/// Current document version.
pub const FORMAT_VERSION: u32 = 1;

/// File extension for saved designs.
pub const DESIGN_EXTENSION: &str = "srd";

/// How far a stored discount may sit from a whole percentage.
const DISCOUNT_TOLERANCE: f64 = 1e-6;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignStats {
    pub tonnage: u32,
    #[serde(default)]
    pub fuel: u32,
    /// Price multiplier, 1.0 for no discount.
    #[serde(default = "no_discount")]
    pub discount: f64,
    /// Informational; recomputed on load.
    #[serde(default)]
    pub cost: f64,
    /// Informational; recomputed on load.
    #[serde(default)]
    pub cargo: f64,
}

fn no_discount() -> f64 {
    1.0
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesignDrives {
    pub jump: Option<DriveCode>,
    pub maneuver: Option<DriveCode>,
    pub plant: Option<DriveCode>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesignConfig {
    #[serde(default)]
    pub bridge: bool,
    #[serde(default)]
    pub fuel_scoop: bool,
    pub hull_type: String,
    #[serde(default)]
    pub options: Vec<String>,
    #[serde(default)]
    pub screens: Vec<String>,
    pub sensors: String,
    #[serde(default)]
    pub armor: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesignComputer {
    pub model: Option<String>,
    pub jump_control_spec: bool,
    pub hardened_system: bool,
    pub software: Vec<(String, u8)>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesignTurret {
    pub model: String,
    #[serde(default)]
    pub weapons: Vec<Option<String>>,
    #[serde(default)]
    pub missiles: BTreeMap<String, u32>,
    #[serde(default)]
    pub sandcaster_barrels: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesignHardpoint {
    pub id: u32,
    #[serde(default)]
    pub popup: bool,
    #[serde(default)]
    pub fixed: bool,
    #[serde(default)]
    pub turret: Option<DesignTurret>,
}

/// Persisted form of a [`Spacecraft`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShipDesign {
    pub format_version: u32,
    pub stats: DesignStats,
    #[serde(default)]
    pub drives: DesignDrives,
    pub config: DesignConfig,
    #[serde(default)]
    pub computer: DesignComputer,
    #[serde(default)]
    pub misc: Vec<(String, u32)>,
    #[serde(default)]
    pub hardpoints: Vec<DesignHardpoint>,
}

impl ShipDesign {
    /// Snapshot a ship.
    pub fn capture(ship: &Spacecraft<'_>) -> Self {
        let drive_code = |kind| ship.drive(kind).map(Drive::code);

        // Staterooms must be replayed before anything sized per stateroom.
        let mut misc: Vec<&MiscItem> = ship.misc().collect();
        misc.sort_by_key(|item| item.scaling() == MiscScaling::PerStateroom);

        let computer = ship.computer();
        Self {
            format_version: FORMAT_VERSION,
            stats: DesignStats {
                tonnage: ship.tonnage(),
                fuel: ship.fuel(),
                discount: ship.discount(),
                cost: (ship.cost_total() * 1000.0).round() / 1000.0,
                cargo: ship.cargo_remaining(),
            },
            drives: DesignDrives {
                jump: drive_code(DriveKind::Jump),
                maneuver: drive_code(DriveKind::Maneuver),
                plant: drive_code(DriveKind::PowerPlant),
            },
            config: DesignConfig {
                bridge: ship.bridge(),
                fuel_scoop: ship.fuel_scoop_bought(),
                hull_type: ship.hull_config().name().to_string(),
                options: ship
                    .hull_options()
                    .map(|option| option.name().to_string())
                    .collect(),
                screens: ship
                    .screens()
                    .map(|screen| screen.name().to_string())
                    .collect(),
                sensors: ship.sensors().name().to_string(),
                armor: ship
                    .armor()
                    .iter()
                    .map(|armor| armor.name().to_string())
                    .collect(),
            },
            computer: DesignComputer {
                model: computer.map(|c| c.model().to_string()),
                jump_control_spec: computer
                    .is_some_and(|c| c.has_addon(ComputerAddon::JumpControlSpec)),
                hardened_system: computer
                    .is_some_and(|c| c.has_addon(ComputerAddon::HardenedSystem)),
                software: ship
                    .software()
                    .map(|software| (software.name().to_string(), software.level()))
                    .collect(),
            },
            misc: misc
                .into_iter()
                .map(|item| (item.name().to_string(), item.count()))
                .collect(),
            hardpoints: ship.hardpoints().iter().map(capture_hardpoint).collect(),
        }
    }

    /// Rebuild the ship by replaying every recorded change.
    pub fn build<'c>(&self, catalog: &'c Catalog) -> Result<Spacecraft<'c>> {
        if self.format_version > FORMAT_VERSION {
            return Err(Error::DesignFormat {
                message: format!(
                    "format version {} is newer than supported version {FORMAT_VERSION}",
                    self.format_version
                ),
            });
        }
        let discount = self.stats.discount;
        if !(0.0..=1.0).contains(&discount) {
            return Err(Error::DesignFormat {
                message: format!("discount factor {discount} is outside 0..=1"),
            });
        }

        let percent = (1.0 - discount) * 100.0;
        if (percent - percent.round()).abs() > DISCOUNT_TOLERANCE {
            return Err(Error::DesignFormat {
                message: format!("discount factor {discount} is not a whole percentage"),
            });
        }

        let mut ship = Spacecraft::new(catalog, self.stats.tonnage)?;
        ship.set_fuel(self.stats.fuel);
        ship.set_discount(percent.round() as u32)?;

        for (kind, code) in [
            (DriveKind::Jump, self.drives.jump),
            (DriveKind::Maneuver, self.drives.maneuver),
            (DriveKind::PowerPlant, self.drives.plant),
        ] {
            if let Some(code) = code {
                ship.add_drive(Drive::from_code(catalog, kind, code)?)?;
            }
        }

        let config = &self.config;
        if config.bridge {
            ship.toggle_bridge();
        }
        for option in &config.options {
            ship.add_hull_option(HullOption::new(catalog, option)?)?;
        }
        for screen in &config.screens {
            ship.add_screen(Screen::new(catalog, screen)?)?;
        }
        // Scoops are bought on the standard hull, before the recorded shape.
        if config.fuel_scoop {
            ship.toggle_fuel_scoop()?;
        }
        ship.set_hull_config(HullConfig::new(catalog, &config.hull_type)?);
        ship.set_sensors(Sensor::new(catalog, &config.sensors)?);
        for armor in &config.armor {
            ship.add_armor(Armor::new(catalog, armor)?)?;
        }

        if let Some(model) = &self.computer.model {
            let mut computer = Computer::new(catalog, model)?;
            computer.set_addon(ComputerAddon::JumpControlSpec, self.computer.jump_control_spec);
            computer.set_addon(ComputerAddon::HardenedSystem, self.computer.hardened_system);
            ship.set_computer(Some(computer))?;
        }
        for (name, level) in &self.computer.software {
            ship.install_software(Software::new(catalog, name, *level)?)?;
        }

        for (name, count) in &self.misc {
            ship.set_misc(MiscItem::new(catalog, name, *count)?)?;
        }

        for recorded in &self.hardpoints {
            ship.insert_hardpoint(build_hardpoint(catalog, recorded)?)?;
        }

        debug!(
            tonnage = ship.tonnage(),
            cost = ship.cost_total(),
            "rebuilt ship from design"
        );
        Ok(ship)
    }
}

fn capture_hardpoint(hardpoint: &Hardpoint) -> DesignHardpoint {
    DesignHardpoint {
        id: hardpoint.id(),
        popup: hardpoint.has_addon(MountAddon::PopUp),
        fixed: hardpoint.has_addon(MountAddon::Fixed),
        turret: hardpoint.turret().map(|turret| DesignTurret {
            model: turret.model().to_string(),
            weapons: turret
                .weapons()
                .iter()
                .map(|slot| slot.as_ref().map(|weapon| weapon.name().to_string()))
                .collect(),
            missiles: turret
                .missiles()
                .iter()
                .map(|(name, load)| (name.clone(), load.tons))
                .collect(),
            sandcaster_barrels: turret.sandcaster_barrels(),
        }),
    }
}

fn build_hardpoint(catalog: &Catalog, recorded: &DesignHardpoint) -> Result<Hardpoint> {
    let mut hardpoint = Hardpoint::new(catalog, recorded.id);
    if let Some(design) = &recorded.turret {
        let mut turret = Turret::new(catalog, &design.model)?;
        for (slot, weapon) in design.weapons.iter().enumerate() {
            if weapon.is_some() {
                turret.set_weapon(catalog, slot, weapon.as_deref())?;
            }
        }
        for (kind, tons) in &design.missiles {
            turret.set_missiles(catalog, kind, *tons)?;
        }
        turret.set_sandcaster_barrels(design.sandcaster_barrels);
        hardpoint.set_turret(Some(turret));
    }
    hardpoint.set_addon(MountAddon::PopUp, recorded.popup)?;
    hardpoint.set_addon(MountAddon::Fixed, recorded.fixed)?;
    Ok(hardpoint)
}

/// Platform data directory for saved designs.
pub fn default_designs_dir() -> Result<PathBuf> {
    let dirs =
        ProjectDirs::from("com", "imperium", "shipyard").ok_or(Error::ProjectDirsUnavailable)?;
    Ok(dirs.data_dir().join("designs"))
}

/// `<dir>/<name>.srd`
pub fn design_path(dir: &Path, name: &str) -> PathBuf {
    dir.join(name).with_extension(DESIGN_EXTENSION)
}

/// Write a design atomically: a temp file beside `path` is persisted over it.
pub fn save_design(path: &Path, design: &ShipDesign) -> Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent).map_err(|source| Error::io(parent, source))?;

    let json = serde_json::to_string_pretty(design)?;
    let mut tmp = NamedTempFile::new_in(parent).map_err(|source| Error::io(parent, source))?;
    let written = tmp.write_all(json.as_bytes()).and_then(|_| tmp.flush());
    written.map_err(|source| Error::io(tmp.path(), source))?;
    tmp.persist(path).map_err(|err| Error::io(path, err.error))?;

    info!(path = %path.display(), "saved ship design");
    Ok(())
}

pub fn load_design(path: &Path) -> Result<ShipDesign> {
    let text = fs::read_to_string(path).map_err(|source| Error::io(path, source))?;
    let design: ShipDesign = serde_json::from_str(&text)?;
    debug!(path = %path.display(), version = design.format_version, "loaded ship design");
    Ok(design)
}
