//! Read-only lookup tables.
//!
//! A [`Catalog`] bundles every table a ship design needs: hull bands, drives
//! and their performance, armor, hull configurations and options, sensors,
//! screens, computers, software, misc items, and the turret tables. The
//! built-in tables are embedded at compile time; [`Catalog::from_dir`] loads
//! replacement files with the same names from disk.

mod drives;
mod performance;
mod specs;
mod table;

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::components::ComponentKind;
use crate::error::{Error, Result};

pub use drives::{DriveCode, DriveSpec, DriveStats, DriveTable};
pub use performance::PerformanceTable;
pub use specs::{
    ArmorSpec, ComputerSpec, ConfigSpec, FixedMountSpec, HullBand, MiscCategory, MiscScaling,
    MiscSpec, MountAddonSpecs, OptionSpec, PopUpSpec, SandcasterSpec, ScreenSpec, SensorSpec,
    SoftwareLevel, SoftwareSpec, TurretModelSpec, WeaponSpec,
};
pub use table::{Entry, Table};
pub(crate) use table::normalize_name;

use drives::DRIVES_TABLE;
use performance::PERFORMANCE_TABLE;
use specs::{ensure_non_negative, TurretFile};

const HULL_TABLE: &str = "hull_data.json";
const ARMOR_TABLE: &str = "hull_armor.json";
const CONFIG_TABLE: &str = "hull_config.json";
const OPTIONS_TABLE: &str = "hull_options.json";
const SENSORS_TABLE: &str = "hull_sensors.json";
const SCREENS_TABLE: &str = "hull_screens.json";
const COMPUTER_TABLE: &str = "hull_computer.json";
const SOFTWARE_TABLE: &str = "hull_software.json";
const MISC_TABLE: &str = "hull_misc.json";
const TURRETS_TABLE: &str = "hull_turrets.json";

/// Names of every file a catalog directory must contain.
pub const TABLE_FILES: [&str; 12] = [
    HULL_TABLE,
    DRIVES_TABLE,
    PERFORMANCE_TABLE,
    ARMOR_TABLE,
    CONFIG_TABLE,
    OPTIONS_TABLE,
    SENSORS_TABLE,
    SCREENS_TABLE,
    COMPUTER_TABLE,
    SOFTWARE_TABLE,
    MISC_TABLE,
    TURRETS_TABLE,
];

/// Largest gap between a tonnage and the band it falls into.
const MAX_BAND_GAP: u32 = 100;

static BUILTIN: Lazy<Catalog> = Lazy::new(|| {
    Catalog::load_with(|name| Ok(embedded(name).to_string()))
        .expect("embedded lookup tables are valid")
});

fn embedded(name: &str) -> &'static str {
    match name {
        HULL_TABLE => include_str!("../../data/hull_data.json"),
        DRIVES_TABLE => include_str!("../../data/drives.csv"),
        PERFORMANCE_TABLE => include_str!("../../data/hull_performance.json"),
        ARMOR_TABLE => include_str!("../../data/hull_armor.json"),
        CONFIG_TABLE => include_str!("../../data/hull_config.json"),
        OPTIONS_TABLE => include_str!("../../data/hull_options.json"),
        SENSORS_TABLE => include_str!("../../data/hull_sensors.json"),
        SCREENS_TABLE => include_str!("../../data/hull_screens.json"),
        COMPUTER_TABLE => include_str!("../../data/hull_computer.json"),
        SOFTWARE_TABLE => include_str!("../../data/hull_software.json"),
        MISC_TABLE => include_str!("../../data/hull_misc.json"),
        TURRETS_TABLE => include_str!("../../data/hull_turrets.json"),
        _ => "",
    }
}

/// Turret models, weapons, and ammunition prices.
#[derive(Debug, Clone)]
pub struct TurretTables {
    pub models: Table<TurretModelSpec>,
    pub weapons: Table<WeaponSpec>,
    pub bay_weapons: Table<WeaponSpec>,
    pub missiles: Table<f64>,
    pub missiles_per_ton: u32,
    pub addons: MountAddonSpecs,
    pub sandcaster: SandcasterSpec,
}

/// Every lookup table, loaded once and shared read-only.
#[derive(Debug, Clone)]
pub struct Catalog {
    hulls: Vec<HullBand>,
    drives: DriveTable,
    performance: PerformanceTable,
    armor: Table<ArmorSpec>,
    configs: Table<ConfigSpec>,
    options: Table<OptionSpec>,
    sensors: Table<SensorSpec>,
    screens: Table<ScreenSpec>,
    computers: Table<ComputerSpec>,
    software: Table<SoftwareSpec>,
    misc: Table<MiscSpec>,
    turrets: TurretTables,
    source: Option<PathBuf>,
}

impl Catalog {
    /// The catalog compiled into the library.
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    /// Load every table from files in `dir`.
    pub fn from_dir(dir: &Path) -> Result<Self> {
        let mut catalog = Self::load_with(|name| {
            let path = dir.join(name);
            fs::read_to_string(&path).map_err(|source| Error::io(path, source))
        })?;
        catalog.source = Some(dir.to_path_buf());
        debug!(dir = %dir.display(), "loaded catalog from directory");
        Ok(catalog)
    }

    fn load_with(read: impl Fn(&'static str) -> Result<String>) -> Result<Self> {
        let hulls = load_hulls(&read(HULL_TABLE)?)?;
        let drives = DriveTable::from_reader(read(DRIVES_TABLE)?.as_bytes())?;
        let performance = PerformanceTable::from_json(&read(PERFORMANCE_TABLE)?, &drives)?;

        let armor = load_table(ComponentKind::Armor, ARMOR_TABLE, &read, |name, s: &ArmorSpec| {
            ensure_non_negative(
                ARMOR_TABLE,
                name,
                &[
                    (s.hull_amount, "hull_amount"),
                    (s.cost_by_hull_percentage, "cost_by_hull_percentage"),
                ],
            )
        })?;
        let configs = load_table(
            ComponentKind::HullConfig,
            CONFIG_TABLE,
            &read,
            |name, s: &ConfigSpec| {
                ensure_non_negative(CONFIG_TABLE, name, &[(s.mod_hull_cost, "mod_hull_cost")])
            },
        )?;
        let options = load_table(
            ComponentKind::HullOption,
            OPTIONS_TABLE,
            &read,
            |name, s: &OptionSpec| {
                ensure_non_negative(
                    OPTIONS_TABLE,
                    name,
                    &[(s.cost_per_hull_ton, "cost_per_hull_ton")],
                )
            },
        )?;
        let sensors = load_table(
            ComponentKind::Sensor,
            SENSORS_TABLE,
            &read,
            |name, s: &SensorSpec| {
                ensure_non_negative(
                    SENSORS_TABLE,
                    name,
                    &[(s.tonnage, "tonnage"), (s.cost, "cost")],
                )
            },
        )?;
        let screens = load_table(
            ComponentKind::Screen,
            SCREENS_TABLE,
            &read,
            |name, s: &ScreenSpec| {
                ensure_non_negative(
                    SCREENS_TABLE,
                    name,
                    &[(s.tonnage, "tonnage"), (s.cost, "cost")],
                )
            },
        )?;
        let computers = load_table(
            ComponentKind::Computer,
            COMPUTER_TABLE,
            &read,
            |name, s: &ComputerSpec| ensure_non_negative(COMPUTER_TABLE, name, &[(s.cost, "cost")]),
        )?;
        let software = load_table(
            ComponentKind::Software,
            SOFTWARE_TABLE,
            &read,
            |name, s: &SoftwareSpec| {
                if s.levels.is_empty() {
                    return Err(Error::TableValidation {
                        table: SOFTWARE_TABLE,
                        message: format!("'{name}' defines no levels"),
                    });
                }
                s.levels.values().try_for_each(|level| {
                    ensure_non_negative(SOFTWARE_TABLE, name, &[(level.cost, "cost")])
                })
            },
        )?;
        let misc = load_table(ComponentKind::Misc, MISC_TABLE, &read, |name, s: &MiscSpec| {
            ensure_non_negative(
                MISC_TABLE,
                name,
                &[(s.tonnage, "tonnage"), (s.cost, "cost")],
            )
        })?;
        let turrets = load_turrets(&read(TURRETS_TABLE)?)?;

        debug!(
            hulls = hulls.len(),
            drives = drives.len(),
            armor = armor.len(),
            software = software.len(),
            misc = misc.len(),
            "loaded catalog tables"
        );

        Ok(Self {
            hulls,
            drives,
            performance,
            armor,
            configs,
            options,
            sensors,
            screens,
            computers,
            software,
            misc,
            turrets,
            source: None,
        })
    }

    /// Hull band for a tonnage.
    ///
    /// Picks the largest band at or below `tonnage` provided it is less than
    /// 100 tons away. Hulls smaller than the first band use the first band.
    /// Zero tonnage has no band.
    pub fn hull_band(&self, tonnage: u32) -> Option<&HullBand> {
        if tonnage == 0 {
            return None;
        }
        let first = self.hulls.first()?;
        if tonnage < first.tonnage {
            return Some(first);
        }
        self.hulls
            .iter()
            .rev()
            .find(|band| band.tonnage <= tonnage)
            .filter(|band| tonnage - band.tonnage < MAX_BAND_GAP)
    }

    pub fn hull_bands(&self) -> &[HullBand] {
        &self.hulls
    }

    pub fn drives(&self) -> &DriveTable {
        &self.drives
    }

    pub fn drive(&self, code: DriveCode) -> Result<&DriveSpec> {
        self.drives.get(code).ok_or_else(|| Error::InvalidDriveCode {
            code: code.to_string(),
        })
    }

    pub fn performance(&self) -> &PerformanceTable {
        &self.performance
    }

    /// First drive code compatible with `tonnage`.
    pub fn lowest_drive(&self, tonnage: u32) -> Option<DriveCode> {
        self.drives
            .codes()
            .find(|&code| self.performance.is_compatible(code, tonnage))
    }

    pub fn armor(&self) -> &Table<ArmorSpec> {
        &self.armor
    }

    pub fn hull_configs(&self) -> &Table<ConfigSpec> {
        &self.configs
    }

    pub fn hull_options(&self) -> &Table<OptionSpec> {
        &self.options
    }

    pub fn sensors(&self) -> &Table<SensorSpec> {
        &self.sensors
    }

    pub fn screens(&self) -> &Table<ScreenSpec> {
        &self.screens
    }

    pub fn computers(&self) -> &Table<ComputerSpec> {
        &self.computers
    }

    pub fn software(&self) -> &Table<SoftwareSpec> {
        &self.software
    }

    pub fn misc(&self) -> &Table<MiscSpec> {
        &self.misc
    }

    pub fn turrets(&self) -> &TurretTables {
        &self.turrets
    }

    /// Directory the catalog was loaded from, if not built-in.
    pub fn source_path(&self) -> Option<&Path> {
        self.source.as_deref()
    }
}

fn parse_json<T: DeserializeOwned>(table: &'static str, text: &str) -> Result<T> {
    serde_json::from_str(text).map_err(|e| Error::TableValidation {
        table,
        message: e.to_string(),
    })
}

fn load_table<T: DeserializeOwned>(
    kind: ComponentKind,
    table: &'static str,
    read: &impl Fn(&'static str) -> Result<String>,
    check: impl Fn(&str, &T) -> Result<()>,
) -> Result<Table<T>> {
    let rows: BTreeMap<String, T> = parse_json(table, &read(table)?)?;
    for (name, spec) in &rows {
        check(name, spec)?;
    }
    Table::from_rows(kind, table, rows)
}

fn load_hulls(text: &str) -> Result<Vec<HullBand>> {
    let rows: BTreeMap<String, HullBand> = parse_json(HULL_TABLE, text)?;
    let mut hulls: Vec<HullBand> = rows
        .into_iter()
        .map(|(designation, band)| HullBand {
            designation,
            ..band
        })
        .collect();
    hulls.sort_by_key(|band| band.tonnage);

    if hulls.is_empty() {
        return Err(Error::TableValidation {
            table: HULL_TABLE,
            message: "no hull bands defined".to_string(),
        });
    }
    if hulls.windows(2).any(|w| w[0].tonnage == w[1].tonnage) {
        return Err(Error::TableValidation {
            table: HULL_TABLE,
            message: "hull band tonnages must be unique".to_string(),
        });
    }
    for band in &hulls {
        ensure_non_negative(HULL_TABLE, &band.designation, &[(band.cost, "cost")])?;
    }
    Ok(hulls)
}

fn load_turrets(text: &str) -> Result<TurretTables> {
    let file: TurretFile = parse_json(TURRETS_TABLE, text)?;
    for (name, model) in &file.models {
        if model.num_weapons == 0 {
            return Err(Error::TableValidation {
                table: TURRETS_TABLE,
                message: format!("'{name}' must hold at least one weapon"),
            });
        }
        ensure_non_negative(
            TURRETS_TABLE,
            name,
            &[(model.tonnage, "tonnage"), (model.cost, "cost")],
        )?;
    }
    if !file.models.values().any(|model| model.bay) && !file.bayweapons.is_empty() {
        return Err(Error::TableValidation {
            table: TURRETS_TABLE,
            message: "bay weapons listed without a bay model".to_string(),
        });
    }

    Ok(TurretTables {
        models: Table::from_rows(ComponentKind::Turret, TURRETS_TABLE, file.models)?,
        weapons: Table::from_rows(ComponentKind::Weapon, TURRETS_TABLE, file.weapons)?,
        bay_weapons: Table::from_rows(ComponentKind::BayWeapon, TURRETS_TABLE, file.bayweapons)?,
        missiles: Table::from_rows(ComponentKind::Missile, TURRETS_TABLE, file.missiles)?,
        missiles_per_ton: file.missiles_per_ton,
        addons: file.addons,
        sandcaster: file.sandcaster,
    })
}
