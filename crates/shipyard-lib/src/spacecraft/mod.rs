//! The spacecraft aggregate.
//!
//! A [`Spacecraft`] owns every installed component and recomputes cost and
//! cargo from scratch on each read. Mutators either apply completely or
//! return an error and leave the ship untouched.

mod validation;

use std::collections::BTreeMap;

use tracing::{debug, warn};

use crate::catalog::{normalize_name as normalize_key, Catalog, DriveCode, HullBand, MiscScaling};
use crate::components::{
    Armor, Component, ComponentKind, Computer, ComputerAddon, Drive, DriveKind, Hardpoint,
    HullConfig, HullOption, MiscItem, Screen, Sensor, Software,
};
use crate::constants::{
    bridge_tonnage, BRIDGE_COST_PER_TON, DEFAULT_HULL_CONFIG, DEFAULT_SENSORS, FUEL_SCOOP_COST,
    JUMP_FUEL_PER_HULL_TON, MAX_TONNAGE, TONS_PER_HARDPOINT, TONS_PER_HIT_POINT,
};
use crate::error::{Error, Result};

pub use validation::ValidationIssue;

/// A ship under design, borrowing its lookup tables from a [`Catalog`].
#[derive(Debug, Clone)]
pub struct Spacecraft<'c> {
    catalog: &'c Catalog,
    tonnage: u32,
    hull: Option<HullBand>,
    fuel: u32,
    discount: f64,
    bridge: bool,
    fuel_scoop: bool,
    config: HullConfig,
    options: BTreeMap<String, HullOption>,
    jump_drive: Option<Drive>,
    maneuver_drive: Option<Drive>,
    power_plant: Option<Drive>,
    armor: Vec<Armor>,
    sensors: Sensor,
    hardpoints: Vec<Hardpoint>,
    next_hardpoint_id: u32,
    screens: BTreeMap<String, Screen>,
    computer: Option<Computer>,
    software: BTreeMap<String, Software>,
    misc: BTreeMap<String, MiscItem>,
}

impl<'c> Spacecraft<'c> {
    /// A bare hull of `tonnage` tons (capped at 2000) with standard
    /// configuration and sensors.
    pub fn new(catalog: &'c Catalog, tonnage: u32) -> Result<Self> {
        let tonnage = tonnage.min(MAX_TONNAGE);
        let ship = Self {
            catalog,
            tonnage,
            hull: catalog.hull_band(tonnage).cloned(),
            fuel: 0,
            discount: 1.0,
            bridge: false,
            fuel_scoop: false,
            config: HullConfig::new(catalog, DEFAULT_HULL_CONFIG)?,
            options: BTreeMap::new(),
            jump_drive: None,
            maneuver_drive: None,
            power_plant: None,
            armor: Vec::new(),
            sensors: Sensor::new(catalog, DEFAULT_SENSORS)?,
            hardpoints: Vec::new(),
            next_hardpoint_id: 1,
            screens: BTreeMap::new(),
            computer: None,
            software: BTreeMap::new(),
            misc: BTreeMap::new(),
        };
        debug!(tonnage, hull = ?ship.hull_designation(), "created spacecraft");
        Ok(ship)
    }

    pub fn catalog(&self) -> &'c Catalog {
        self.catalog
    }

    fn reject<T>(&self, err: Error) -> Result<T> {
        warn!(tonnage = self.tonnage, error = %err, "rejected ship change");
        Err(err)
    }

    // ---- hull -------------------------------------------------------------

    pub fn tonnage(&self) -> u32 {
        self.tonnage
    }

    /// Change hull size, keeping each drive that still fits.
    ///
    /// Drives that no longer fit are swapped for the smallest drive of the
    /// same kind that does, or removed when none fits.
    pub fn set_tonnage(&mut self, tonnage: u32) {
        let tonnage = tonnage.min(MAX_TONNAGE);
        self.tonnage = tonnage;
        self.hull = self.catalog.hull_band(tonnage).cloned();

        let catalog = self.catalog;
        let lowest = catalog.lowest_drive(tonnage);
        for kind in DriveKind::ALL {
            let slot = self.drive_slot(kind);
            let Some(drive) = slot.as_ref() else {
                continue;
            };
            if catalog.performance().is_compatible(drive.code(), tonnage) {
                continue;
            }
            let previous = drive.code();
            *slot = lowest.and_then(|code| Drive::from_code(catalog, kind, code).ok());
            match slot.as_ref() {
                Some(replacement) => debug!(
                    %kind,
                    from = %previous,
                    to = %replacement.code(),
                    tonnage,
                    "swapped drive to fit new tonnage"
                ),
                None => warn!(
                    %kind,
                    code = %previous,
                    tonnage,
                    "removed drive that no longer fits"
                ),
            }
        }
        debug!(tonnage, hull = ?self.hull_designation(), "set tonnage");
    }

    pub fn hull(&self) -> Option<&HullBand> {
        self.hull.as_ref()
    }

    pub fn hull_designation(&self) -> Option<&str> {
        self.hull.as_ref().map(|band| band.designation.as_str())
    }

    /// Base hull cost before the configuration multiplier.
    pub fn hull_cost(&self) -> f64 {
        self.hull.as_ref().map_or(0.0, |band| band.cost)
    }

    pub fn hull_hp(&self) -> u32 {
        self.tonnage / TONS_PER_HIT_POINT
    }

    pub fn structure_hp(&self) -> u32 {
        self.tonnage / TONS_PER_HIT_POINT
    }

    pub fn fuel(&self) -> u32 {
        self.fuel
    }

    pub fn set_fuel(&mut self, tons: u32) {
        self.fuel = tons;
        debug!(fuel = tons, "set fuel tankage");
    }

    /// Price multiplier applied to the whole ship.
    pub fn discount(&self) -> f64 {
        self.discount
    }

    /// Apply a percentage discount (0 to 100).
    pub fn set_discount(&mut self, percent: u32) -> Result<()> {
        if percent > 100 {
            return self.reject(Error::InvalidDiscount { percent });
        }
        self.discount = 1.0 - f64::from(percent) / 100.0;
        debug!(percent, "set discount");
        Ok(())
    }

    /// Discount as a whole percentage.
    pub fn discount_percent(&self) -> u32 {
        ((1.0 - self.discount) * 100.0).round() as u32
    }

    pub fn bridge(&self) -> bool {
        self.bridge
    }

    /// Flip the bridge and return whether one is now fitted.
    pub fn toggle_bridge(&mut self) -> bool {
        self.bridge = !self.bridge;
        debug!(bridge = self.bridge, "toggled bridge");
        self.bridge
    }

    pub fn bridge_tonnage(&self) -> f64 {
        if self.bridge {
            bridge_tonnage(self.tonnage)
        } else {
            0.0
        }
    }

    pub fn hull_config(&self) -> &HullConfig {
        &self.config
    }

    /// Change hull shape.
    ///
    /// The bought scoop is kept across shapes; it only counts on shapes
    /// that mount scoops and lack built-in ones.
    pub fn set_hull_config(&mut self, config: HullConfig) {
        debug!(
            config = config.name(),
            scoop_bought = self.fuel_scoop,
            "set hull configuration"
        );
        self.config = config;
    }

    /// Whether the hull has fuel scoops, built in or bought.
    pub fn fuel_scoop(&self) -> bool {
        self.config.builtin_fuel_scoops() || self.fuel_scoop_charged()
    }

    /// Whether a scoop was bought, independent of the current shape.
    pub fn fuel_scoop_bought(&self) -> bool {
        self.fuel_scoop
    }

    /// Whether the bought scoop is charged on the current shape.
    pub fn fuel_scoop_charged(&self) -> bool {
        self.fuel_scoop && self.config.allows_fuel_scoops() && !self.config.builtin_fuel_scoops()
    }

    /// Flip the bought scoop and return whether the hull now has scoops.
    ///
    /// Hulls with built-in scoops always keep them.
    pub fn toggle_fuel_scoop(&mut self) -> Result<bool> {
        if !self.config.allows_fuel_scoops() {
            return self.reject(Error::FuelScoopUnavailable {
                config: self.config.name().to_string(),
            });
        }
        if !self.config.builtin_fuel_scoops() {
            self.fuel_scoop = !self.fuel_scoop;
        }
        debug!(fuel_scoop = self.fuel_scoop(), "toggled fuel scoop");
        Ok(self.fuel_scoop())
    }

    pub fn hull_options(&self) -> impl Iterator<Item = &HullOption> {
        self.options.values()
    }

    pub fn add_hull_option(&mut self, option: HullOption) -> Result<()> {
        let key = normalize_key(option.name());
        if self.options.contains_key(&key) {
            return self.reject(Error::AlreadyInstalled {
                kind: ComponentKind::HullOption,
                name: option.name().to_string(),
            });
        }
        debug!(option = option.name(), "added hull option");
        self.options.insert(key, option);
        Ok(())
    }

    pub fn remove_hull_option(&mut self, name: &str) -> Result<HullOption> {
        match self.options.remove(&normalize_key(name)) {
            Some(option) => {
                debug!(option = option.name(), "removed hull option");
                Ok(option)
            }
            None => self.reject(Error::NotInstalled {
                kind: ComponentKind::HullOption,
                name: name.to_string(),
            }),
        }
    }

    /// Add the option if absent, remove it if present. Returns whether it is now fitted.
    pub fn toggle_hull_option(&mut self, option: HullOption) -> bool {
        let key = normalize_key(option.name());
        if self.options.remove(&key).is_some() {
            debug!(option = option.name(), "removed hull option");
            false
        } else {
            debug!(option = option.name(), "added hull option");
            self.options.insert(key, option);
            true
        }
    }

    // ---- drives -----------------------------------------------------------

    fn drive_slot(&mut self, kind: DriveKind) -> &mut Option<Drive> {
        match kind {
            DriveKind::Jump => &mut self.jump_drive,
            DriveKind::Maneuver => &mut self.maneuver_drive,
            DriveKind::PowerPlant => &mut self.power_plant,
        }
    }

    pub fn drive(&self, kind: DriveKind) -> Option<&Drive> {
        match kind {
            DriveKind::Jump => self.jump_drive.as_ref(),
            DriveKind::Maneuver => self.maneuver_drive.as_ref(),
            DriveKind::PowerPlant => self.power_plant.as_ref(),
        }
    }

    pub fn jump_drive(&self) -> Option<&Drive> {
        self.jump_drive.as_ref()
    }

    pub fn maneuver_drive(&self) -> Option<&Drive> {
        self.maneuver_drive.as_ref()
    }

    pub fn power_plant(&self) -> Option<&Drive> {
        self.power_plant.as_ref()
    }

    /// Install a drive, replacing any drive of the same kind.
    pub fn add_drive(&mut self, drive: Drive) -> Result<()> {
        let kind = drive.kind();
        if self.tonnage == 0 {
            return self.reject(Error::TonnageNotSet {
                kind: kind.component_kind(),
            });
        }
        if !self
            .catalog
            .performance()
            .is_compatible(drive.code(), self.tonnage)
        {
            return self.reject(Error::IncompatibleDrive {
                kind: kind.component_kind(),
                code: drive.code().letter(),
                tonnage: self.tonnage,
            });
        }
        debug!(%kind, code = %drive.code(), "installed drive");
        *self.drive_slot(kind) = Some(drive);
        Ok(())
    }

    pub fn add_jump_drive(&mut self, drive: Drive) -> Result<()> {
        self.add_drive_as(DriveKind::Jump, drive)
    }

    pub fn add_maneuver_drive(&mut self, drive: Drive) -> Result<()> {
        self.add_drive_as(DriveKind::Maneuver, drive)
    }

    pub fn add_power_plant(&mut self, drive: Drive) -> Result<()> {
        self.add_drive_as(DriveKind::PowerPlant, drive)
    }

    /// Install a drive of the same size as `drive` in the `kind` slot.
    fn add_drive_as(&mut self, kind: DriveKind, drive: Drive) -> Result<()> {
        if drive.kind() == kind {
            self.add_drive(drive)
        } else {
            self.add_drive(Drive::from_code(self.catalog, kind, drive.code())?)
        }
    }

    pub fn remove_drive(&mut self, kind: DriveKind) -> Result<Drive> {
        match self.drive_slot(kind).take() {
            Some(drive) => {
                debug!(%kind, code = %drive.code(), "removed drive");
                Ok(drive)
            }
            None => self.reject(Error::NotInstalled {
                kind: kind.component_kind(),
                name: kind.to_string(),
            }),
        }
    }

    /// Performance of drive `code` on this hull, if it fits.
    pub fn performance(&self, code: DriveCode) -> Option<u8> {
        self.catalog.performance().rating(code, self.tonnage)
    }

    fn drive_rating(&self, kind: DriveKind) -> u8 {
        self.drive(kind)
            .and_then(|drive| self.performance(drive.code()))
            .unwrap_or(0)
    }

    /// Jump number of the installed jump drive, or 0.
    pub fn jump(&self) -> u8 {
        self.drive_rating(DriveKind::Jump)
    }

    /// Thrust of the installed maneuver drive, or 0.
    pub fn thrust(&self) -> u8 {
        self.drive_rating(DriveKind::Maneuver)
    }

    /// Smallest drive code that fits this hull.
    pub fn lowest_drive(&self) -> Option<DriveCode> {
        self.catalog.lowest_drive(self.tonnage)
    }

    pub fn fuel_per_jump(&self) -> f64 {
        f64::from(self.tonnage) * JUMP_FUEL_PER_HULL_TON * f64::from(self.jump())
    }

    pub fn fuel_two_weeks(&self) -> f64 {
        self.power_plant.as_ref().map_or(0.0, Drive::fuel_two_weeks)
    }

    // ---- armor ------------------------------------------------------------

    pub fn armor(&self) -> &[Armor] {
        &self.armor
    }

    pub fn add_armor(&mut self, armor: Armor) -> Result<()> {
        if self.tonnage == 0 {
            return self.reject(Error::TonnageNotSet {
                kind: ComponentKind::Armor,
            });
        }
        debug!(armor = armor.name(), "added armor");
        self.armor.push(armor);
        Ok(())
    }

    /// Remove one layer of the named armor.
    pub fn remove_armor(&mut self, name: &str) -> Result<Armor> {
        match self
            .armor
            .iter()
            .position(|armor| armor.name().eq_ignore_ascii_case(name.trim()))
        {
            Some(index) => {
                let armor = self.armor.remove(index);
                debug!(armor = armor.name(), "removed armor");
                Ok(armor)
            }
            None => self.reject(Error::NotInstalled {
                kind: ComponentKind::Armor,
                name: name.to_string(),
            }),
        }
    }

    pub fn armor_total(&self) -> u32 {
        self.armor.iter().map(Armor::protection).sum()
    }

    // ---- sensors and screens ----------------------------------------------

    pub fn sensors(&self) -> &Sensor {
        &self.sensors
    }

    /// Replace the sensor suite, returning the previous one.
    pub fn set_sensors(&mut self, sensors: Sensor) -> Sensor {
        debug!(sensors = sensors.name(), "set sensors");
        std::mem::replace(&mut self.sensors, sensors)
    }

    pub fn screens(&self) -> impl Iterator<Item = &Screen> {
        self.screens.values()
    }

    pub fn add_screen(&mut self, screen: Screen) -> Result<()> {
        let key = normalize_key(screen.name());
        if self.screens.contains_key(&key) {
            return self.reject(Error::AlreadyInstalled {
                kind: ComponentKind::Screen,
                name: screen.name().to_string(),
            });
        }
        debug!(screen = screen.name(), "added screen");
        self.screens.insert(key, screen);
        Ok(())
    }

    pub fn remove_screen(&mut self, name: &str) -> Result<Screen> {
        match self.screens.remove(&normalize_key(name)) {
            Some(screen) => {
                debug!(screen = screen.name(), "removed screen");
                Ok(screen)
            }
            None => self.reject(Error::NotInstalled {
                kind: ComponentKind::Screen,
                name: name.to_string(),
            }),
        }
    }

    /// Add the screen if absent, remove it if present. Returns whether it is now fitted.
    pub fn toggle_screen(&mut self, screen: Screen) -> bool {
        let key = normalize_key(screen.name());
        if self.screens.remove(&key).is_some() {
            debug!(screen = screen.name(), "removed screen");
            false
        } else {
            debug!(screen = screen.name(), "added screen");
            self.screens.insert(key, screen);
            true
        }
    }

    // ---- computer and software ----------------------------------------------

    pub fn computer(&self) -> Option<&Computer> {
        self.computer.as_ref()
    }

    /// Sum of installed software ratings as seen by `computer`.
    fn rating_required(&self, computer: Option<&Computer>, skip: Option<&str>) -> u32 {
        let spec = computer.is_some_and(|c| c.has_addon(ComputerAddon::JumpControlSpec));
        self.software
            .iter()
            .filter(|(key, _)| skip != Some(key.as_str()))
            .map(|(_, software)| software.effective_rating(spec))
            .sum()
    }

    /// Replace or remove the computer, returning the previous one.
    ///
    /// Rejected when the new computer cannot hold the installed software.
    pub fn set_computer(&mut self, computer: Option<Computer>) -> Result<Option<Computer>> {
        let required = self.rating_required(computer.as_ref(), None);
        match &computer {
            None if !self.software.is_empty() => {
                return self.reject(Error::RatingExceeded {
                    required,
                    available: 0,
                });
            }
            Some(c) if required > c.rating() => {
                return self.reject(Error::RatingExceeded {
                    required,
                    available: c.rating(),
                });
            }
            _ => {}
        }
        debug!(model = ?computer.as_ref().map(Computer::model), "set computer");
        Ok(std::mem::replace(&mut self.computer, computer))
    }

    /// Flip a computer addon and return whether it is now fitted.
    pub fn toggle_computer_addon(&mut self, addon: ComputerAddon) -> Result<bool> {
        let Some(current) = self.computer.as_ref() else {
            return self.reject(Error::NoComputer);
        };
        let mut updated = current.clone();
        let fitted = updated.toggle_addon(addon);
        let required = self.rating_required(Some(&updated), None);
        if required > updated.rating() {
            return self.reject(Error::RatingExceeded {
                required,
                available: updated.rating(),
            });
        }
        debug!(%addon, fitted, "toggled computer addon");
        self.computer = Some(updated);
        Ok(fitted)
    }

    pub fn software(&self) -> impl Iterator<Item = &Software> {
        self.software.values()
    }

    /// Install a package, replacing any installed level of the same package.
    pub fn install_software(&mut self, software: Software) -> Result<()> {
        let Some(computer) = self.computer.as_ref() else {
            return self.reject(Error::NoComputer);
        };
        let key = normalize_key(software.name());
        let spec = computer.has_addon(ComputerAddon::JumpControlSpec);
        let required =
            self.rating_required(Some(computer), Some(&key)) + software.effective_rating(spec);
        let available = computer.rating();
        if required > available {
            return self.reject(Error::RatingExceeded {
                required,
                available,
            });
        }
        debug!(
            software = software.name(),
            level = software.level(),
            "installed software"
        );
        self.software.insert(key, software);
        Ok(())
    }

    pub fn remove_software(&mut self, name: &str) -> Result<Software> {
        match self.software.remove(&normalize_key(name)) {
            Some(software) => {
                debug!(software = software.name(), "removed software");
                Ok(software)
            }
            None => self.reject(Error::NotInstalled {
                kind: ComponentKind::Software,
                name: name.to_string(),
            }),
        }
    }

    /// Rating consumed by installed software.
    pub fn rating_used(&self) -> u32 {
        self.rating_required(self.computer.as_ref(), None)
    }

    /// Unused computer rating, or 0 without a computer.
    pub fn rating_remaining(&self) -> u32 {
        self.computer
            .as_ref()
            .map_or(0, |c| c.rating().saturating_sub(self.rating_used()))
    }

    // ---- misc -------------------------------------------------------------

    pub fn misc(&self) -> impl Iterator<Item = &MiscItem> {
        self.misc.values()
    }

    pub fn misc_item(&self, name: &str) -> Option<&MiscItem> {
        self.misc.get(&normalize_key(name))
    }

    pub fn staterooms(&self) -> u32 {
        self.misc
            .values()
            .find(|item| item.is_stateroom())
            .map_or(0, MiscItem::count)
    }

    fn has_per_stateroom_items(&self) -> bool {
        self.misc
            .values()
            .any(|item| item.scaling() == MiscScaling::PerStateroom)
    }

    /// Set the count of a misc item; a count of zero removes it.
    pub fn set_misc(&mut self, item: MiscItem) -> Result<()> {
        if item.count() == 0 {
            if self.misc_item(item.name()).is_some() {
                self.remove_misc(item.name())?;
            }
            return Ok(());
        }
        if item.scaling() == MiscScaling::PerStateroom && self.staterooms() == 0 {
            return self.reject(Error::NoStaterooms);
        }
        debug!(item = item.name(), count = item.count(), "set misc item");
        self.misc.insert(normalize_key(item.name()), item);
        Ok(())
    }

    pub fn remove_misc(&mut self, name: &str) -> Result<MiscItem> {
        let key = normalize_key(name);
        let Some(item) = self.misc.get(&key) else {
            return self.reject(Error::NotInstalled {
                kind: ComponentKind::Misc,
                name: name.to_string(),
            });
        };
        if item.is_stateroom() && self.has_per_stateroom_items() {
            return self.reject(Error::StateroomsInUse);
        }
        match self.misc.remove(&key) {
            Some(item) => {
                debug!(item = item.name(), "removed misc item");
                Ok(item)
            }
            None => self.reject(Error::NotInstalled {
                kind: ComponentKind::Misc,
                name: name.to_string(),
            }),
        }
    }

    // ---- hardpoints -------------------------------------------------------

    pub fn hardpoints(&self) -> &[Hardpoint] {
        &self.hardpoints
    }

    pub fn hardpoint(&self, id: u32) -> Option<&Hardpoint> {
        self.hardpoints.iter().find(|hp| hp.id() == id)
    }

    pub fn hardpoint_mut(&mut self, id: u32) -> Result<&mut Hardpoint> {
        match self.hardpoints.iter().position(|hp| hp.id() == id) {
            Some(index) => Ok(&mut self.hardpoints[index]),
            None => self.reject(Error::HardpointNotFound { id }),
        }
    }

    /// Add an empty hardpoint and return its id.
    pub fn add_hardpoint(&mut self) -> Result<u32> {
        let id = self.next_hardpoint_id;
        let Some(next) = id.checked_add(1) else {
            return self.reject(Error::HardpointIdsExhausted);
        };
        self.next_hardpoint_id = next;
        self.hardpoints.push(Hardpoint::new(self.catalog, id));
        debug!(id, "added hardpoint");
        Ok(id)
    }

    /// Attach a prepared hardpoint, keeping its id.
    pub fn insert_hardpoint(&mut self, hardpoint: Hardpoint) -> Result<u32> {
        let id = hardpoint.id();
        if self.hardpoint(id).is_some() {
            return self.reject(Error::AlreadyInstalled {
                kind: ComponentKind::Hardpoint,
                name: id.to_string(),
            });
        }
        self.next_hardpoint_id = self.next_hardpoint_id.max(id.saturating_add(1));
        self.hardpoints.push(hardpoint);
        debug!(id, "inserted hardpoint");
        Ok(id)
    }

    pub fn remove_hardpoint(&mut self, id: u32) -> Result<Hardpoint> {
        match self.hardpoints.iter().position(|hp| hp.id() == id) {
            Some(index) => {
                debug!(id, "removed hardpoint");
                Ok(self.hardpoints.remove(index))
            }
            None => self.reject(Error::HardpointNotFound { id }),
        }
    }

    /// Hardpoints the hull provides.
    pub fn hardpoints_total(&self) -> u32 {
        self.tonnage / TONS_PER_HARDPOINT
    }

    /// Hardpoint slots taken by installed hardpoints.
    pub fn hardpoint_slots_used(&self) -> u32 {
        self.hardpoints.iter().map(Hardpoint::slots).sum()
    }

    // ---- generic install ----------------------------------------------------

    /// Install any component through its kind-specific mutator.
    pub fn install(&mut self, component: Component) -> Result<()> {
        match component {
            Component::Drive(drive) => self.add_drive(drive),
            Component::Armor(armor) => self.add_armor(armor),
            Component::HullConfig(config) => {
                self.set_hull_config(config);
                Ok(())
            }
            Component::HullOption(option) => self.add_hull_option(option),
            Component::Sensor(sensors) => {
                self.set_sensors(sensors);
                Ok(())
            }
            Component::Screen(screen) => self.add_screen(screen),
            Component::Computer(computer) => self.set_computer(Some(computer)).map(|_| ()),
            Component::Software(software) => self.install_software(software),
            Component::Misc(item) => self.set_misc(item),
            Component::Hardpoint(hardpoint) => self.insert_hardpoint(hardpoint).map(|_| ()),
        }
    }

    /// Remove a component by kind and name.
    ///
    /// Hull configuration and sensors revert to the standard fit. Drives are
    /// removed by kind alone; hardpoints are named by id.
    pub fn uninstall(&mut self, kind: ComponentKind, name: &str) -> Result<Component> {
        match kind {
            ComponentKind::JumpDrive => self.remove_drive(DriveKind::Jump).map(Component::from),
            ComponentKind::ManeuverDrive => {
                self.remove_drive(DriveKind::Maneuver).map(Component::from)
            }
            ComponentKind::PowerPlant => {
                self.remove_drive(DriveKind::PowerPlant).map(Component::from)
            }
            ComponentKind::Armor => self.remove_armor(name).map(Component::from),
            ComponentKind::HullConfig => {
                let standard = HullConfig::new(self.catalog, DEFAULT_HULL_CONFIG)?;
                let previous = self.config.clone();
                self.set_hull_config(standard);
                Ok(previous.into())
            }
            ComponentKind::HullOption => self.remove_hull_option(name).map(Component::from),
            ComponentKind::Sensor => {
                let standard = Sensor::new(self.catalog, DEFAULT_SENSORS)?;
                Ok(self.set_sensors(standard).into())
            }
            ComponentKind::Screen => self.remove_screen(name).map(Component::from),
            ComponentKind::Computer => match self.set_computer(None)? {
                Some(computer) => Ok(computer.into()),
                None => self.reject(Error::NotInstalled {
                    kind,
                    name: name.to_string(),
                }),
            },
            ComponentKind::Software => self.remove_software(name).map(Component::from),
            ComponentKind::Misc => self.remove_misc(name).map(Component::from),
            ComponentKind::Hardpoint => match name.trim().parse::<u32>() {
                Ok(id) => self.remove_hardpoint(id).map(Component::from),
                Err(_) => self.reject(Error::NotInstalled {
                    kind,
                    name: name.to_string(),
                }),
            },
            ComponentKind::Turret
            | ComponentKind::Weapon
            | ComponentKind::BayWeapon
            | ComponentKind::Missile => self.reject(Error::NotInstalled {
                kind,
                name: name.to_string(),
            }),
        }
    }

    // ---- totals -------------------------------------------------------------

    fn drives(&self) -> impl Iterator<Item = &Drive> {
        [&self.jump_drive, &self.maneuver_drive, &self.power_plant]
            .into_iter()
            .flatten()
    }

    /// Total price in MCr after discount.
    pub fn cost_total(&self) -> f64 {
        let tonnage = self.tonnage;
        let hull_cost = self.hull_cost();
        let staterooms = self.staterooms();

        let mut cost = hull_cost * self.config.mod_hull_cost();
        if self.bridge {
            cost += f64::from(tonnage) * BRIDGE_COST_PER_TON;
        }
        cost += self
            .options
            .values()
            .map(|option| option.cost(tonnage))
            .sum::<f64>();
        if self.fuel_scoop_charged() {
            cost += FUEL_SCOOP_COST;
        }
        cost += self.drives().map(Drive::cost).sum::<f64>();
        cost += self
            .armor
            .iter()
            .map(|armor| armor.cost(hull_cost))
            .sum::<f64>();
        cost += self.sensors.cost();
        cost += self.hardpoints.iter().map(Hardpoint::cost).sum::<f64>();
        cost += self.screens.values().map(Screen::cost).sum::<f64>();
        cost += self.computer.as_ref().map_or(0.0, Computer::cost);
        cost += self.software.values().map(Software::cost).sum::<f64>();
        cost += self
            .misc
            .values()
            .map(|item| item.cost(tonnage, staterooms))
            .sum::<f64>();

        cost * self.discount
    }

    /// Tons left for cargo. Negative when the design is overfull.
    pub fn cargo_remaining(&self) -> f64 {
        let tonnage = self.tonnage;
        let staterooms = self.staterooms();

        let mut cargo = f64::from(tonnage) - self.bridge_tonnage() - f64::from(self.fuel);
        cargo -= self.drives().map(Drive::tonnage).sum::<f64>();
        cargo -= self
            .armor
            .iter()
            .map(|armor| armor.tonnage(tonnage))
            .sum::<f64>();
        cargo -= self.sensors.tonnage();
        cargo -= self.hardpoints.iter().map(Hardpoint::tonnage).sum::<f64>();
        cargo -= self.screens.values().map(Screen::tonnage).sum::<f64>();
        cargo -= self
            .misc
            .values()
            .map(|item| item.tonnage(tonnage, staterooms))
            .sum::<f64>();
        cargo
    }
}
