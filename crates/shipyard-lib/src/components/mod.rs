//! Equippable parts, each built from a lookup into its catalog table.

mod armor;
mod computer;
mod drive;
mod hull;
mod misc;
mod screen;
mod sensor;
mod software;
mod turret;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use armor::Armor;
pub use computer::{Computer, ComputerAddon};
pub use drive::{Drive, DriveKind};
pub use hull::{HullConfig, HullOption};
pub use misc::MiscItem;
pub use screen::Screen;
pub use sensor::Sensor;
pub use software::{Software, JUMP_CONTROL};
pub use turret::{Hardpoint, MissileLoad, MountAddon, Turret, Weapon};

/// Kind tag used in errors, logs, and table listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentKind {
    JumpDrive,
    ManeuverDrive,
    PowerPlant,
    Armor,
    HullConfig,
    HullOption,
    Sensor,
    Screen,
    Computer,
    Software,
    Misc,
    Hardpoint,
    Turret,
    Weapon,
    BayWeapon,
    Missile,
}

impl ComponentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentKind::JumpDrive => "jump drive",
            ComponentKind::ManeuverDrive => "maneuver drive",
            ComponentKind::PowerPlant => "power plant",
            ComponentKind::Armor => "armor",
            ComponentKind::HullConfig => "hull configuration",
            ComponentKind::HullOption => "hull option",
            ComponentKind::Sensor => "sensor",
            ComponentKind::Screen => "screen",
            ComponentKind::Computer => "computer",
            ComponentKind::Software => "software",
            ComponentKind::Misc => "misc item",
            ComponentKind::Hardpoint => "hardpoint",
            ComponentKind::Turret => "turret",
            ComponentKind::Weapon => "weapon",
            ComponentKind::BayWeapon => "bay weapon",
            ComponentKind::Missile => "missile",
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Any part that can be installed on a spacecraft.
#[derive(Debug, Clone, PartialEq)]
pub enum Component {
    Drive(Drive),
    Armor(Armor),
    HullConfig(HullConfig),
    HullOption(HullOption),
    Sensor(Sensor),
    Screen(Screen),
    Computer(Computer),
    Software(Software),
    Misc(MiscItem),
    Hardpoint(Hardpoint),
}

impl Component {
    pub fn kind(&self) -> ComponentKind {
        match self {
            Component::Drive(drive) => drive.kind().component_kind(),
            Component::Armor(_) => ComponentKind::Armor,
            Component::HullConfig(_) => ComponentKind::HullConfig,
            Component::HullOption(_) => ComponentKind::HullOption,
            Component::Sensor(_) => ComponentKind::Sensor,
            Component::Screen(_) => ComponentKind::Screen,
            Component::Computer(_) => ComponentKind::Computer,
            Component::Software(_) => ComponentKind::Software,
            Component::Misc(_) => ComponentKind::Misc,
            Component::Hardpoint(_) => ComponentKind::Hardpoint,
        }
    }

    /// Key used to remove the component again.
    pub fn name(&self) -> String {
        match self {
            Component::Drive(drive) => drive.code().to_string(),
            Component::Armor(armor) => armor.name().to_string(),
            Component::HullConfig(config) => config.name().to_string(),
            Component::HullOption(option) => option.name().to_string(),
            Component::Sensor(sensor) => sensor.name().to_string(),
            Component::Screen(screen) => screen.name().to_string(),
            Component::Computer(computer) => computer.model().to_string(),
            Component::Software(software) => software.name().to_string(),
            Component::Misc(item) => item.name().to_string(),
            Component::Hardpoint(hardpoint) => hardpoint.id().to_string(),
        }
    }
}

macro_rules! impl_from_component {
    ($($variant:ident($ty:ty)),* $(,)?) => {
        $(
            impl From<$ty> for Component {
                fn from(value: $ty) -> Self {
                    Component::$variant(value)
                }
            }
        )*
    };
}

impl_from_component!(
    Drive(Drive),
    Armor(Armor),
    HullConfig(HullConfig),
    HullOption(HullOption),
    Sensor(Sensor),
    Screen(Screen),
    Computer(Computer),
    Software(Software),
    Misc(MiscItem),
    Hardpoint(Hardpoint),
);

