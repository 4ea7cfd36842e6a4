//! Imperium shipyard library entry points.
//!
//! This crate exposes the lookup tables for starship construction, the
//! component value objects built from them, and the [`Spacecraft`] aggregate
//! that totals cost and cargo as parts are fitted. Higher-level consumers
//! (the CLI) should only depend on the items exported here instead of
//! reimplementing the construction rules.
//!

#![deny(warnings)]

pub mod catalog;
pub mod components;
pub mod constants;
pub mod design;
pub mod error;
pub mod spacecraft;
pub mod summary;

pub use catalog::{Catalog, DriveCode, HullBand, MiscCategory, MiscScaling, TABLE_FILES};
pub use components::{
    Armor, Component, ComponentKind, Computer, ComputerAddon, Drive, DriveKind, Hardpoint,
    HullConfig, HullOption, MiscItem, MountAddon, Screen, Sensor, Software, Turret, Weapon,
};
pub use design::{
    default_designs_dir, design_path, load_design, save_design, ShipDesign, DESIGN_EXTENSION,
};
pub use error::{Error, Result};
pub use spacecraft::{Spacecraft, ValidationIssue};
pub use summary::{ShipSummary, SummaryRenderMode};
