//! New command handler for writing a fresh design file.

use std::path::PathBuf;

use anyhow::{Context, Result};

use shipyard_lib::{
    default_designs_dir, design_path, save_design, Catalog, Drive, DriveKind, HullConfig,
    ShipDesign, Spacecraft,
};

/// Arguments for the new command.
#[derive(Debug, Clone)]
pub struct NewCommandArgs {
    /// Hull tonnage.
    pub tonnage: u32,
    /// Fit a bridge.
    pub bridge: bool,
    /// Fuel tankage in tons.
    pub fuel: u32,
    /// Hull configuration name.
    pub config: String,
    /// Drive codes for the jump drive, maneuver drive, and power plant.
    pub jump: Option<String>,
    pub maneuver: Option<String>,
    pub plant: Option<String>,
    /// Design name, used for the default file name.
    pub name: String,
    /// Explicit output path.
    pub out: Option<PathBuf>,
}

/// Handle the new subcommand.
///
/// Builds the ship through the library mutators, so an incompatible drive or
/// unknown configuration fails before anything is written. Returns the path
/// the design was saved to.
pub fn handle_new_command(catalog: &Catalog, args: &NewCommandArgs) -> Result<PathBuf> {
    let mut ship = Spacecraft::new(catalog, args.tonnage)?;
    if args.bridge {
        ship.toggle_bridge();
    }
    ship.set_fuel(args.fuel);
    ship.set_hull_config(
        HullConfig::new(catalog, &args.config)
            .with_context(|| format!("unknown hull configuration '{}'", args.config))?,
    );

    for (kind, code) in [
        (DriveKind::Jump, &args.jump),
        (DriveKind::Maneuver, &args.maneuver),
        (DriveKind::PowerPlant, &args.plant),
    ] {
        if let Some(code) = code {
            let drive = Drive::new(catalog, kind, code)?;
            ship.add_drive(drive)
                .with_context(|| format!("cannot fit {kind} {code}"))?;
        }
    }

    let path = match &args.out {
        Some(path) => path.clone(),
        None => design_path(&default_designs_dir()?, &args.name),
    };
    save_design(&path, &ShipDesign::capture(&ship))
        .with_context(|| format!("failed to save design to {}", path.display()))?;

    println!("Saved {} ton design to {}", ship.tonnage(), path.display());
    println!(
        "Total: {:.3} MCr, cargo {:.2} t",
        ship.cost_total(),
        ship.cargo_remaining()
    );
    Ok(path)
}
