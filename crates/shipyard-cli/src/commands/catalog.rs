//! Catalog command handler for listing lookup tables.

use clap::ValueEnum;

use shipyard_cli::output::{render_catalog, CatalogRow};
use shipyard_cli::terminal::ColorPalette;
use shipyard_lib::catalog::{Table, WeaponSpec};
use shipyard_lib::Catalog;

/// Lookup tables the catalog command can list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CatalogTable {
    Hulls,
    Drives,
    Armor,
    Configs,
    Options,
    Sensors,
    Screens,
    Computers,
    Software,
    Misc,
    Turrets,
    Weapons,
    BayWeapons,
    Missiles,
}

impl CatalogTable {
    fn title(self) -> &'static str {
        match self {
            CatalogTable::Hulls => "Hull bands",
            CatalogTable::Drives => "Drives",
            CatalogTable::Armor => "Armor",
            CatalogTable::Configs => "Hull configurations",
            CatalogTable::Options => "Hull options",
            CatalogTable::Sensors => "Sensors",
            CatalogTable::Screens => "Screens",
            CatalogTable::Computers => "Computers",
            CatalogTable::Software => "Software",
            CatalogTable::Misc => "Misc items",
            CatalogTable::Turrets => "Turret models",
            CatalogTable::Weapons => "Turret weapons",
            CatalogTable::BayWeapons => "Bay weapons",
            CatalogTable::Missiles => "Missiles",
        }
    }
}

pub fn handle_catalog_command(catalog: &Catalog, table: CatalogTable, palette: &ColorPalette) {
    let rows = catalog_rows(catalog, table);
    print!("{}", render_catalog(table.title(), &rows, palette));
}

fn weapon_rows(table: &Table<WeaponSpec>) -> Vec<CatalogRow> {
    table
        .iter()
        .map(|entry| {
            CatalogRow::new(
                entry.name,
                format!(
                    "TL {}, range {}, damage {}, {} MCr",
                    entry.spec.tl, entry.spec.range, entry.spec.damage, entry.spec.cost
                ),
            )
        })
        .collect()
}

/// Rows for one table, in the catalog's name order.
pub fn catalog_rows(catalog: &Catalog, table: CatalogTable) -> Vec<CatalogRow> {
    match table {
        CatalogTable::Hulls => catalog
            .hull_bands()
            .iter()
            .map(|band| {
                CatalogRow::new(
                    band.designation.clone(),
                    format!("{} tons, {} MCr", band.tonnage, band.cost),
                )
            })
            .collect(),
        CatalogTable::Drives => catalog
            .drives()
            .iter()
            .map(|drive| {
                CatalogRow::new(
                    drive.code.to_string(),
                    format!(
                        "jump {} t/{} MCr, maneuver {} t/{} MCr, plant {} t/{} MCr",
                        drive.jump.tonnage,
                        drive.jump.cost,
                        drive.maneuver.tonnage,
                        drive.maneuver.cost,
                        drive.plant.tonnage,
                        drive.plant.cost
                    ),
                )
            })
            .collect(),
        CatalogTable::Armor => catalog
            .armor()
            .iter()
            .map(|entry| {
                CatalogRow::new(
                    entry.name,
                    format!(
                        "TL {}, protection {}, {}% of hull tons, {}% of hull cost",
                        entry.spec.tl,
                        entry.spec.protection,
                        entry.spec.hull_amount * 100.0,
                        entry.spec.cost_by_hull_percentage * 100.0
                    ),
                )
            })
            .collect(),
        CatalogTable::Configs => catalog
            .hull_configs()
            .iter()
            .map(|entry| {
                CatalogRow::new(
                    entry.name,
                    format!(
                        "hull cost x{}, {}",
                        entry.spec.mod_hull_cost, entry.spec.mod_additional
                    ),
                )
            })
            .collect(),
        CatalogTable::Options => catalog
            .hull_options()
            .iter()
            .map(|entry| {
                CatalogRow::new(
                    entry.name,
                    format!(
                        "TL {}, {} MCr per hull ton",
                        entry.spec.tl, entry.spec.cost_per_hull_ton
                    ),
                )
            })
            .collect(),
        CatalogTable::Sensors => catalog
            .sensors()
            .iter()
            .map(|entry| {
                CatalogRow::new(
                    entry.name,
                    format!(
                        "TL {}, {} t, {} MCr, DM {:+} ({})",
                        entry.spec.tl,
                        entry.spec.tonnage,
                        entry.spec.cost,
                        entry.spec.sensors_dm,
                        entry.spec.equipment
                    ),
                )
            })
            .collect(),
        CatalogTable::Screens => catalog
            .screens()
            .iter()
            .map(|entry| {
                CatalogRow::new(
                    entry.name,
                    format!(
                        "TL {}, {} t, {} MCr",
                        entry.spec.tl, entry.spec.tonnage, entry.spec.cost
                    ),
                )
            })
            .collect(),
        CatalogTable::Computers => catalog
            .computers()
            .iter()
            .map(|entry| {
                CatalogRow::new(
                    entry.name,
                    format!(
                        "TL {}, rating {}, {} MCr",
                        entry.spec.tl, entry.spec.rating, entry.spec.cost
                    ),
                )
            })
            .collect(),
        CatalogTable::Software => catalog
            .software()
            .iter()
            .flat_map(|entry| {
                let (name, package) = (entry.name, entry.spec);
                package.levels.iter().map(move |(level, spec)| {
                    CatalogRow::new(
                        format!("{name} {level}"),
                        format!(
                            "TL {}, rating {}, {} MCr",
                            spec.tl, spec.rating, spec.cost
                        ),
                    )
                })
            })
            .collect(),
        CatalogTable::Misc => catalog
            .misc()
            .iter()
            .map(|entry| {
                CatalogRow::new(
                    entry.name,
                    format!(
                        "{}, {} t, {} MCr",
                        entry.spec.category.as_str(),
                        entry.spec.tonnage,
                        entry.spec.cost
                    ),
                )
            })
            .collect(),
        CatalogTable::Turrets => catalog
            .turrets()
            .models
            .iter()
            .map(|entry| {
                CatalogRow::new(
                    entry.name,
                    format!(
                        "{} t, {} MCr, {} weapon(s), {} hardpoint slot(s)",
                        entry.spec.tonnage,
                        entry.spec.cost,
                        entry.spec.num_weapons,
                        entry.spec.hardpoint_slots
                    ),
                )
            })
            .collect(),
        CatalogTable::Weapons => weapon_rows(&catalog.turrets().weapons),
        CatalogTable::BayWeapons => weapon_rows(&catalog.turrets().bay_weapons),
        CatalogTable::Missiles => {
            let per_ton = catalog.turrets().missiles_per_ton;
            catalog
                .turrets()
                .missiles
                .iter()
                .map(|entry| {
                    CatalogRow::new(
                        entry.name,
                        format!("{} MCr per ton, {} per ton", entry.spec, per_ton),
                    )
                })
                .collect()
        }
    }
}
