mod common;

use shipyard_lib::error::Error;
use shipyard_lib::{
    design_path, load_design, save_design, Armor, Catalog, Computer, ComputerAddon, Drive,
    Hardpoint, HullConfig, MiscItem, MountAddon, Screen, Sensor, ShipDesign, Software, Spacecraft,
    Turret,
};
use tempfile::TempDir;

use common::assert_close;

fn fitted_ship(catalog: &Catalog) -> Spacecraft<'_> {
    let mut ship = Spacecraft::new(catalog, 400).expect("hull");
    ship.set_fuel(80);
    ship.set_discount(10).expect("discount");
    ship.toggle_bridge();
    ship.set_hull_config(HullConfig::new(catalog, "Streamlined").expect("config"));
    ship.add_jump_drive(Drive::jump(catalog, "K").expect("drive"))
        .expect("fits");
    ship.add_maneuver_drive(Drive::maneuver(catalog, "K").expect("drive"))
        .expect("fits");
    ship.add_power_plant(Drive::power_plant(catalog, "K").expect("drive"))
        .expect("fits");
    ship.add_armor(Armor::new(catalog, "Titanium Steel").expect("armor"))
        .expect("hull set");
    ship.set_sensors(Sensor::new(catalog, "Basic Military").expect("sensor"));
    ship.add_screen(Screen::new(catalog, "Nuclear Damper").expect("screen"))
        .expect("not fitted");
    ship.set_computer(Some(
        Computer::new(catalog, "Model 4")
            .expect("computer")
            .with_addon(ComputerAddon::JumpControlSpec),
    ))
    .expect("no software yet");
    ship.install_software(Software::new(catalog, "Jump Control", 4).expect("software"))
        .expect("fits with jump control addon");
    ship.set_misc(MiscItem::new(catalog, "Stateroom", 6).expect("item"))
        .expect("set");
    ship.set_misc(MiscItem::new(catalog, "Escape Pods", 1).expect("item"))
        .expect("staterooms present");

    let id = ship.add_hardpoint().expect("free hardpoint id");
    let hardpoint = ship.hardpoint_mut(id).expect("hardpoint");
    let mut turret = Turret::new(catalog, "Triple Turret").expect("turret");
    turret
        .set_weapon(catalog, 0, Some("Beam Laser"))
        .expect("slot 0");
    turret
        .set_weapon(catalog, 2, Some("Missile Rack"))
        .expect("slot 2");
    turret
        .set_missiles(catalog, "Smart", 1)
        .expect("missile type");
    hardpoint.set_turret(Some(turret));
    hardpoint
        .set_addon(MountAddon::PopUp, true)
        .expect("turret takes pop-up");

    let bay = ship.add_hardpoint().expect("free hardpoint id");
    let mut weapon_bay = Turret::new(catalog, "Bay Weapon").expect("bay");
    weapon_bay
        .set_weapon(catalog, 0, Some("Fusion Gun Bay"))
        .expect("bay weapon");
    ship.hardpoint_mut(bay)
        .expect("hardpoint")
        .set_turret(Some(weapon_bay));
    ship
}

#[test]
fn capture_and_build_round_trip() {
    let catalog = Catalog::builtin();
    let ship = fitted_ship(catalog);
    let design = ShipDesign::capture(&ship);
    // Stored cost is rounded to the nearest thousand credits.
    assert!((design.stats.cost - ship.cost_total()).abs() < 1e-3);
    assert_close(design.stats.cargo, ship.cargo_remaining());

    let rebuilt = design.build(catalog).expect("rebuild");
    assert_close(rebuilt.cost_total(), ship.cost_total());
    assert_close(rebuilt.cargo_remaining(), ship.cargo_remaining());
    assert_eq!(rebuilt.rating_remaining(), ship.rating_remaining());
    assert_eq!(ShipDesign::capture(&rebuilt), design);
}

#[test]
fn save_and_load_from_disk() {
    let catalog = Catalog::builtin();
    let dir = TempDir::new().expect("temp dir");
    let path = design_path(&dir.path().join("designs"), "far-trader");
    let design = ShipDesign::capture(&fitted_ship(catalog));

    save_design(&path, &design).expect("save");
    assert!(path.exists());
    assert_eq!(path.extension().and_then(|e| e.to_str()), Some("srd"));

    let loaded = load_design(&path).expect("load");
    assert_eq!(loaded, design);

    // Saving again replaces the file in place.
    save_design(&path, &loaded).expect("overwrite");
    assert_eq!(load_design(&path).expect("reload"), design);
}

#[test]
fn loading_missing_file_reports_path() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("missing.srd");
    let err = load_design(&path).expect_err("no file");
    match err {
        Error::Io { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn build_rejects_invalid_documents() {
    let catalog = Catalog::builtin();
    let mut design = ShipDesign::capture(&Spacecraft::new(catalog, 100).expect("hull"));
    design.config.sensors = "Quantum".to_string();
    let err = design.build(catalog).expect_err("unknown sensors");
    assert!(matches!(err, Error::UnknownComponent { .. }));

    let mut design = ShipDesign::capture(&Spacecraft::new(catalog, 100).expect("hull"));
    design.stats.discount = 1.5;
    let err = design.build(catalog).expect_err("bad discount");
    assert!(matches!(err, Error::DesignFormat { .. }));
    let mut design = ShipDesign::capture(&Spacecraft::new(catalog, 100).expect("hull"));
    design.stats.discount = 0.955;
    let err = design.build(catalog).expect_err("fractional discount");
    assert!(matches!(err, Error::DesignFormat { .. }));

    design.stats.discount = 0.95;
    let ship = design.build(catalog).expect("whole percentage");
    assert_eq!(ship.discount_percent(), 5);
}

#[test]
fn bought_scoop_survives_distributed_hull() {
    let catalog = Catalog::builtin();
    let mut ship = Spacecraft::new(catalog, 100).expect("hull");
    ship.toggle_fuel_scoop().expect("standard hull takes scoops");
    ship.set_hull_config(HullConfig::new(catalog, "Distributed").expect("config"));
    assert!(!ship.fuel_scoop());

    let design = ShipDesign::capture(&ship);
    assert!(design.config.fuel_scoop);
    let mut rebuilt = design.build(catalog).expect("rebuild");
    assert_close(rebuilt.cost_total(), 1.8);

    rebuilt.set_hull_config(HullConfig::new(catalog, "Standard").expect("config"));
    assert!(rebuilt.fuel_scoop());
    assert_close(rebuilt.cost_total(), 3.0);
}

#[test]
fn loaded_design_with_highest_hardpoint_id() {
    let catalog = Catalog::builtin();
    let mut ship = Spacecraft::new(catalog, 200).expect("hull");
    ship.insert_hardpoint(Hardpoint::new(catalog, u32::MAX))
        .expect("free id");

    let mut rebuilt = ShipDesign::capture(&ship).build(catalog).expect("rebuild");
    assert!(rebuilt.hardpoint(u32::MAX).is_some());
    let err = rebuilt.add_hardpoint().expect_err("ids exhausted");
    assert!(matches!(err, Error::HardpointIdsExhausted));
    assert_eq!(rebuilt.hardpoints().len(), 1);
}
