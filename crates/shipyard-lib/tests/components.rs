mod common;

use shipyard_lib::error::Error;
use shipyard_lib::{
    Armor, Catalog, Component, ComponentKind, Computer, Drive, Hardpoint, HullConfig, HullOption,
    MiscItem, Screen, Sensor, Software, Turret,
};

use common::{assert_close, ship};

fn components(catalog: &Catalog) -> Vec<Component> {
    let mut hardpoint = Hardpoint::new(catalog, 7);
    hardpoint.set_turret(Some(Turret::new(catalog, "Triple Turret").expect("turret")));
    vec![
        Drive::jump(catalog, "B").expect("drive").into(),
        Drive::maneuver(catalog, "C").expect("drive").into(),
        Drive::power_plant(catalog, "C").expect("drive").into(),
        Armor::new(catalog, "Crystaliron").expect("armor").into(),
        HullConfig::new(catalog, "Streamlined").expect("config").into(),
        HullOption::new(catalog, "Stealth").expect("option").into(),
        Sensor::new(catalog, "Very Advanced").expect("sensor").into(),
        Screen::new(catalog, "Meson Screen").expect("screen").into(),
        Computer::new(catalog, "Model 5").expect("computer").into(),
        MiscItem::new(catalog, "Laboratory", 2).expect("item").into(),
        hardpoint.into(),
    ]
}

#[test]
fn install_then_uninstall_restores_totals() {
    let catalog = Catalog::builtin();
    for (scoop, component) in [false, true]
        .into_iter()
        .flat_map(|scoop| components(catalog).into_iter().map(move |c| (scoop, c)))
    {
        let mut ship = ship(400);
        if scoop {
            ship.toggle_fuel_scoop().expect("standard hull takes scoops");
        }
        let cost = ship.cost_total();
        let cargo = ship.cargo_remaining();
        let kind = component.kind();
        let name = component.name();

        ship.install(component).expect("install");
        assert!(
            (ship.cost_total() - cost).abs() > 1e-9,
            "{kind} {name} changed nothing"
        );

        let removed = ship.uninstall(kind, &name).expect("uninstall");
        assert_eq!(removed.kind(), kind);
        assert_close(ship.cost_total(), cost);
        assert_close(ship.cargo_remaining(), cargo);
        assert_eq!(ship.fuel_scoop(), scoop, "{kind} {name}");
    }
}

#[test]
fn bought_scoop_survives_hull_config_round_trip() {
    let catalog = Catalog::builtin();
    for config in ["Streamlined", "Distributed"] {
        let mut ship = ship(100);
        ship.toggle_fuel_scoop().expect("standard hull takes scoops");
        assert_close(ship.cost_total(), 3.0);

        ship.install(HullConfig::new(catalog, config).expect("config").into())
            .expect("install");
        ship.uninstall(ComponentKind::HullConfig, config)
            .expect("uninstall");

        assert!(ship.fuel_scoop(), "{config}");
        assert_close(ship.cost_total(), 3.0);
    }
}

#[test]
fn software_round_trip_on_a_computer() {
    let catalog = Catalog::builtin();
    let mut ship = ship(100);
    ship.install(Computer::new(catalog, "Model 4").expect("computer").into())
        .expect("computer");
    let cost = ship.cost_total();

    ship.install(Software::new(catalog, "Evade", 2).expect("software").into())
        .expect("software fits");
    assert_close(ship.cost_total(), cost + 2.0);
    assert_eq!(ship.rating_remaining(), 5);

    ship.uninstall(ComponentKind::Software, "evade")
        .expect("installed");
    assert_close(ship.cost_total(), cost);
    assert_eq!(ship.rating_remaining(), 20);
}

#[test]
fn hardpoint_ids_are_kept() {
    let catalog = Catalog::builtin();
    let mut ship = ship(300);
    let id = ship
        .insert_hardpoint(Hardpoint::new(catalog, 7))
        .expect("free id");
    assert_eq!(id, 7);
    assert_eq!(ship.add_hardpoint().expect("free hardpoint id"), 8);
    assert_eq!(ship.hardpoints().len(), 2);

    let err = ship
        .insert_hardpoint(Hardpoint::new(catalog, 7))
        .expect_err("id taken");
    assert!(matches!(err, Error::AlreadyInstalled { .. }));

    let err = ship
        .uninstall(ComponentKind::Hardpoint, "forward")
        .expect_err("not an id");
    assert!(matches!(err, Error::NotInstalled { .. }));
}

#[test]
fn hardpoint_ids_run_out_without_reuse() {
    let catalog = Catalog::builtin();
    let mut ship = ship(300);
    ship.insert_hardpoint(Hardpoint::new(catalog, u32::MAX))
        .expect("free id");

    let cost = ship.cost_total();
    let err = ship.add_hardpoint().expect_err("ids exhausted");
    assert!(matches!(err, Error::HardpointIdsExhausted));
    assert_eq!(ship.hardpoints().len(), 1);
    assert_close(ship.cost_total(), cost);
}

#[test]
fn uninstall_missing_component() {
    let mut ship = ship(100);
    for (kind, name) in [
        (ComponentKind::JumpDrive, ""),
        (ComponentKind::Armor, "Titanium Steel"),
        (ComponentKind::Screen, "Meson Screen"),
        (ComponentKind::Computer, ""),
        (ComponentKind::Software, "Library"),
        (ComponentKind::Weapon, "Beam Laser"),
    ] {
        let err = ship.uninstall(kind, name).expect_err("nothing installed");
        assert!(matches!(err, Error::NotInstalled { .. }), "{kind}");
    }
}

#[test]
fn rejected_changes_leave_ship_untouched() {
    let catalog = Catalog::builtin();
    let mut ship = ship(100);
    ship.toggle_bridge();
    let before = ship.cost_total();

    assert!(ship
        .install(Drive::jump(catalog, "Z").expect("drive").into())
        .is_err());
    assert!(ship
        .install(Software::new(catalog, "Library", 0).expect("software").into())
        .is_err());
    assert!(ship
        .install(MiscItem::new(catalog, "Escape Pods", 1).expect("item").into())
        .is_err());

    assert_close(ship.cost_total(), before);
    assert_close(ship.cargo_remaining(), 90.0);
}
