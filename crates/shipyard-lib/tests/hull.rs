mod common;

use shipyard_lib::error::Error;
use shipyard_lib::{Catalog, HullConfig, HullOption, Spacecraft};

use common::{assert_close, ship};

#[test]
fn bare_hull_costs_base_price() {
    let ship = ship(100);
    assert_eq!(ship.tonnage(), 100);
    assert_eq!(ship.hull_designation(), Some("1"));
    assert_close(ship.cost_total(), 2.0);
    assert_close(ship.cargo_remaining(), 100.0);
    assert_eq!(ship.hull_hp(), 2);
    assert_eq!(ship.structure_hp(), 2);
}

#[test]
fn tonnage_is_capped() {
    let mut ship = ship(5000);
    assert_eq!(ship.tonnage(), 2000);
    ship.set_tonnage(2400);
    assert_eq!(ship.tonnage(), 2000);
    assert_eq!(ship.hull_designation(), Some("L"));
}

#[test]
fn large_hull_designation() {
    let ship = ship(1000);
    assert_eq!(ship.hull_designation(), Some("B"));
    assert_eq!(ship.hull_hp(), 20);
}

#[test]
fn bridge_cost_and_tonnage() {
    let mut small = ship(100);
    assert!(small.toggle_bridge());
    assert_close(small.cargo_remaining(), 90.0);
    assert_close(small.cost_total(), 2.5);

    for (tonnage, cost) in [(400, 18.0), (1200, 126.0), (2000, 210.0)] {
        let mut ship = ship(tonnage);
        ship.toggle_bridge();
        assert_close(ship.cost_total(), cost);
    }

    assert!(!small.toggle_bridge());
    assert_close(small.cost_total(), 2.0);
}

#[test]
fn bridge_tonnage_steps_with_hull() {
    for (tonnage, bridge) in [(200, 10.0), (300, 20.0), (1100, 30.0), (2000, 40.0)] {
        let mut ship = ship(tonnage);
        ship.toggle_bridge();
        assert_close(ship.bridge_tonnage(), bridge);
    }
}

#[test]
fn streamlined_hull_costs_more_and_scoops_for_free() {
    let catalog = Catalog::builtin();
    let mut ship = ship(100);
    ship.set_hull_config(HullConfig::new(catalog, "Streamlined").expect("config"));
    assert!(ship.fuel_scoop());
    assert_close(ship.cost_total(), 2.2);

    // Built-in scoops stay fitted.
    assert!(ship.toggle_fuel_scoop().expect("streamlined allows scoops"));
    assert_close(ship.cost_total(), 2.2);

    ship.set_hull_config(HullConfig::new(catalog, "Standard").expect("config"));
    assert!(!ship.fuel_scoop());
    assert_close(ship.cost_total(), 2.0);
}

#[test]
fn fuel_scoop_on_standard_hull() {
    let mut ship = ship(100);
    assert!(ship.toggle_fuel_scoop().expect("standard allows scoops"));
    assert_close(ship.cost_total(), 3.0);
    assert!(!ship.toggle_fuel_scoop().expect("toggle back"));
    assert_close(ship.cost_total(), 2.0);
}

#[test]
fn distributed_hull_rejects_scoops() {
    let catalog = Catalog::builtin();
    let mut ship = ship(100);
    ship.toggle_fuel_scoop().expect("scoop fitted");
    ship.set_hull_config(HullConfig::new(catalog, "Distributed").expect("config"));
    assert!(!ship.fuel_scoop());
    assert_close(ship.cost_total(), 1.8);

    let err = ship.toggle_fuel_scoop().expect_err("distributed hull");
    match err {
        Error::FuelScoopUnavailable { config } => assert_eq!(config, "Distributed"),
        other => panic!("unexpected error: {:?}", other),
    }
    assert!(!ship.fuel_scoop());
    // The bought scoop comes back with a shape that mounts it.
    ship.set_hull_config(HullConfig::new(catalog, "Standard").expect("config"));
    assert!(ship.fuel_scoop());
    assert_close(ship.cost_total(), 3.0);
}

#[test]
fn fuel_takes_cargo_space() {
    let mut ship = ship(100);
    ship.set_fuel(50);
    assert_eq!(ship.fuel(), 50);
    assert_close(ship.cargo_remaining(), 50.0);
    assert_close(ship.cost_total(), 2.0);
}

#[test]
fn discount_scales_total() {
    let mut ship = ship(100);
    ship.set_discount(10).expect("valid discount");
    assert_close(ship.cost_total(), 1.8);
    assert_eq!(ship.discount_percent(), 10);

    let err = ship.set_discount(101).expect_err("over 100 percent");
    assert!(matches!(err, Error::InvalidDiscount { percent: 101 }));
    assert_close(ship.cost_total(), 1.8);
}

#[test]
fn hull_options_priced_per_ton() {
    let catalog = Catalog::builtin();
    let mut ship = ship(200);
    let reflec = HullOption::new(catalog, "Reflec").expect("option");
    assert!(ship.toggle_hull_option(reflec.clone()));
    assert_close(ship.cost_total(), 28.0);

    ship.add_hull_option(HullOption::new(catalog, "Self-Sealing").expect("option"))
        .expect("not yet fitted");
    assert_close(ship.cost_total(), 30.0);

    let err = ship
        .add_hull_option(reflec.clone())
        .expect_err("already fitted");
    assert!(matches!(err, Error::AlreadyInstalled { .. }));

    assert!(!ship.toggle_hull_option(reflec));
    ship.remove_hull_option("self-sealing").expect("fitted");
    assert_close(ship.cost_total(), 8.0);
}

#[test]
fn zero_tonnage_hull_is_free() {
    let ship = Spacecraft::new(Catalog::builtin(), 0).expect("unset hull");
    assert_eq!(ship.hull_designation(), None);
    assert_close(ship.cost_total(), 0.0);
    assert_eq!(ship.hardpoints_total(), 0);
}
