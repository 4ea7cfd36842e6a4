mod common;

use shipyard_lib::error::Error;
use shipyard_lib::{Armor, Catalog, ComponentKind, Screen, Sensor};

use common::{assert_close, ship};

#[test]
fn armor_scales_with_hull() {
    let catalog = Catalog::builtin();
    let mut ship = ship(200);
    ship.add_armor(Armor::new(catalog, "Titanium Steel").expect("armor"))
        .expect("hull set");
    assert_close(ship.cargo_remaining(), 190.0);
    assert_eq!(ship.armor_total(), 2);
    assert_close(ship.cost_total(), 8.4);

    ship.set_tonnage(100);
    assert_close(ship.cargo_remaining(), 95.0);
    assert_close(ship.cost_total(), 2.1);
}

#[test]
fn armor_layers_stack() {
    let catalog = Catalog::builtin();
    let mut ship = ship(200);
    ship.add_armor(Armor::new(catalog, "Titanium Steel").expect("armor"))
        .expect("hull set");
    ship.add_armor(Armor::new(catalog, "Crystaliron").expect("armor"))
        .expect("hull set");
    assert_eq!(ship.armor_total(), 6);
    assert_close(ship.cargo_remaining(), 180.0);
    assert_close(ship.cost_total(), 10.0);

    ship.remove_armor("crystaliron").expect("fitted");
    assert_eq!(ship.armor_total(), 2);
    assert_close(ship.cost_total(), 8.4);
}

#[test]
fn armor_needs_tonnage() {
    let mut ship = ship(0);
    let err = ship
        .add_armor(Armor::new(Catalog::builtin(), "Titanium Steel").expect("armor"))
        .expect_err("no hull");
    assert!(matches!(
        err,
        Error::TonnageNotSet {
            kind: ComponentKind::Armor
        }
    ));
    assert!(ship.armor().is_empty());
}

#[test]
fn screens_take_space_and_money() {
    let catalog = Catalog::builtin();
    let mut ship = ship(200);
    ship.add_screen(Screen::new(catalog, "Nuclear Damper").expect("screen"))
        .expect("not fitted");
    assert_close(ship.cargo_remaining(), 150.0);
    assert_close(ship.cost_total(), 58.0);

    ship.add_screen(Screen::new(catalog, "Meson Screen").expect("screen"))
        .expect("not fitted");
    assert_close(ship.cargo_remaining(), 100.0);
    assert_close(ship.cost_total(), 118.0);

    let err = ship
        .add_screen(Screen::new(catalog, "Meson Screen").expect("screen"))
        .expect_err("only one of each");
    assert!(matches!(err, Error::AlreadyInstalled { .. }));

    assert!(!ship.toggle_screen(Screen::new(catalog, "Nuclear Damper").expect("screen")));
    assert_close(ship.cost_total(), 68.0);
    ship.remove_screen("Meson Screen").expect("fitted");
    assert_close(ship.cost_total(), 8.0);
    assert_close(ship.cargo_remaining(), 200.0);
}

#[test]
fn sensors_replace_standard_fit() {
    let catalog = Catalog::builtin();
    let mut ship = ship(100);
    assert_eq!(ship.sensors().name(), "Standard");

    let previous = ship.set_sensors(Sensor::new(catalog, "Advanced").expect("sensor"));
    assert_eq!(previous.name(), "Standard");
    assert_close(ship.cargo_remaining(), 97.0);
    assert_close(ship.cost_total(), 4.0);

    ship.set_sensors(Sensor::new(catalog, "Basic Civilian").expect("sensor"));
    assert_close(ship.cargo_remaining(), 99.0);
    assert_close(ship.cost_total(), 2.05);
    assert_eq!(ship.sensors().sensors_dm(), -2);
}
