mod common;

use shipyard_lib::error::Error;
use shipyard_lib::{Catalog, MountAddon, Turret, ValidationIssue};

use common::{assert_close, ship};

#[test]
fn single_turret_with_beam_laser() {
    let catalog = Catalog::builtin();
    let mut ship = ship(100);
    let id = ship.add_hardpoint().expect("free hardpoint id");
    let hardpoint = ship.hardpoint_mut(id).expect("hardpoint");
    hardpoint.set_turret(Some(Turret::new(catalog, "Single Turret").expect("turret")));
    hardpoint
        .turret_mut()
        .expect("turret")
        .set_weapon(catalog, 0, Some("Beam Laser"))
        .expect("slot 0");
    assert_close(ship.cargo_remaining(), 99.0);
    assert_close(ship.cost_total(), 3.2);

    ship.hardpoint_mut(id)
        .expect("hardpoint")
        .turret_mut()
        .expect("turret")
        .set_weapon(catalog, 0, None)
        .expect("slot 0");
    assert_close(ship.cost_total(), 2.2);
}

#[test]
fn weapon_slots_are_bounded() {
    let catalog = Catalog::builtin();
    let mut turret = Turret::new(catalog, "Double Turret").expect("turret");
    turret
        .set_weapon(catalog, 1, Some("Pulse Laser"))
        .expect("slot 1");
    let err = turret
        .set_weapon(catalog, 2, Some("Pulse Laser"))
        .expect_err("two slots");
    match err {
        Error::WeaponSlotOutOfRange {
            model,
            slot,
            capacity,
        } => {
            assert_eq!(model, "Double Turret");
            assert_eq!(slot, 2);
            assert_eq!(capacity, 2);
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn missile_bank_bay() {
    let catalog = Catalog::builtin();
    let mut ship = ship(100);
    let id = ship.add_hardpoint().expect("free hardpoint id");
    let hardpoint = ship.hardpoint_mut(id).expect("hardpoint");
    let mut bay = Turret::new(catalog, "Bay Weapon").expect("bay");
    bay.set_weapon(catalog, 0, Some("Missile Bank"))
        .expect("bay weapon");
    hardpoint.set_turret(Some(bay));
    assert_close(ship.cost_total(), 14.0);
    assert_close(ship.cargo_remaining(), 49.0);
    assert_eq!(ship.hardpoint_slots_used(), 2);

    let err = ship
        .hardpoint_mut(id)
        .expect("hardpoint")
        .set_addon(MountAddon::PopUp, true)
        .expect_err("bays take no mount addons");
    assert!(matches!(err, Error::BayWeaponAddon { .. }));
}

#[test]
fn turret_weapons_are_not_bay_weapons() {
    let catalog = Catalog::builtin();
    let mut turret = Turret::new(catalog, "Single Turret").expect("turret");
    let err = turret
        .set_weapon(catalog, 0, Some("Missile Bank"))
        .expect_err("bay only");
    assert!(matches!(err, Error::UnknownComponent { .. }));
}

#[test]
fn popup_and_fixed_mountings() {
    let catalog = Catalog::builtin();
    let mut ship = ship(100);
    let id = ship.add_hardpoint().expect("free hardpoint id");
    let hardpoint = ship.hardpoint_mut(id).expect("hardpoint");
    let mut turret = Turret::new(catalog, "Single Turret").expect("turret");
    turret
        .set_weapon(catalog, 0, Some("Beam Laser"))
        .expect("slot 0");
    hardpoint.set_turret(Some(turret));

    assert!(hardpoint.toggle_addon(MountAddon::PopUp).expect("turret"));
    assert_close(hardpoint.tonnage(), 3.0);
    assert_close(hardpoint.cost(), 2.2);

    assert!(hardpoint.toggle_addon(MountAddon::Fixed).expect("turret"));
    assert_close(hardpoint.cost(), 1.1);
    assert_close(ship.cost_total(), 3.1);
    assert_close(ship.cargo_remaining(), 97.0);
}

#[test]
fn missiles_and_sandcasters() {
    let catalog = Catalog::builtin();
    let mut turret = Turret::new(catalog, "Double Turret").expect("turret");
    turret
        .set_weapon(catalog, 0, Some("Missile Rack"))
        .expect("slot 0");
    turret
        .set_weapon(catalog, 1, Some("Sandcaster"))
        .expect("slot 1");
    turret
        .set_missiles(catalog, "Standard", 2)
        .expect("missile type");
    turret.set_sandcaster_barrels(3);

    assert_eq!(turret.missile_count(), 24);
    assert_eq!(turret.sandcaster_canisters(), 60);
    assert_close(turret.tonnage(), 6.0);
    assert_close(turret.cost(), 0.5 + 0.75 + 0.25 + 0.03 + 0.06);

    turret
        .set_missiles(catalog, "standard", 0)
        .expect("missile type");
    assert_eq!(turret.missile_count(), 0);
    assert!(turret.missiles().is_empty());
}

#[test]
fn hardpoints_are_limited_by_hull() {
    let mut ship = ship(100);
    assert_eq!(ship.hardpoints_total(), 1);
    ship.add_hardpoint().expect("free hardpoint id");
    assert!(ship.validate().is_empty());

    ship.add_hardpoint().expect("free hardpoint id");
    assert!(ship
        .validate()
        .contains(&ValidationIssue::HardpointsOversubscribed {
            used: 2,
            available: 1
        }));
}

#[test]
fn removing_hardpoints() {
    let catalog = Catalog::builtin();
    let mut ship = ship(200);
    let first = ship.add_hardpoint().expect("free hardpoint id");
    let second = ship.add_hardpoint().expect("free hardpoint id");
    assert_ne!(first, second);
    ship.hardpoint_mut(second)
        .expect("hardpoint")
        .set_turret(Some(Turret::new(catalog, "Triple Turret").expect("turret")));
    assert_close(ship.cost_total(), 9.0);

    let removed = ship.remove_hardpoint(second).expect("present");
    assert_eq!(removed.turret().map(Turret::model), Some("Triple Turret"));
    assert_close(ship.cost_total(), 8.0);

    let err = ship.remove_hardpoint(second).expect_err("gone");
    assert!(matches!(err, Error::HardpointNotFound { id } if id == second));
}
