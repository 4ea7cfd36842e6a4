//! Turrets, the weapons they carry, and the hardpoints they sit on.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, FixedMountSpec, PopUpSpec, WeaponSpec};
use crate::error::{Error, Result};

use super::ComponentKind;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Weapon {
    name: String,
    tl: u8,
    range: String,
    damage: String,
    cost: f64,
}

impl Weapon {
    /// Look up a turret-mounted weapon.
    pub fn new(catalog: &Catalog, name: &str) -> Result<Self> {
        let entry = catalog.turrets().weapons.get(name)?;
        Ok(Self::from_spec(entry.name, entry.spec))
    }

    /// Look up a weapon for the bay model.
    pub fn bay(catalog: &Catalog, name: &str) -> Result<Self> {
        let entry = catalog.turrets().bay_weapons.get(name)?;
        Ok(Self::from_spec(entry.name, entry.spec))
    }

    fn from_spec(name: &str, spec: &WeaponSpec) -> Self {
        Self {
            name: name.to_string(),
            tl: spec.tl,
            range: spec.range.clone(),
            damage: spec.damage.clone(),
            cost: spec.cost,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tl(&self) -> u8 {
        self.tl
    }

    pub fn range(&self) -> &str {
        &self.range
    }

    pub fn damage(&self) -> &str {
        &self.damage
    }

    pub fn cost(&self) -> f64 {
        self.cost
    }
}

/// Tons of one missile type carried by a turret.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MissileLoad {
    pub tons: u32,
    pub cost_per_ton: f64,
    pub missiles_per_ton: u32,
}

impl MissileLoad {
    pub fn missiles(&self) -> u32 {
        self.tons * self.missiles_per_ton
    }

    pub fn cost(&self) -> f64 {
        f64::from(self.tons) * self.cost_per_ton
    }
}

/// A turret (or weapon bay) with its weapon slots and ammunition.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Turret {
    model: String,
    bay: bool,
    tonnage: f64,
    cost: f64,
    hardpoint_slots: u32,
    weapons: Vec<Option<Weapon>>,
    missiles: BTreeMap<String, MissileLoad>,
    sandcaster_barrels: u32,
    barrel_tonnage: f64,
    barrel_cost: f64,
    canisters_per_barrel: u32,
}

impl Turret {
    pub fn new(catalog: &Catalog, model: &str) -> Result<Self> {
        let tables = catalog.turrets();
        let entry = tables.models.get(model)?;
        Ok(Self {
            model: entry.name.to_string(),
            bay: entry.spec.bay,
            tonnage: entry.spec.tonnage,
            cost: entry.spec.cost,
            hardpoint_slots: entry.spec.hardpoint_slots,
            weapons: vec![None; entry.spec.num_weapons],
            missiles: BTreeMap::new(),
            sandcaster_barrels: 0,
            barrel_tonnage: tables.sandcaster.barrel_tonnage,
            barrel_cost: tables.sandcaster.barrel_cost,
            canisters_per_barrel: tables.sandcaster.canisters_per_barrel,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn is_bay(&self) -> bool {
        self.bay
    }

    pub fn hardpoint_slots(&self) -> u32 {
        self.hardpoint_slots
    }

    pub fn weapons(&self) -> &[Option<Weapon>] {
        &self.weapons
    }

    /// Fit or clear the weapon in `slot`.
    ///
    /// Bay models draw from the bay weapon table, turrets from the weapon table.
    pub fn set_weapon(&mut self, catalog: &Catalog, slot: usize, name: Option<&str>) -> Result<()> {
        if slot >= self.weapons.len() {
            return Err(Error::WeaponSlotOutOfRange {
                model: self.model.clone(),
                slot,
                capacity: self.weapons.len(),
            });
        }
        let weapon = match name {
            Some(name) if self.bay => Some(Weapon::bay(catalog, name)?),
            Some(name) => Some(Weapon::new(catalog, name)?),
            None => None,
        };
        self.weapons[slot] = weapon;
        Ok(())
    }

    pub fn missiles(&self) -> &BTreeMap<String, MissileLoad> {
        &self.missiles
    }

    /// Load `tons` of a missile type; zero tons unloads it.
    pub fn set_missiles(&mut self, catalog: &Catalog, kind: &str, tons: u32) -> Result<()> {
        let tables = catalog.turrets();
        let entry = tables.missiles.get(kind)?;
        if tons == 0 {
            self.missiles.remove(entry.name);
        } else {
            self.missiles.insert(
                entry.name.to_string(),
                MissileLoad {
                    tons,
                    cost_per_ton: *entry.spec,
                    missiles_per_ton: tables.missiles_per_ton,
                },
            );
        }
        Ok(())
    }

    pub fn missile_count(&self) -> u32 {
        self.missiles.values().map(MissileLoad::missiles).sum()
    }

    pub fn sandcaster_barrels(&self) -> u32 {
        self.sandcaster_barrels
    }

    pub fn set_sandcaster_barrels(&mut self, barrels: u32) {
        self.sandcaster_barrels = barrels;
    }

    pub fn sandcaster_canisters(&self) -> u32 {
        self.sandcaster_barrels * self.canisters_per_barrel
    }

    pub fn tonnage(&self) -> f64 {
        let missiles: u32 = self.missiles.values().map(|load| load.tons).sum();
        self.tonnage
            + f64::from(missiles)
            + f64::from(self.sandcaster_barrels) * self.barrel_tonnage
    }

    pub fn cost(&self) -> f64 {
        let weapons: f64 = self.weapons.iter().flatten().map(Weapon::cost).sum();
        let missiles: f64 = self.missiles.values().map(MissileLoad::cost).sum();
        self.cost + weapons + missiles + f64::from(self.sandcaster_barrels) * self.barrel_cost
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MountAddon {
    PopUp,
    Fixed,
}

impl MountAddon {
    pub fn as_str(&self) -> &'static str {
        match self {
            MountAddon::PopUp => "Pop-up Turret",
            MountAddon::Fixed => "Fixed Mounting",
        }
    }
}

impl fmt::Display for MountAddon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A mounting point on the hull with an optional turret.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Hardpoint {
    id: u32,
    turret: Option<Turret>,
    popup: bool,
    fixed: bool,
    #[serde(skip)]
    popup_spec: PopUpSpec,
    #[serde(skip)]
    fixed_spec: FixedMountSpec,
}

impl Hardpoint {
    pub fn new(catalog: &Catalog, id: u32) -> Self {
        let addons = catalog.turrets().addons;
        Self {
            id,
            turret: None,
            popup: false,
            fixed: false,
            popup_spec: addons.popup,
            fixed_spec: addons.fixed,
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn turret(&self) -> Option<&Turret> {
        self.turret.as_ref()
    }

    pub fn turret_mut(&mut self) -> Result<&mut Turret> {
        let id = self.id;
        self.turret.as_mut().ok_or_else(|| Error::NotInstalled {
            kind: ComponentKind::Turret,
            name: format!("on hardpoint {id}"),
        })
    }

    /// Replace the turret, returning the previous one. Bays drop both mount addons.
    pub fn set_turret(&mut self, turret: Option<Turret>) -> Option<Turret> {
        if turret.as_ref().is_some_and(Turret::is_bay) {
            self.popup = false;
            self.fixed = false;
        }
        std::mem::replace(&mut self.turret, turret)
    }

    pub fn has_addon(&self, addon: MountAddon) -> bool {
        match addon {
            MountAddon::PopUp => self.popup,
            MountAddon::Fixed => self.fixed,
        }
    }

    pub fn set_addon(&mut self, addon: MountAddon, fitted: bool) -> Result<()> {
        if fitted && self.turret.as_ref().is_some_and(Turret::is_bay) {
            return Err(Error::BayWeaponAddon {
                addon: addon.to_string(),
            });
        }
        match addon {
            MountAddon::PopUp => self.popup = fitted,
            MountAddon::Fixed => self.fixed = fitted,
        }
        Ok(())
    }

    /// Flip a mount addon and return whether it is now fitted.
    pub fn toggle_addon(&mut self, addon: MountAddon) -> Result<bool> {
        let fitted = !self.has_addon(addon);
        self.set_addon(addon, fitted)?;
        Ok(fitted)
    }

    /// Hardpoint slots consumed: the turret's declared slots, or one when empty.
    pub fn slots(&self) -> u32 {
        self.turret.as_ref().map_or(1, Turret::hardpoint_slots)
    }

    pub fn tonnage(&self) -> f64 {
        let mut tonnage = self.turret.as_ref().map_or(0.0, Turret::tonnage);
        if self.popup {
            tonnage += self.popup_spec.tonnage;
        }
        if self.fixed {
            tonnage += self.fixed_spec.tonnage;
        }
        tonnage
    }

    pub fn cost(&self) -> f64 {
        let mut cost = self.turret.as_ref().map_or(0.0, Turret::cost);
        if self.popup {
            cost += self.popup_spec.cost;
        }
        if self.fixed {
            cost *= self.fixed_spec.cost_multiplier;
        }
        cost
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_turret_with_beam_laser() {
        let catalog = Catalog::builtin();
        let mut turret = Turret::new(catalog, "Single Turret").expect("model");
        turret
            .set_weapon(catalog, 0, Some("Beam Laser"))
            .expect("weapon fits");
        assert!((turret.cost() - 1.2).abs() < 1e-6);
        assert!((turret.tonnage() - 1.0).abs() < 1e-6);

        let err = turret
            .set_weapon(catalog, 1, Some("Beam Laser"))
            .expect_err("single slot");
        assert!(matches!(
            err,
            Error::WeaponSlotOutOfRange {
                slot: 1,
                capacity: 1,
                ..
            }
        ));
    }

    #[test]
    fn bay_uses_bay_weapon_table() {
        let catalog = Catalog::builtin();
        let mut bay = Turret::new(catalog, "Bay Weapon").expect("model");
        assert!(bay.set_weapon(catalog, 0, Some("Beam Laser")).is_err());
        bay.set_weapon(catalog, 0, Some("Missile Bank"))
            .expect("bay weapon");
        assert!((bay.cost() - 12.0).abs() < 1e-6);
        assert_eq!(bay.hardpoint_slots(), 2);
    }

    #[test]
    fn missiles_and_sandcasters_add_tonnage() {
        let catalog = Catalog::builtin();
        let mut turret = Turret::new(catalog, "Double Turret").expect("model");
        turret
            .set_missiles(catalog, "smart", 2)
            .expect("missile type");
        turret.set_sandcaster_barrels(3);
        assert_eq!(turret.missile_count(), 24);
        assert_eq!(turret.sandcaster_canisters(), 60);
        assert!((turret.tonnage() - 6.0).abs() < 1e-6);
        assert!((turret.cost() - (0.5 + 0.06 + 0.06)).abs() < 1e-6);

        turret.set_missiles(catalog, "Smart", 0).expect("unload");
        assert!(turret.missiles().is_empty());
    }

    #[test]
    fn popup_and_fixed_mounts() {
        let catalog = Catalog::builtin();
        let mut hardpoint = Hardpoint::new(catalog, 1);
        hardpoint.set_turret(Some(Turret::new(catalog, "Triple Turret").expect("model")));
        assert!(hardpoint.toggle_addon(MountAddon::PopUp).expect("turret"));
        assert!((hardpoint.cost() - 2.0).abs() < 1e-6);
        assert!((hardpoint.tonnage() - 3.0).abs() < 1e-6);

        hardpoint.toggle_addon(MountAddon::Fixed).expect("turret");
        assert!((hardpoint.cost() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn bay_clears_and_rejects_mount_addons() {
        let catalog = Catalog::builtin();
        let mut hardpoint = Hardpoint::new(catalog, 1);
        hardpoint.toggle_addon(MountAddon::PopUp).expect("empty mount");
        hardpoint.set_turret(Some(Turret::new(catalog, "Bay Weapon").expect("model")));
        assert!(!hardpoint.has_addon(MountAddon::PopUp));
        assert_eq!(hardpoint.slots(), 2);

        let err = hardpoint
            .toggle_addon(MountAddon::Fixed)
            .expect_err("bay rejects mounts");
        assert!(matches!(err, Error::BayWeaponAddon { .. }));
    }
}
