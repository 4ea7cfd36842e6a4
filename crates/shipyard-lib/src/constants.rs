//! Fixed construction rules that are not table-driven.

/// Largest hull the tables cover.
pub const MAX_TONNAGE: u32 = 2000;

/// Bridge price per hull ton (MCr).
pub const BRIDGE_COST_PER_TON: f64 = 0.005;

/// Price of fuel scoops on hulls without built-in scoops (MCr).
pub const FUEL_SCOOP_COST: f64 = 1.0;

/// Hull tons per point of hull and structure.
pub const TONS_PER_HIT_POINT: u32 = 50;

/// Hull tons per hardpoint.
pub const TONS_PER_HARDPOINT: u32 = 100;

/// Fraction of hull tonnage burned per parsec of jump.
pub const JUMP_FUEL_PER_HULL_TON: f64 = 0.1;

pub const DEFAULT_HULL_CONFIG: &str = "Standard";
pub const DEFAULT_SENSORS: &str = "Standard";

/// Bridge tonnage for a hull.
pub fn bridge_tonnage(hull_tonnage: u32) -> f64 {
    match hull_tonnage {
        0..=299 => 10.0,
        300..=1099 => 20.0,
        1100..=1999 => 30.0,
        _ => 40.0,
    }
}
