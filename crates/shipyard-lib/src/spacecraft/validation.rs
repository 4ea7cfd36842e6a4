use std::fmt;

use serde::Serialize;

use super::Spacecraft;

/// A design problem that does not stop the ship from being built.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "issue", rename_all = "snake_case")]
pub enum ValidationIssue {
    /// Installed parts need more room than the hull has.
    NegativeCargo { cargo: f64 },
    PlantUnderJumpDrive { plant: char, drive: char },
    PlantUnderManeuverDrive { plant: char, drive: char },
    /// The plant is smaller than both drives; `drive` is the larger of the two.
    PlantUnderDrives { plant: char, drive: char },
    MissingPowerPlant,
    HardpointsOversubscribed { used: u32, available: u32 },
    SoftwareOverBudget { required: u32, available: u32 },
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationIssue::NegativeCargo { cargo } => {
                write!(f, "Cargo space is negative: {cargo:.2} tons")
            }
            ValidationIssue::PlantUnderJumpDrive { plant, drive } => {
                write!(f, "PPlant under J-Drive. {plant} < {drive}")
            }
            ValidationIssue::PlantUnderManeuverDrive { plant, drive } => {
                write!(f, "PPlant under M-Drive. {plant} < {drive}")
            }
            ValidationIssue::PlantUnderDrives { plant, drive } => {
                write!(f, "PPlant under max M/J-Drive. {plant} < {drive}")
            }
            ValidationIssue::MissingPowerPlant => {
                write!(f, "Drives installed without a power plant")
            }
            ValidationIssue::HardpointsOversubscribed { used, available } => {
                write!(f, "Hardpoints oversubscribed: {used}/{available}")
            }
            ValidationIssue::SoftwareOverBudget {
                required,
                available,
            } => write!(f, "Software exceeds computer rating: {required}/{available}"),
        }
    }
}

impl Spacecraft<'_> {
    /// Compare the power plant with the installed drives.
    ///
    /// Returns `None` when the plant is at least as large as every drive, or
    /// when no drives are fitted.
    pub fn check_power_plant(&self) -> Option<ValidationIssue> {
        let jump = self.jump_drive().map(|d| d.code());
        let maneuver = self.maneuver_drive().map(|d| d.code());
        let Some(plant) = self.power_plant().map(|d| d.code()) else {
            return (jump.is_some() || maneuver.is_some())
                .then_some(ValidationIssue::MissingPowerPlant);
        };

        let under_jump = jump.filter(|&code| plant < code);
        let under_maneuver = maneuver.filter(|&code| plant < code);
        let plant = plant.letter();
        match (under_jump, under_maneuver) {
            (Some(j), Some(m)) => Some(ValidationIssue::PlantUnderDrives {
                plant,
                drive: j.max(m).letter(),
            }),
            (Some(j), None) => Some(ValidationIssue::PlantUnderJumpDrive {
                plant,
                drive: j.letter(),
            }),
            (None, Some(m)) => Some(ValidationIssue::PlantUnderManeuverDrive {
                plant,
                drive: m.letter(),
            }),
            (None, None) => None,
        }
    }

    /// Every non-fatal problem with the current design.
    pub fn validate(&self) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();

        let cargo = self.cargo_remaining();
        if cargo < 0.0 {
            issues.push(ValidationIssue::NegativeCargo { cargo });
        }

        if let Some(issue) = self.check_power_plant() {
            issues.push(issue);
        }

        let used = self.hardpoint_slots_used();
        let available = self.hardpoints_total();
        if used > available {
            issues.push(ValidationIssue::HardpointsOversubscribed { used, available });
        }

        let required = self.rating_used();
        let available = self.computer().map_or(0, |c| c.rating());
        if required > available {
            issues.push(ValidationIssue::SoftwareOverBudget {
                required,
                available,
            });
        }

        issues
    }
}
