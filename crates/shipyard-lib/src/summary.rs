use std::fmt::Write;

use serde::Serialize;

use crate::components::DriveKind;
use crate::constants::{BRIDGE_COST_PER_TON, FUEL_SCOOP_COST};
use crate::spacecraft::Spacecraft;

/// Presentation style for turning a [`ShipSummary`] into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryRenderMode {
    PlainText,
    Markdown,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SummaryDrive {
    pub kind: DriveKind,
    pub code: String,
    pub rating: u8,
    pub tonnage: f64,
    pub cost: f64,
}

/// Line item in the cost/tonnage breakdown.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SummaryLine {
    pub label: String,
    pub tonnage: f64,
    pub cost: f64,
}

/// Structured view of a ship that consumers can serialise or render.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ShipSummary {
    pub tonnage: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hull: Option<String>,
    pub hull_config: String,
    pub hull_hp: u32,
    pub structure_hp: u32,
    pub jump: u8,
    pub thrust: u8,
    pub fuel: u32,
    pub fuel_per_jump: f64,
    pub fuel_two_weeks: f64,
    pub armor_total: u32,
    pub hardpoints_used: u32,
    pub hardpoints_total: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub computer: Option<String>,
    pub rating_remaining: u32,
    pub drives: Vec<SummaryDrive>,
    pub lines: Vec<SummaryLine>,
    pub discount_percent: u32,
    pub cost: f64,
    pub cargo: f64,
    pub issues: Vec<String>,
}

impl ShipSummary {
    pub fn from_ship(ship: &Spacecraft<'_>) -> Self {
        let tonnage = ship.tonnage();
        let hull_cost = ship.hull_cost();
        let staterooms = ship.staterooms();

        let drives = DriveKind::ALL
            .into_iter()
            .filter_map(|kind| ship.drive(kind))
            .map(|drive| SummaryDrive {
                kind: drive.kind(),
                code: drive.code().to_string(),
                rating: match drive.kind() {
                    DriveKind::Jump => ship.jump(),
                    DriveKind::Maneuver => ship.thrust(),
                    DriveKind::PowerPlant => 0,
                },
                tonnage: drive.tonnage(),
                cost: drive.cost(),
            })
            .collect();

        let mut lines = vec![SummaryLine {
            label: format!("Hull ({})", ship.hull_config().name()),
            tonnage: 0.0,
            cost: hull_cost * ship.hull_config().mod_hull_cost(),
        }];
        if ship.bridge() {
            lines.push(SummaryLine {
                label: "Bridge".to_string(),
                tonnage: ship.bridge_tonnage(),
                cost: f64::from(tonnage) * BRIDGE_COST_PER_TON,
            });
        }
        if ship.fuel() > 0 {
            lines.push(SummaryLine {
                label: "Fuel".to_string(),
                tonnage: f64::from(ship.fuel()),
                cost: 0.0,
            });
        }
        lines.extend(ship.hull_options().map(|option| SummaryLine {
            label: option.name().to_string(),
            tonnage: 0.0,
            cost: option.cost(tonnage),
        }));
        if ship.fuel_scoop_charged() {
            lines.push(SummaryLine {
                label: "Fuel Scoops".to_string(),
                tonnage: 0.0,
                cost: FUEL_SCOOP_COST,
            });
        }
        lines.extend(
            DriveKind::ALL
                .into_iter()
                .filter_map(|kind| ship.drive(kind))
                .map(|drive| SummaryLine {
                    label: format!("{} {}", drive.kind(), drive.code()),
                    tonnage: drive.tonnage(),
                    cost: drive.cost(),
                }),
        );
        lines.extend(ship.armor().iter().map(|armor| SummaryLine {
            label: format!("Armor: {}", armor.name()),
            tonnage: armor.tonnage(tonnage),
            cost: armor.cost(hull_cost),
        }));
        lines.push(SummaryLine {
            label: format!("Sensors: {}", ship.sensors().name()),
            tonnage: ship.sensors().tonnage(),
            cost: ship.sensors().cost(),
        });
        lines.extend(ship.hardpoints().iter().map(|hp| SummaryLine {
            label: match hp.turret() {
                Some(turret) => format!("Hardpoint {}: {}", hp.id(), turret.model()),
                None => format!("Hardpoint {}", hp.id()),
            },
            tonnage: hp.tonnage(),
            cost: hp.cost(),
        }));
        lines.extend(ship.screens().map(|screen| SummaryLine {
            label: screen.name().to_string(),
            tonnage: screen.tonnage(),
            cost: screen.cost(),
        }));
        if let Some(computer) = ship.computer() {
            lines.push(SummaryLine {
                label: format!("Computer: {}", computer.model()),
                tonnage: 0.0,
                cost: computer.cost(),
            });
        }
        lines.extend(ship.software().map(|software| SummaryLine {
            label: format!("{} {}", software.name(), software.level()),
            tonnage: 0.0,
            cost: software.cost(),
        }));
        lines.extend(ship.misc().map(|item| SummaryLine {
            label: format!("{} x{}", item.name(), item.count()),
            tonnage: item.tonnage(tonnage, staterooms),
            cost: item.cost(tonnage, staterooms),
        }));

        Self {
            tonnage,
            hull: ship.hull_designation().map(str::to_string),
            hull_config: ship.hull_config().name().to_string(),
            hull_hp: ship.hull_hp(),
            structure_hp: ship.structure_hp(),
            jump: ship.jump(),
            thrust: ship.thrust(),
            fuel: ship.fuel(),
            fuel_per_jump: ship.fuel_per_jump(),
            fuel_two_weeks: ship.fuel_two_weeks(),
            armor_total: ship.armor_total(),
            hardpoints_used: ship.hardpoint_slots_used(),
            hardpoints_total: ship.hardpoints_total(),
            computer: ship.computer().map(|c| c.model().to_string()),
            rating_remaining: ship.rating_remaining(),
            drives,
            lines,
            discount_percent: ship.discount_percent(),
            cost: ship.cost_total(),
            cargo: ship.cargo_remaining(),
            issues: ship.validate().iter().map(ToString::to_string).collect(),
        }
    }

    pub fn render(&self, mode: SummaryRenderMode) -> String {
        match mode {
            SummaryRenderMode::PlainText => self.render_plain(),
            SummaryRenderMode::Markdown => self.render_markdown(),
        }
    }

    fn hull_label(&self) -> &str {
        self.hull.as_deref().unwrap_or("-")
    }

    fn render_plain(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "{} ton {} hull (designation {}), Jump-{} Thrust-{}",
            self.tonnage,
            self.hull_config,
            self.hull_label(),
            self.jump,
            self.thrust
        );
        let _ = writeln!(
            buffer,
            "Hull {} / Structure {}  Armor {}  Hardpoints {}/{}",
            self.hull_hp,
            self.structure_hp,
            self.armor_total,
            self.hardpoints_used,
            self.hardpoints_total
        );
        for line in &self.lines {
            let _ = writeln!(
                buffer,
                "  {:<32} {:>8.2} t {:>10.3} MCr",
                line.label, line.tonnage, line.cost
            );
        }
        if self.discount_percent > 0 {
            let _ = writeln!(buffer, "Discount: {}%", self.discount_percent);
        }
        let _ = writeln!(
            buffer,
            "Total: {:.3} MCr, cargo {:.2} t",
            self.cost, self.cargo
        );
        for issue in &self.issues {
            let _ = writeln!(buffer, "warning: {issue}");
        }
        buffer
    }

    fn render_markdown(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "**{} ton {} hull** (designation `{}`), Jump-{} Thrust-{}",
            self.tonnage,
            self.hull_config,
            self.hull_label(),
            self.jump,
            self.thrust
        );
        let _ = writeln!(buffer);
        let _ = writeln!(buffer, "| Item | Tons | MCr |");
        let _ = writeln!(buffer, "|---|---:|---:|");
        for line in &self.lines {
            let _ = writeln!(
                buffer,
                "| {} | {:.2} | {:.3} |",
                line.label, line.tonnage, line.cost
            );
        }
        let _ = writeln!(
            buffer,
            "| **Total** | {:.2} cargo | {:.3} |",
            self.cargo, self.cost
        );
        for issue in &self.issues {
            let _ = writeln!(buffer, "* _{issue}_");
        }
        buffer
    }
}
