//! Drive table loading and drive code parsing.
//!
//! `drives.csv` holds one row per drive code with the tonnage and cost of the
//! jump drive, maneuver drive, and power plant of that size.

use std::collections::BTreeMap;
use std::fmt;
use std::io::Read;
use std::str::FromStr;

use csv::{ReaderBuilder, Trim};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

use super::specs::ensure_non_negative;

pub(crate) const DRIVES_TABLE: &str = "drives.csv";

/// Drive size letter: A-Z excluding I and O.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DriveCode(char);

impl DriveCode {
    /// Parse a single drive letter (case-insensitive).
    pub fn new(letter: char) -> Result<Self> {
        let upper = letter.to_ascii_uppercase();
        if upper.is_ascii_uppercase() && upper != 'I' && upper != 'O' {
            Ok(Self(upper))
        } else {
            Err(Error::InvalidDriveCode {
                code: letter.to_string(),
            })
        }
    }

    pub fn letter(&self) -> char {
        self.0
    }
}

impl FromStr for DriveCode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        match (chars.next(), chars.next()) {
            (Some(letter), None) => Self::new(letter),
            _ => Err(Error::InvalidDriveCode {
                code: s.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for DriveCode {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<DriveCode> for String {
    fn from(code: DriveCode) -> Self {
        code.0.to_string()
    }
}

impl fmt::Display for DriveCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Tonnage and cost of one drive of a given size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DriveStats {
    pub tonnage: f64,
    pub cost: f64,
}

/// One row of the drive table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DriveSpec {
    pub code: DriveCode,
    pub jump: DriveStats,
    pub maneuver: DriveStats,
    pub plant: DriveStats,
    /// Fuel burned by the power plant over two weeks.
    pub plant_fuel_two_weeks: f64,
}

/// Drive rows keyed by code, in code order.
#[derive(Debug, Clone, Default)]
pub struct DriveTable {
    rows: BTreeMap<DriveCode, DriveSpec>,
}

impl DriveTable {
    /// Load the drive table from CSV (file or in-memory buffer).
    ///
    /// Header names are matched after lowercasing and stripping punctuation, so
    /// `Jump Tonnage` and `jump_tonnage` are treated alike.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = ReaderBuilder::new().trim(Trim::Fields).from_reader(reader);

        let headers = csv_reader
            .headers()
            .map_err(|source| Error::Csv {
                table: DRIVES_TABLE,
                source,
            })?
            .clone();

        let normalize = |s: &str| {
            s.to_ascii_lowercase()
                .chars()
                .filter(|c| c.is_ascii_alphanumeric())
                .collect::<String>()
        };
        let normalized_headers: Vec<String> = headers.iter().map(normalize).collect();

        let required = [
            "code",
            "jump_tonnage",
            "jump_cost",
            "maneuver_tonnage",
            "maneuver_cost",
            "plant_tonnage",
            "plant_cost",
            "plant_fuel_two_weeks",
        ];
        let mut index_map: BTreeMap<&str, usize> = BTreeMap::new();
        for field in required {
            let wanted = normalize(field);
            if let Some(i) = normalized_headers.iter().position(|h| *h == wanted) {
                index_map.insert(field, i);
            }
        }

        let missing: Vec<&str> = required
            .into_iter()
            .filter(|c| !index_map.contains_key(c))
            .collect();
        if !missing.is_empty() {
            return Err(Error::TableValidation {
                table: DRIVES_TABLE,
                message: format!(
                    "missing required columns: {}. Available: {}",
                    missing.join(", "),
                    headers.iter().collect::<Vec<_>>().join(", ")
                ),
            });
        }

        let mut rows = BTreeMap::new();
        for (line, result) in csv_reader.records().enumerate() {
            // header is line 1
            let row = line + 2;
            let record = result.map_err(|source| Error::Csv {
                table: DRIVES_TABLE,
                source,
            })?;

            let get = |field: &str| -> &str {
                index_map
                    .get(field)
                    .and_then(|&i| record.get(i))
                    .unwrap_or_default()
            };
            let number = |field: &str| -> Result<f64> {
                get(field)
                    .parse::<f64>()
                    .map_err(|e| Error::TableValidation {
                        table: DRIVES_TABLE,
                        message: format!("invalid {field} at row {row}: {e}"),
                    })
            };

            let code: DriveCode = get("code").parse()?;
            let spec = DriveSpec {
                code,
                jump: DriveStats {
                    tonnage: number("jump_tonnage")?,
                    cost: number("jump_cost")?,
                },
                maneuver: DriveStats {
                    tonnage: number("maneuver_tonnage")?,
                    cost: number("maneuver_cost")?,
                },
                plant: DriveStats {
                    tonnage: number("plant_tonnage")?,
                    cost: number("plant_cost")?,
                },
                plant_fuel_two_weeks: number("plant_fuel_two_weeks")?,
            };

            ensure_non_negative(
                DRIVES_TABLE,
                &code.to_string(),
                &[
                    (spec.jump.tonnage, "jump_tonnage"),
                    (spec.jump.cost, "jump_cost"),
                    (spec.maneuver.tonnage, "maneuver_tonnage"),
                    (spec.maneuver.cost, "maneuver_cost"),
                    (spec.plant.tonnage, "plant_tonnage"),
                    (spec.plant.cost, "plant_cost"),
                    (spec.plant_fuel_two_weeks, "plant_fuel_two_weeks"),
                ],
            )?;

            if rows.insert(code, spec).is_some() {
                return Err(Error::TableValidation {
                    table: DRIVES_TABLE,
                    message: format!("duplicate drive code {code} at row {row}"),
                });
            }
        }

        if rows.is_empty() {
            return Err(Error::TableValidation {
                table: DRIVES_TABLE,
                message: "no drive rows found".to_string(),
            });
        }

        Ok(Self { rows })
    }

    pub fn get(&self, code: DriveCode) -> Option<&DriveSpec> {
        self.rows.get(&code)
    }

    /// Rows in ascending code order.
    pub fn iter(&self) -> impl Iterator<Item = &DriveSpec> {
        self.rows.values()
    }

    pub fn codes(&self) -> impl Iterator<Item = DriveCode> + '_ {
        self.rows.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drive_code_rejects_i_and_o() {
        assert!(DriveCode::new('I').is_err());
        assert!(DriveCode::new('o').is_err());
        assert!(matches!(
            "AB".parse::<DriveCode>(),
            Err(Error::InvalidDriveCode { .. })
        ));
        assert_eq!(DriveCode::new('b').expect("valid").letter(), 'B');
    }

    #[test]
    fn loads_rows_with_loose_headers() {
        let csv = "Code, Jump Tonnage, Jump Cost, Maneuver Tonnage, Maneuver Cost, Plant Tonnage, Plant Cost, Plant Fuel (Two Weeks)\n\
                   A,10,10,2,4,4,8,2\n\
                   B,15,20,3,8,7,16,4\n";
        let table = DriveTable::from_reader(csv.as_bytes()).expect("table loads");
        assert_eq!(table.len(), 2);
        let b = table.get(DriveCode::new('B').expect("code")).expect("row");
        assert_eq!(b.jump.tonnage, 15.0);
        assert_eq!(b.plant_fuel_two_weeks, 4.0);
    }

    #[test]
    fn reports_missing_columns() {
        let csv = "code,jump_tonnage\nA,10\n";
        let err = DriveTable::from_reader(csv.as_bytes()).expect_err("missing columns");
        match err {
            Error::TableValidation { table, message } => {
                assert_eq!(table, DRIVES_TABLE);
                assert!(message.contains("maneuver_cost"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn rejects_duplicate_codes() {
        let csv = "code,jump_tonnage,jump_cost,maneuver_tonnage,maneuver_cost,plant_tonnage,plant_cost,plant_fuel_two_weeks\n\
                   A,10,10,2,4,4,8,2\n\
                   a,10,10,2,4,4,8,2\n";
        let err = DriveTable::from_reader(csv.as_bytes()).expect_err("duplicate");
        assert!(err.to_string().contains("duplicate drive code A"));
    }
}
