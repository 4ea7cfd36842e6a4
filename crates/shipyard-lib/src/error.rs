use std::path::PathBuf;

use thiserror::Error;

use crate::components::ComponentKind;

/// Convenient result alias for the shipyard library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
///
/// Lookup failures and rejected mutations share this enum. A mutator that
/// returns `Err` has left the spacecraft exactly as it was.
#[derive(Debug, Error)]
pub enum Error {
    /// A component name was not present in its lookup table.
    #[error("unknown {kind}: {name}{}", format_suggestions(.suggestions))]
    UnknownComponent {
        kind: ComponentKind,
        name: String,
        suggestions: Vec<String>,
    },

    /// Drive codes are single letters A-Z, excluding I and O.
    #[error("invalid drive code {code:?}; expected a single letter A-Z other than I or O")]
    InvalidDriveCode { code: String },

    /// The software package exists but does not define the requested level.
    #[error("invalid software level for {name}: {level}")]
    InvalidSoftwareLevel { name: String, level: u8 },

    /// Raised when a lookup table fails validation during load.
    #[error("invalid {table} table: {message}")]
    TableValidation { table: &'static str, message: String },

    /// Raised when a design document cannot be turned back into a ship.
    #[error("invalid design document: {message}")]
    DesignFormat { message: String },

    /// Mutations that depend on hull size require tonnage to be set first.
    #[error("tonnage not set before adding {kind}")]
    TonnageNotSet { kind: ComponentKind },

    /// The drive performance table has no entry for this drive at this tonnage.
    #[error("non-compatible drive to tonnage value - {kind} {code} to {tonnage} tons")]
    IncompatibleDrive {
        kind: ComponentKind,
        code: char,
        tonnage: u32,
    },

    /// Installing the software would push the rating sum past the computer rating.
    #[error("cannot install software, exceeds computer rating limit - {required}/{available}")]
    RatingExceeded { required: u32, available: u32 },

    /// Software needs a computer to run on.
    #[error("no computer installed; software cannot be added")]
    NoComputer,

    /// Escape pods are sized per stateroom.
    #[error("no staterooms exist on this ship - escape pods cannot be added")]
    NoStaterooms,

    /// Removing the last stateroom would orphan the installed escape pods.
    #[error("staterooms cannot be removed while escape pods are installed")]
    StateroomsInUse,

    /// The item is already installed and may only appear once.
    #[error("{kind} {name} already installed on ship")]
    AlreadyInstalled { kind: ComponentKind, name: String },

    /// The item to remove or modify is not attached to the ship.
    #[error("{kind} {name} not attached to the ship")]
    NotInstalled { kind: ComponentKind, name: String },

    /// The hull configuration cannot carry fuel scoops.
    #[error("{config} hulls cannot be fitted with fuel scoops")]
    FuelScoopUnavailable { config: String },

    /// Discount percentages run from 0 to 100.
    #[error("discount must be between 0 and 100 percent, got {percent}")]
    InvalidDiscount { percent: u32 },

    /// No hardpoint carries the given id.
    #[error("hardpoint {id} not found")]
    HardpointNotFound { id: u32 },

    /// The highest possible hardpoint id is already in use.
    #[error("no hardpoint ids left")]
    HardpointIdsExhausted,

    /// Weapon slot index beyond the turret's capacity.
    #[error("{model} has {capacity} weapon slot(s); slot {slot} is out of range")]
    WeaponSlotOutOfRange {
        model: String,
        slot: usize,
        capacity: usize,
    },

    /// Pop-up and fixed mountings only apply to turrets.
    #[error("bay weapons cannot take the {addon} mounting")]
    BayWeaponAddon { addon: String },

    /// No suitable project directories could be resolved for this platform.
    #[error("failed to resolve project directories for saved designs")]
    ProjectDirsUnavailable,

    /// Wrapper for IO errors.
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// CSV parse failure in a lookup table.
    #[error("failed to parse {table}: {source}")]
    Csv {
        table: &'static str,
        #[source]
        source: csv::Error,
    },

    /// Wrapper for JSON encoding and decoding errors.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
