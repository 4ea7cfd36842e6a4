// Module exports for CLI subcommands.
//
// Each module handles one subcommand; main.rs parses arguments and dispatches.

pub mod catalog;
pub mod check;
pub mod new;
pub mod show;

use std::borrow::Cow;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use shipyard_lib::{load_design, Catalog, Spacecraft};

/// The built-in tables, or the tables in `data_dir` when given.
pub fn load_catalog(data_dir: Option<&Path>) -> Result<Cow<'static, Catalog>> {
    match data_dir {
        Some(dir) => {
            let catalog = Catalog::from_dir(dir)
                .with_context(|| format!("failed to load lookup tables from {}", dir.display()))?;
            debug!(dir = %dir.display(), "loaded lookup tables");
            Ok(Cow::Owned(catalog))
        }
        None => Ok(Cow::Borrowed(Catalog::builtin())),
    }
}

/// Read a design file and rebuild the ship against `catalog`.
pub fn load_ship<'c>(catalog: &'c Catalog, path: &Path) -> Result<Spacecraft<'c>> {
    let design =
        load_design(path).with_context(|| format!("failed to read design {}", path.display()))?;
    design
        .build(catalog)
        .with_context(|| format!("failed to rebuild design {}", path.display()))
}
