//! Show command handler for printing a design summary.

use std::path::Path;

use anyhow::{Context, Result};

use shipyard_lib::{Catalog, ShipSummary};
use shipyard_cli::output::{render_summary, OutputFormat};

use super::load_ship;

pub fn handle_show_command(catalog: &Catalog, file: &Path, format: OutputFormat) -> Result<()> {
    let ship = load_ship(catalog, file)?;
    let summary = ShipSummary::from_ship(&ship);
    let rendered = render_summary(&summary, format).context("failed to serialize summary")?;
    print!("{rendered}");
    Ok(())
}
