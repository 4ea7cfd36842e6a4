//! Check command handler for reporting design problems.

use std::path::Path;

use anyhow::Result;

use shipyard_cli::output::render_issues;
use shipyard_cli::terminal::ColorPalette;
use shipyard_lib::Catalog;

use super::load_ship;

/// Print the validation report and return whether the design is clean.
pub fn handle_check_command(catalog: &Catalog, file: &Path, palette: &ColorPalette) -> Result<bool> {
    let ship = load_ship(catalog, file)?;
    let issues = ship.validate();
    print!("{}", render_issues(&issues, palette));
    Ok(issues.is_empty())
}
