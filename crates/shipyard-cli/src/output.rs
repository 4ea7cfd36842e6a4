//! Output formatting for ship summaries, validation reports, and catalog
//! listings.

use std::fmt::Write;

use clap::ValueEnum;
use serde::Serialize;

use shipyard_lib::{ShipSummary, SummaryRenderMode, ValidationIssue};

use crate::terminal::ColorPalette;

/// How `show` prints a design.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Markdown,
    Json,
}

/// Render a summary in the requested format.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render_summary(summary: &ShipSummary, format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Text => Ok(summary.render(SummaryRenderMode::PlainText)),
        OutputFormat::Markdown => Ok(summary.render(SummaryRenderMode::Markdown)),
        OutputFormat::Json => serde_json::to_string_pretty(summary).map(|mut json| {
            json.push('\n');
            json
        }),
    }
}

/// One line per validation issue, or a single all-clear line.
pub fn render_issues(issues: &[ValidationIssue], palette: &ColorPalette) -> String {
    let mut buffer = String::new();
    if issues.is_empty() {
        let _ = writeln!(buffer, "{}OK{}: no design issues", palette.ok, palette.reset);
        return buffer;
    }
    for issue in issues {
        let _ = writeln!(
            buffer,
            "{}warning{}: {}",
            palette.warning, palette.reset, issue
        );
    }
    let _ = writeln!(buffer, "{} issue(s) found", issues.len());
    buffer
}

/// A catalog table row: the entry name plus a formatted summary of its stats.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogRow {
    pub name: String,
    pub detail: String,
}

impl CatalogRow {
    pub fn new(name: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            detail: detail.into(),
        }
    }
}

/// Render a titled table of catalog rows.
pub fn render_catalog(title: &str, rows: &[CatalogRow], palette: &ColorPalette) -> String {
    let mut buffer = String::new();
    if rows.is_empty() {
        let _ = writeln!(buffer, "No entries in {title}.");
        return buffer;
    }
    let width = rows
        .iter()
        .map(|row| row.name.chars().count())
        .max()
        .unwrap_or(0)
        .max(4);
    let _ = writeln!(
        buffer,
        "{}{} ({}):{}",
        palette.bold,
        title,
        rows.len(),
        palette.reset
    );
    for row in rows {
        let _ = writeln!(
            buffer,
            "  {:<width$}  {}{}{}",
            row.name, palette.gray, row.detail, palette.reset
        );
    }
    buffer
}

#[cfg(test)]
mod tests {
    use super::*;
    use shipyard_lib::{Catalog, Spacecraft};

    #[test]
    fn json_summary_is_parseable() {
        let ship = Spacecraft::new(Catalog::builtin(), 100).expect("ship");
        let summary = ShipSummary::from_ship(&ship);
        let json = render_summary(&summary, OutputFormat::Json).expect("json");
        let value: serde_json::Value = serde_json::from_str(&json).expect("parse");
        assert_eq!(value["tonnage"], 100);
        assert_eq!(value["hull"], "1");
    }

    #[test]
    fn issues_report() {
        let palette = ColorPalette::plain();
        assert_eq!(render_issues(&[], &palette), "OK: no design issues\n");

        let report = render_issues(&[ValidationIssue::MissingPowerPlant], &palette);
        assert!(report.starts_with("warning: Drives installed without a power plant"));
        assert!(report.ends_with("1 issue(s) found\n"));
    }

    #[test]
    fn catalog_table_aligns_names() {
        let rows = vec![
            CatalogRow::new("Reflec", "TL 10"),
            CatalogRow::new("Self-Sealing", "TL 9"),
        ];
        let text = render_catalog("Hull options", &rows, &ColorPalette::plain());
        assert_eq!(
            text,
            "Hull options (2):\n  Reflec        TL 10\n  Self-Sealing  TL 9\n"
        );
    }
}
