use std::fs;

use anyhow::{Context, Result};
use tracing::info;

use crate::analyze::ClaimReport;

/// Well-known location of the persisted verification report.
pub const REPORT_PATH: &str = "report.json";

/// Print the report to stdout and persist it to [`REPORT_PATH`].
pub fn generate_report(report: &[ClaimReport]) -> Result<()> {
    let json = serde_json::to_string_pretty(report)
        .context("failed to serialise verification report")?;

    println!("Verification Report:");
    println!("{json}");

    fs::write(REPORT_PATH, &json).with_context(|| format!("failed to write {REPORT_PATH}"))?;
    info!(path = REPORT_PATH, records = report.len(), "Report saved");
    println!("Report saved to {REPORT_PATH}");
    Ok(())
}
