use serde::Deserialize;
use tracing::{debug, info};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Criteria deciding which archive entries are worth extracting.
///
/// Path segments match anywhere in the archive-relative path. Extensions
/// include the leading dot. The deny-list is consulted independently of
/// the allow-list, so an extension present in both is rejected.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SelectionCriteria {
    pub included_path_segments: Vec<String>,
    pub excluded_path_segments: Vec<String>,
    pub included_extensions: Vec<String>,
    pub excluded_extensions: Vec<String>,
    /// Per-file cap in bytes.
    pub max_entry_size: u64,
    /// Running-total cap in bytes, charged in archive order.
    pub max_cumulative_size: u64,
}

impl Default for SelectionCriteria {
    fn default() -> Self {
        Self {
            included_path_segments: strings(&[
                "/src", "/lib", "/app", "/docs", "/tests", "/examples",
            ]),
            excluded_path_segments: strings(&[
                "/node_modules",
                "/dist",
                "/build",
                "/vendor",
                "/public",
                "/assets",
            ]),
            included_extensions: strings(&[
                ".js", ".ts", ".py", ".java", ".md", ".txt", ".json", ".yaml", ".yml", ".html",
                ".css",
            ]),
            excluded_extensions: strings(&[
                ".exe", ".png", ".jpg", ".gif", ".pdf", ".zip", ".tar", ".gz", ".bin", ".o", ".a",
            ]),
            max_entry_size: 1024 * 1024,
            max_cumulative_size: 50 * 1024 * 1024,
        }
    }
}

/// Budget for the assembled codebase text.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AssemblyConfig {
    /// Consumption-unit limit of the downstream analyzer.
    pub max_units: usize,
    /// Characters per unit. A crude proxy, not tied to any tokenizer.
    pub chars_per_unit: usize,
}

impl Default for AssemblyConfig {
    fn default() -> Self {
        Self {
            max_units: 100_000,
            chars_per_unit: 4,
        }
    }
}

impl AssemblyConfig {
    pub fn budget_chars(&self) -> usize {
        self.max_units * self.chars_per_unit
    }
}

/// Top-level configuration for one verification run.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct VerifierConfig {
    pub selection: SelectionCriteria,
    pub assembly: AssemblyConfig,
}

impl VerifierConfig {
    pub fn trace_loaded(&self) {
        info!(
            included_extensions = self.selection.included_extensions.len(),
            max_entry_size = self.selection.max_entry_size,
            max_cumulative_size = self.selection.max_cumulative_size,
            budget_chars = self.assembly.budget_chars(),
            "Loaded configuration"
        );
        debug!(?self, "Configuration (full debug)");
    }
}
