use std::fs;
use std::path::Path;

use tracing::{debug, info, warn};

use crate::config::AssemblyConfig;
use crate::index::ArchiveEntry;

/// Outcome of loading one extracted entry back from the scratch area.
///
/// Skips are first-class values rather than errors, keeping the
/// degrade-by-omission boundary visible to the assembler and to tests.
#[derive(Debug)]
pub enum EntryContent {
    Loaded(String),
    Skipped(String),
}

/// Read one extracted entry back as UTF-8 text.
///
/// Anything unreadable as text (missing after a failed extraction, binary
/// payload, permissions) becomes a `Skipped` with the reason.
pub fn load_entry(scratch_root: &Path, entry: &ArchiveEntry) -> EntryContent {
    match fs::read_to_string(scratch_root.join(&entry.path)) {
        Ok(content) => EntryContent::Loaded(content),
        Err(e) => EntryContent::Skipped(e.to_string()),
    }
}

/// Concatenate extracted entries, in index order, under a hard character
/// budget.
///
/// Each segment is a `// File:` header plus the file text. Skipped entries
/// warn and move on; a segment that would cross the budget stops assembly
/// outright, so the output is always a deterministic in-order prefix of
/// the accepted entries.
pub fn assemble(entries: &[ArchiveEntry], scratch_root: &Path, config: &AssemblyConfig) -> String {
    let budget_chars = config.budget_chars();
    let mut text = String::new();

    for entry in entries {
        let content = match load_entry(scratch_root, entry) {
            EntryContent::Loaded(content) => content,
            EntryContent::Skipped(reason) => {
                warn!(path = %entry.path, reason = %reason, "Skipping unreadable entry");
                continue;
            }
        };

        let segment = format!("// File: {}\n{}\n\n", entry.path, content);
        if text.len() + segment.len() > budget_chars {
            info!(
                path = %entry.path,
                assembled_chars = text.len(),
                budget_chars,
                "Assembly budget reached, stopping"
            );
            break;
        }
        text.push_str(&segment);
    }

    debug!(chars = text.len(), "Assembled codebase text");
    text
}
