use tracing::debug;

use crate::config::SelectionCriteria;
use crate::index::ArchiveEntry;

/// Select the entries worth extracting, preserving archive order.
///
/// An entry is accepted only if every rule holds: it is root-level or its
/// path contains an included segment, its path contains no excluded
/// segment, its extension is allow-listed and not deny-listed, it fits the
/// per-entry size cap, and the running total stays under the cumulative
/// cap.
///
/// The cumulative cap is charged in a single left-to-right pass and never
/// refunded: an entry passing every other rule consumes its declared size
/// even when the cap check rejects it, so once the running total crosses
/// the cap, all later entries are rejected regardless of their own size.
/// Pre-sorting by size would change the accepted set and is deliberately
/// not done.
pub fn filter_entries(entries: &[ArchiveEntry], criteria: &SelectionCriteria) -> Vec<ArchiveEntry> {
    let mut accepted = Vec::new();
    let mut cumulative: u64 = 0;

    for entry in entries {
        let root_level = !entry.path.contains('/');
        // Segments like "/src" must also anchor at the first path component,
        // so matching runs against the path with a leading slash.
        let rooted = format!("/{}", entry.path);
        let path_included = root_level
            || criteria
                .included_path_segments
                .iter()
                .any(|seg| rooted.contains(seg.as_str()));
        let path_excluded = criteria
            .excluded_path_segments
            .iter()
            .any(|seg| rooted.contains(seg.as_str()));
        let ext_included = criteria.included_extensions.contains(&entry.extension);
        let ext_excluded = criteria.excluded_extensions.contains(&entry.extension);

        if !path_included || path_excluded || !ext_included || ext_excluded {
            continue;
        }
        if entry.declared_size > criteria.max_entry_size {
            debug!(path = %entry.path, size = entry.declared_size, "Entry exceeds per-file size cap");
            continue;
        }

        cumulative += entry.declared_size;
        if cumulative > criteria.max_cumulative_size {
            debug!(path = %entry.path, cumulative, "Cumulative size cap crossed, rejecting entry");
            continue;
        }

        accepted.push(entry.clone());
    }

    debug!(
        accepted = accepted.len(),
        total = entries.len(),
        cumulative,
        "Filtered archive entries"
    );
    accepted
}
