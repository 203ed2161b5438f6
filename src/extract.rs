use std::fs;
use std::io::{self, Cursor};
use std::path::{Component, Path};

use thiserror::Error;
use tracing::{debug, warn};

use crate::index::ArchiveEntry;

#[derive(Debug, Error)]
#[error("failed to materialise archive entries under {path}: {source}")]
pub struct ExtractionError {
    pub path: String,
    #[source]
    pub source: io::Error,
}

/// Materialise each accepted entry under `scratch_root` at its
/// archive-relative path.
///
/// Individual entries that cannot be read or written are logged and left
/// missing for the assembler to skip. Only scratch-level storage failures
/// (unable to create the mirror directories) abort the run.
pub fn extract_entries(
    bytes: &[u8],
    entries: &[ArchiveEntry],
    scratch_root: &Path,
) -> Result<(), ExtractionError> {
    let mut archive =
        zip::ZipArchive::new(Cursor::new(bytes)).map_err(|e| ExtractionError {
            path: scratch_root.display().to_string(),
            source: io::Error::other(e),
        })?;

    for entry in entries {
        if !is_enclosed(&entry.path) {
            warn!(path = %entry.path, "Skipping entry that would escape the scratch area");
            continue;
        }
        let target = scratch_root.join(&entry.path);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).map_err(|e| ExtractionError {
                path: parent.display().to_string(),
                source: e,
            })?;
        }
        match materialise(&mut archive, &entry.path, &target) {
            Ok(written) => debug!(path = %entry.path, bytes = written, "Extracted entry"),
            Err(e) => {
                warn!(path = %entry.path, error = %e, "Skipping entry that could not be extracted")
            }
        }
    }

    Ok(())
}

fn materialise(
    archive: &mut zip::ZipArchive<Cursor<&[u8]>>,
    name: &str,
    target: &Path,
) -> io::Result<u64> {
    let mut entry = archive.by_name(name).map_err(io::Error::other)?;
    let mut file = fs::File::create(target)?;
    io::copy(&mut entry, &mut file)
}

/// Archive paths are untrusted; anything absolute or parent-relative must
/// not be written through.
fn is_enclosed(path: &str) -> bool {
    let path = Path::new(path);
    !path.is_absolute()
        && path
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
}
