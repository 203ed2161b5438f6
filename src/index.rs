use std::io::Cursor;

use thiserror::Error;

#[derive(Debug, Error)]
#[error("malformed repository archive: {0}")]
pub struct MalformedArchive(#[from] zip::result::ZipError);

/// One file record inside the downloaded archive, prior to extraction.
///
/// `declared_size` comes from the central directory and is trusted for
/// budget accounting; it is not checked against the actual decompressed
/// size until extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveEntry {
    pub path: String,
    pub extension: String,
    pub declared_size: u64,
}

/// Index all file entries in archive order without decompressing payloads.
///
/// Directory records are dropped, so every returned entry denotes a file.
/// The order is the archive's own central-directory order, never re-sorted.
pub fn index_entries(bytes: &[u8]) -> Result<Vec<ArchiveEntry>, MalformedArchive> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes))?;
    let mut entries = Vec::with_capacity(archive.len());
    for i in 0..archive.len() {
        let entry = archive.by_index_raw(i)?;
        if entry.is_dir() {
            continue;
        }
        let path = entry.name().to_string();
        entries.push(ArchiveEntry {
            extension: extension_of(&path),
            declared_size: entry.size(),
            path,
        });
    }
    Ok(entries)
}

/// Final `.`-suffix of the file name including the dot. Empty when the
/// name has no suffix; a leading dot alone (`.gitignore`) does not count.
fn extension_of(path: &str) -> String {
    let name = path.rsplit('/').next().unwrap_or(path);
    match name.rfind('.') {
        Some(idx) if idx > 0 => name[idx..].to_string(),
        _ => String::new(),
    }
}
