use std::path::Path;

use tempfile::TempDir;
use tracing::{debug, warn};

/// Ephemeral, exclusively-owned working directory for one pipeline run.
///
/// The directory is removed exactly once: through [`ScratchArea::release`]
/// on the normal path, or through `Drop` when the pipeline unwinds early.
/// Removal failures are logged and swallowed so cleanup never masks the
/// error that caused the unwind.
#[derive(Debug)]
pub struct ScratchArea {
    dir: Option<TempDir>,
}

impl ScratchArea {
    /// Create a fresh, uniquely named scratch directory.
    pub fn acquire() -> std::io::Result<Self> {
        let dir = tempfile::Builder::new().prefix("claimcheck-").tempdir()?;
        debug!(path = %dir.path().display(), "Acquired scratch area");
        Ok(Self { dir: Some(dir) })
    }

    pub fn path(&self) -> &Path {
        self.dir
            .as_ref()
            .expect("scratch area accessed after release")
            .path()
    }

    /// Recursively remove the scratch directory.
    pub fn release(mut self) {
        self.remove();
    }

    fn remove(&mut self) {
        if let Some(dir) = self.dir.take() {
            let path = dir.path().to_path_buf();
            if let Err(e) = dir.close() {
                warn!(path = %path.display(), error = %e, "Failed to remove scratch area");
            } else {
                debug!(path = %path.display(), "Released scratch area");
            }
        }
    }
}

impl Drop for ScratchArea {
    fn drop(&mut self) {
        self.remove();
    }
}
