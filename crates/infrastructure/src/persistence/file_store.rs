use hoard_dns_application::ports::SnapshotStore;
use hoard_dns_domain::{CacheSnapshot, DomainError};
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use tracing::{debug, info};

/// File-backed snapshot store: one JSON blob, overwritten wholesale.
///
/// Saves go through a sibling `.tmp` file followed by a rename, so a crash
/// mid-save can lose the latest update but never leaves a torn blob for the
/// next load.
pub struct FileSnapshotStore {
    path: PathBuf,
}

impl FileSnapshotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl SnapshotStore for FileSnapshotStore {
    fn load(&self) -> Result<CacheSnapshot, DomainError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!(path = %self.path.display(), "No cache snapshot on disk; starting empty");
                return Ok(CacheSnapshot::default());
            }
            Err(e) => {
                return Err(DomainError::SnapshotLoad(format!(
                    "{}: {e}",
                    self.path.display()
                )))
            }
        };

        let snapshot: CacheSnapshot = serde_json::from_slice(&bytes)
            .map_err(|e| DomainError::SnapshotLoad(format!("{}: {e}", self.path.display())))?;

        info!(
            path = %self.path.display(),
            entries = snapshot.len(),
            "Cache snapshot loaded"
        );
        Ok(snapshot)
    }

    fn save(&self, snapshot: &CacheSnapshot) -> Result<(), DomainError> {
        let blob = serde_json::to_vec(snapshot)
            .map_err(|e| DomainError::SnapshotSave(format!("serialize: {e}")))?;

        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, &blob)
            .map_err(|e| DomainError::SnapshotSave(format!("{}: {e}", tmp.display())))?;
        fs::rename(&tmp, &self.path)
            .map_err(|e| DomainError::SnapshotSave(format!("{}: {e}", self.path.display())))?;

        debug!(
            path = %self.path.display(),
            entries = snapshot.len(),
            bytes = blob.len(),
            "Cache snapshot saved"
        );
        Ok(())
    }
}
