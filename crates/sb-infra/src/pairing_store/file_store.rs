use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::warn;

use sb_core::ids::SessionId;
use sb_core::ports::{PairingStoreError, PairingStorePort};

/// The single persisted record of the last session this device joined.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct LocalPairingRecord {
    session_id: SessionId,
}

/// File-backed local pairing store.
///
/// One small JSON file, written atomically (write-then-rename) so a
/// crash mid-save leaves either the previous record or the new one,
/// never a torn file.
pub struct FilePairingStore {
    path: PathBuf,
}

impl FilePairingStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store under the platform data directory, where the device build
    /// keeps it.
    pub fn in_data_dir(app_name: &str) -> Result<Self, PairingStoreError> {
        let dir = dirs::data_dir()
            .ok_or_else(|| PairingStoreError::Storage("no platform data directory".to_string()))?;
        Ok(Self::new(dir.join(app_name).join("pairing.json")))
    }

    fn dir(&self) -> Option<&Path> {
        self.path.parent()
    }

    async fn ensure_parent_dir(&self) -> Result<(), PairingStoreError> {
        if let Some(dir) = self.dir() {
            fs::create_dir_all(dir)
                .await
                .map_err(|e| PairingStoreError::Storage(format!("create dir failed: {e}")))?;
        }
        Ok(())
    }

    async fn atomic_write(&self, content: &str) -> Result<(), PairingStoreError> {
        self.ensure_parent_dir().await?;

        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, content)
            .await
            .map_err(|e| PairingStoreError::Storage(format!("write temp record failed: {e}")))?;

        fs::rename(&tmp_path, &self.path)
            .await
            .map_err(|e| PairingStoreError::Storage(format!("rename record failed: {e}")))?;

        Ok(())
    }
}

#[async_trait]
impl PairingStorePort for FilePairingStore {
    async fn save(&self, session_id: &SessionId) -> Result<(), PairingStoreError> {
        let record = LocalPairingRecord {
            session_id: session_id.clone(),
        };
        let content = serde_json::to_string_pretty(&record)
            .map_err(|e| PairingStoreError::Storage(format!("serialize record failed: {e}")))?;
        self.atomic_write(&content).await
    }

    async fn load(&self) -> Result<Option<SessionId>, PairingStoreError> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(PairingStoreError::Storage(format!(
                    "read record failed: {e}"
                )))
            }
        };

        match serde_json::from_str::<LocalPairingRecord>(&content) {
            Ok(record) => Ok(Some(record.session_id)),
            Err(e) => {
                // A corrupt record is indistinguishable from no record;
                // the device re-pairs by scanning again.
                warn!(error = %e, path = %self.path.display(), "pairing record unreadable");
                Ok(None)
            }
        }
    }

    async fn clear(&self) -> Result<(), PairingStoreError> {
        match fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(PairingStoreError::Storage(format!(
                "remove record failed: {e}"
            ))),
        }
    }
}
