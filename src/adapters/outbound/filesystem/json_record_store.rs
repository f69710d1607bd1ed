use crate::component_resolution::domain::ComponentRecord;
use crate::ports::outbound::RecordStore;
use crate::shared::error::ProviderError;
use crate::shared::security::{validate_file_size, validate_regular_file, MAX_FILE_SIZE};
use crate::shared::Result;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// JsonFileRecordStore adapter reading records from a JSON file
///
/// The file holds a JSON array of component records. It is re-read on
/// every `load_records` call; caching is the snapshot's job.
pub struct JsonFileRecordStore {
    path: PathBuf,
}

impl JsonFileRecordStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn decode(&self, bytes: &[u8]) -> std::result::Result<Vec<ComponentRecord>, ProviderError> {
        serde_json::from_slice(bytes).map_err(|e| ProviderError::RecordStoreDecodeError {
            path: self.path.clone(),
            details: e.to_string(),
        })
    }
}

#[async_trait]
impl RecordStore for JsonFileRecordStore {
    async fn load_records(&self) -> Result<Vec<ComponentRecord>> {
        if !self.path.exists() {
            return Err(ProviderError::RecordStoreNotFound {
                path: self.path.clone(),
            }
            .into());
        }

        // Security checks: no symlinks, regular file, bounded size
        let file_size = validate_regular_file(&self.path, "record store")?;
        validate_file_size(file_size, &self.path, MAX_FILE_SIZE)?;

        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|e| ProviderError::RecordStoreReadError {
                path: self.path.clone(),
                details: e.to_string(),
            })?;

        let records = self.decode(&bytes)?;
        tracing::debug!(
            path = %self.path.display(),
            records = records.len(),
            "Decoded record store"
        );
        Ok(records)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
