use crate::store::atomic_writer::AtomicWriter;
use crate::traits::{PreferenceStore, PreferencesMetadata, FORMAT_VERSION};
use async_trait::async_trait;
use dragboard_core::{DragboardError, DragboardResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

/// JSON file-backed preference store
/// Every `set` rewrites the whole file atomically
#[derive(Debug)]
pub struct JsonPreferenceStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

/// On-disk layout of the preference file
#[derive(Debug, Serialize, Deserialize)]
struct JsonEnvelope {
    version: u32,
    metadata: PreferencesMetadata,
    data: BTreeMap<String, String>,
}

impl JsonPreferenceStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the stored map; a missing file is an empty map
    async fn read_data(&self) -> DragboardResult<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }

        let bytes = AtomicWriter::read_all(&self.path).await?;
        let envelope: JsonEnvelope = serde_json::from_slice(&bytes)
            .map_err(|e| DragboardError::Serialization(e.to_string()))?;

        if envelope.version != FORMAT_VERSION {
            return Err(DragboardError::Serialization(format!(
                "Unsupported preferences format version: {}",
                envelope.version
            )));
        }

        Ok(envelope.data)
    }
}

#[async_trait]
impl PreferenceStore for JsonPreferenceStore {
    async fn get(&self, key: &str) -> DragboardResult<Option<String>> {
        let mut data = self.read_data().await?;
        Ok(data.remove(key))
    }

    async fn set(&self, key: &str, value: &str) -> DragboardResult<()> {
        let _guard = self.write_lock.lock().await;

        let mut data = match self.read_data().await {
            Ok(data) => data,
            Err(e) => {
                tracing::warn!(
                    "Discarding unreadable preferences at {}: {}",
                    self.path.display(),
                    e
                );
                BTreeMap::new()
            }
        };
        data.insert(key.to_string(), value.to_string());

        let envelope = JsonEnvelope {
            version: FORMAT_VERSION,
            metadata: PreferencesMetadata::new(),
            data,
        };
        let json_bytes = serde_json::to_vec_pretty(&envelope)
            .map_err(|e| DragboardError::Serialization(e.to_string()))?;

        AtomicWriter::write_atomic(&self.path, &json_bytes).await?;

        tracing::info!("Saved preference {} to {}", key, self.path.display());
        Ok(())
    }

    async fn exists(&self) -> bool {
        self.path.exists()
    }
}
