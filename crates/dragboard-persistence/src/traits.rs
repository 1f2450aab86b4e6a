use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dragboard_core::DragboardResult;
use serde::{Deserialize, Serialize};

/// Current on-disk format of the preference file.
pub const FORMAT_VERSION: u32 = 1;

/// Metadata written alongside the preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferencesMetadata {
    /// Version of the persistence format
    pub format_version: u32,
    /// When this data was saved
    pub saved_at: DateTime<Utc>,
}

impl PreferencesMetadata {
    pub fn new() -> Self {
        Self {
            format_version: FORMAT_VERSION,
            saved_at: Utc::now(),
        }
    }
}

impl Default for PreferencesMetadata {
    fn default() -> Self {
        Self::new()
    }
}

/// Client-side key-value preference store
/// Implementations decide where the values live (file, memory, ...)
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PreferenceStore: Send + Sync {
    /// Read a value, `None` when the key was never written
    async fn get(&self, key: &str) -> DragboardResult<Option<String>>;

    /// Write a value, replacing any previous one
    async fn set(&self, key: &str, value: &str) -> DragboardResult<()>;

    /// Check whether anything has been persisted yet
    async fn exists(&self) -> bool;
}
