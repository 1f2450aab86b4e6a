use crate::traits::PreferenceStore;
use async_trait::async_trait;
use dragboard_core::DragboardResult;
use parking_lot::Mutex;
use std::collections::HashMap;

/// In-process preference store for tests and embedding
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PreferenceStore for MemoryPreferenceStore {
    async fn get(&self, key: &str) -> DragboardResult<Option<String>> {
        Ok(self.values.lock().get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> DragboardResult<()> {
        self.values.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn exists(&self) -> bool {
        !self.values.lock().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_set_and_get() {
        let store = MemoryPreferenceStore::new();
        assert!(!store.exists().await);
        assert_eq!(store.get("currentView").await.unwrap(), None);

        store.set("currentView", "tree tool").await.unwrap();
        assert!(store.exists().await);
        assert_eq!(
            store.get("currentView").await.unwrap().as_deref(),
            Some("tree tool")
        );
    }
}
