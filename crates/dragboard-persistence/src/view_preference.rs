//! Persisted choice of which screen the workspace shows.

use crate::traits::PreferenceStore;
use dragboard_core::DragboardResult;
use dragboard_domain::View;

/// Key under which the current view is stored.
pub const CURRENT_VIEW_KEY: &str = "currentView";

pub struct ViewPreference<S: PreferenceStore> {
    store: S,
}

impl<S: PreferenceStore> ViewPreference<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// The stored view, or `Home` when nothing usable is stored.
    /// Read failures are logged and never surface.
    pub async fn load(&self) -> View {
        match self.store.get(CURRENT_VIEW_KEY).await {
            Ok(stored) => View::from_stored(stored.as_deref()),
            Err(e) => {
                tracing::warn!("Failed to read view preference: {}", e);
                View::Home
            }
        }
    }

    pub async fn save(&self, view: View) -> DragboardResult<()> {
        tracing::debug!("Persisting view {}", view);
        self.store.set(CURRENT_VIEW_KEY, view.as_str()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryPreferenceStore;
    use crate::traits::MockPreferenceStore;
    use dragboard_core::DragboardError;
    use mockall::predicate::eq;

    #[tokio::test]
    async fn test_load_defaults_to_home() {
        let prefs = ViewPreference::new(MemoryPreferenceStore::new());
        assert_eq!(prefs.load().await, View::Home);
    }

    #[tokio::test]
    async fn test_save_then_load() {
        let prefs = ViewPreference::new(MemoryPreferenceStore::new());
        prefs.save(View::Tree).await.unwrap();
        assert_eq!(prefs.load().await, View::Tree);
        assert_eq!(
            prefs.store().get(CURRENT_VIEW_KEY).await.unwrap().as_deref(),
            Some("tree tool")
        );
    }

    #[tokio::test]
    async fn test_unknown_value_loads_home() {
        let mut store = MockPreferenceStore::new();
        store
            .expect_get()
            .with(eq(CURRENT_VIEW_KEY))
            .returning(|_| Ok(Some("settings".to_string())));

        let prefs = ViewPreference::new(store);
        assert_eq!(prefs.load().await, View::Home);
    }

    #[tokio::test]
    async fn test_read_failure_loads_home() {
        let mut store = MockPreferenceStore::new();
        store
            .expect_get()
            .returning(|_| Err(DragboardError::Serialization("bad".to_string())));

        let prefs = ViewPreference::new(store);
        assert_eq!(prefs.load().await, View::Home);
    }

    #[tokio::test]
    async fn test_save_writes_view_string() {
        let mut store = MockPreferenceStore::new();
        store
            .expect_set()
            .with(eq(CURRENT_VIEW_KEY), eq("kanban tool"))
            .times(1)
            .returning(|_, _| Ok(()));

        let prefs = ViewPreference::new(store);
        prefs.save(View::Kanban).await.unwrap();
    }

    #[tokio::test]
    async fn test_save_propagates_errors() {
        let mut store = MockPreferenceStore::new();
        store
            .expect_set()
            .returning(|_, _| Err(DragboardError::Config("read-only".to_string())));

        let prefs = ViewPreference::new(store);
        assert!(prefs.save(View::Home).await.is_err());
    }
}
