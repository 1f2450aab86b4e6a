use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::{DragboardError, DragboardResult};

pub const DEFAULT_CARD_TITLE: &str = "New Task";
pub const DEFAULT_NODE_LABEL: &str = "New Item";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub default_card_title: Option<String>,
    #[serde(default)]
    pub default_node_label: Option<String>,
    #[serde(default)]
    pub preferences_file: Option<PathBuf>,
}

impl AppConfig {
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(target_os = "macos")]
        {
            dirs::home_dir().map(|home| home.join(".config/dragboard/config.toml"))
        }
        #[cfg(target_os = "linux")]
        {
            dirs::config_dir().map(|config| config.join("dragboard/config.toml"))
        }
        #[cfg(target_os = "windows")]
        {
            dirs::config_dir().map(|config| config.join("dragboard\\config.toml"))
        }
        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        {
            None
        }
    }

    /// Load the user config, falling back to defaults when the file is
    /// missing or cannot be parsed.
    pub fn load() -> Self {
        if let Some(config_path) = Self::config_path() {
            if config_path.exists() {
                match std::fs::read_to_string(&config_path) {
                    Ok(content) => match Self::from_toml_str(&content) {
                        Ok(config) => return config,
                        Err(e) => tracing::warn!(
                            "Ignoring config at {}: {}",
                            config_path.display(),
                            e
                        ),
                    },
                    Err(e) => tracing::warn!(
                        "Could not read config at {}: {}",
                        config_path.display(),
                        e
                    ),
                }
            }
        }
        Self::default()
    }

    pub fn from_toml_str(content: &str) -> DragboardResult<Self> {
        toml::from_str(content).map_err(|e| DragboardError::Config(e.to_string()))
    }

    pub fn effective_card_title(&self) -> &str {
        self.default_card_title
            .as_deref()
            .filter(|t| !t.is_empty())
            .unwrap_or(DEFAULT_CARD_TITLE)
    }

    pub fn effective_node_label(&self) -> &str {
        self.default_node_label
            .as_deref()
            .filter(|l| !l.is_empty())
            .unwrap_or(DEFAULT_NODE_LABEL)
    }

    pub fn effective_preferences_file(&self) -> Option<PathBuf> {
        self.preferences_file.clone().or_else(|| {
            dirs::data_dir().map(|data| data.join("dragboard").join("preferences.json"))
        })
    }
}
