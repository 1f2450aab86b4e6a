use dragboard_core::{AppConfig, DragboardError, DragboardResult};
use dragboard_domain::commands::Command;
use dragboard_domain::{BoardCommand, OutlineCommand, View, Workspace};
use dragboard_persistence::{JsonPreferenceStore, ViewPreference};
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

/// Demo workspace plus the preference file it remembers its screen in.
pub struct CliContext {
    pub workspace: Workspace,
    prefs: ViewPreference<JsonPreferenceStore>,
}

impl CliContext {
    pub async fn load(prefs_file: Option<PathBuf>, config: &AppConfig) -> DragboardResult<Self> {
        let path = prefs_file
            .or_else(|| config.effective_preferences_file())
            .ok_or_else(|| {
                DragboardError::Config(
                    "Cannot locate a data directory; pass --prefs FILE".to_string(),
                )
            })?;
        tracing::debug!("Using preferences file {}", path.display());

        let prefs = ViewPreference::new(JsonPreferenceStore::new(path));
        let view = prefs.load().await;
        tracing::info!("Restored view {}", view);

        Ok(Self {
            workspace: Workspace::demo(config, view),
            prefs,
        })
    }

    /// Switch screens, writing the preference only when the screen changed.
    pub async fn open(&mut self, view: View) -> DragboardResult<bool> {
        let changed = self.workspace.switch_view(view);
        if changed {
            self.prefs.save(view).await?;
        }
        Ok(changed)
    }

    pub async fn replay_board(&mut self, script: &Path) -> DragboardResult<usize> {
        let commands: Vec<BoardCommand> = read_script(script).await?;
        let board = self.workspace.board_mut();
        for command in &commands {
            tracing::debug!("{}", command.description());
            command.execute(board)?;
        }
        Ok(commands.len())
    }

    pub async fn replay_outline(&mut self, script: &Path) -> DragboardResult<usize> {
        let commands: Vec<OutlineCommand> = read_script(script).await?;
        let outline = self.workspace.outline_mut();
        for command in &commands {
            tracing::debug!("{}", command.description());
            command.execute(outline)?;
        }
        Ok(commands.len())
    }
}

async fn read_script<T: DeserializeOwned>(path: &Path) -> DragboardResult<Vec<T>> {
    let bytes = tokio::fs::read(path).await?;
    serde_json::from_slice(&bytes).map_err(|e| {
        DragboardError::Serialization(format!("{}: {}", path.display(), e))
    })
}
