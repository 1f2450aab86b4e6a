//! The single state object a front end drives.
//!
//! Owns both engines and the current screen. The board and the outline
//! share nothing; the workspace only keeps them side by side.

use dragboard_core::AppConfig;
use serde::Serialize;

use crate::board::BoardStore;
use crate::drag::{BoardController, OutlineController};
use crate::outline::OutlineTree;
use crate::snapshot::{BoardSnapshot, OutlineSnapshot};
use crate::view::View;

/// What the current screen renders from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum ScreenSnapshot {
    Home { screens: Vec<View> },
    Kanban(BoardSnapshot),
    Tree(OutlineSnapshot),
}

#[derive(Debug, Clone)]
pub struct Workspace {
    board: BoardController,
    outline: OutlineController,
    view: View,
}

impl Workspace {
    pub fn new(board: BoardStore, outline: OutlineTree, view: View) -> Self {
        Self {
            board: BoardController::new(board),
            outline: OutlineController::new(outline),
            view,
        }
    }

    /// Demo board and outline, with the configured default titles.
    pub fn demo(config: &AppConfig, view: View) -> Self {
        Self::new(
            BoardStore::demo().with_default_card_title(config.effective_card_title()),
            OutlineTree::demo().with_default_label(config.effective_node_label()),
            view,
        )
    }

    pub fn view(&self) -> View {
        self.view
    }

    /// Returns whether the screen changed, so callers persist only then.
    pub fn switch_view(&mut self, view: View) -> bool {
        if self.view == view {
            return false;
        }
        tracing::debug!("Switching view {} -> {}", self.view, view);
        self.view = view;
        true
    }

    pub fn board(&self) -> &BoardController {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut BoardController {
        &mut self.board
    }

    pub fn outline(&self) -> &OutlineController {
        &self.outline
    }

    pub fn outline_mut(&mut self) -> &mut OutlineController {
        &mut self.outline
    }

    pub fn screen(&self) -> ScreenSnapshot {
        match self.view {
            View::Home => ScreenSnapshot::Home {
                screens: vec![View::Tree, View::Kanban],
            },
            View::Kanban => ScreenSnapshot::Kanban(self.board.store().snapshot()),
            View::Tree => ScreenSnapshot::Tree(self.outline.tree().snapshot()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_switch_view_reports_change() {
        let mut workspace = Workspace::demo(&AppConfig::default(), View::Home);
        assert!(!workspace.switch_view(View::Home));
        assert!(workspace.switch_view(View::Tree));
        assert_eq!(workspace.view(), View::Tree);
    }

    #[test]
    fn test_screen_follows_view() {
        let mut workspace = Workspace::demo(&AppConfig::default(), View::Kanban);
        match workspace.screen() {
            ScreenSnapshot::Kanban(board) => assert_eq!(board.cards.len(), 3),
            other => panic!("expected kanban screen, got {:?}", other),
        }

        workspace.switch_view(View::Tree);
        match workspace.screen() {
            ScreenSnapshot::Tree(outline) => assert_eq!(outline.len(), 1),
            other => panic!("expected tree screen, got {:?}", other),
        }
    }

    #[test]
    fn test_config_defaults_reach_engines() {
        let config = AppConfig {
            default_node_label: Some("Folder".to_string()),
            ..Default::default()
        };
        let mut workspace = Workspace::demo(&config, View::Tree);
        let id = workspace
            .outline_mut()
            .tree_mut()
            .add_child(crate::outline::Parent::Root);
        assert_eq!(workspace.outline().tree().get(&id).unwrap().label, "Folder");
    }
}
