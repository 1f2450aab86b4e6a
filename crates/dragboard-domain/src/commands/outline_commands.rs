use super::Command;
use crate::drag::{DragEvent, DragHandler, OutlineController};
use crate::outline::Parent;
use dragboard_core::{DragboardResult, Id};
use serde::{Deserialize, Serialize};

/// One outline mutation, as read from a replay script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum OutlineCommand {
    /// `parent_id` absent or null adds at the root.
    AddChild {
        #[serde(default)]
        parent_id: Option<Id>,
    },
    DeleteNode {
        id: Id,
    },
    RenameNode {
        id: Id,
        label: String,
    },
    ToggleExpand {
        id: Id,
    },
    MoveNode {
        active_id: Id,
        over_id: Id,
    },
    Drag {
        event: DragEvent,
    },
}

impl Command<OutlineController> for OutlineCommand {
    fn execute(&self, controller: &mut OutlineController) -> DragboardResult<()> {
        match self {
            OutlineCommand::AddChild { parent_id } => {
                controller
                    .tree_mut()
                    .add_child(Parent::from(parent_id.clone()));
            }
            OutlineCommand::DeleteNode { id } => {
                controller.tree_mut().delete_node(id);
            }
            OutlineCommand::RenameNode { id, label } => {
                controller.tree_mut().rename_node(id, label.clone());
            }
            OutlineCommand::ToggleExpand { id } => {
                controller.tree_mut().toggle_expand(id);
            }
            OutlineCommand::MoveNode { active_id, over_id } => {
                controller.tree_mut().move_node(active_id, over_id);
            }
            OutlineCommand::Drag { event } => controller.dispatch(event),
        }
        Ok(())
    }

    fn description(&self) -> String {
        match self {
            OutlineCommand::AddChild { parent_id: None } => "Add root node".to_string(),
            OutlineCommand::AddChild {
                parent_id: Some(parent),
            } => format!("Add child under {}", parent),
            OutlineCommand::DeleteNode { id } => format!("Delete node {}", id),
            OutlineCommand::RenameNode { id, label } => {
                format!("Rename node {} to '{}'", id, label)
            }
            OutlineCommand::ToggleExpand { id } => format!("Toggle node {}", id),
            OutlineCommand::MoveNode { active_id, over_id } => {
                format!("Move node {} onto {}", active_id, over_id)
            }
            OutlineCommand::Drag { event } => format!("Drag event {:?}", event),
        }
    }
}
