use super::Command;
use crate::card::{Card, CardUpdate};
use crate::drag::{BoardController, DragEvent, DragHandler};
use dragboard_core::{DragboardResult, Id};
use serde::{Deserialize, Serialize};

/// One board mutation, as read from a replay script.
///
/// Unknown ids are silent no-ops, so executing never fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum BoardCommand {
    AddColumn {
        title: String,
    },
    DeleteColumn {
        id: Id,
    },
    RenameColumn {
        id: Id,
        title: String,
    },
    AddCard {
        column_id: Id,
        #[serde(default)]
        content: String,
        #[serde(default)]
        title: Option<String>,
    },
    DeleteCard {
        id: Id,
    },
    UpdateCard {
        id: Id,
        #[serde(flatten)]
        updates: CardUpdate,
    },
    MoveCard {
        card_id: Id,
        to_column_id: Id,
        index: usize,
    },
    ReorderCards {
        column_id: Id,
        active_id: Id,
        over_id: Id,
    },
    SetCards {
        cards: Vec<Card>,
    },
    Drag {
        event: DragEvent,
    },
}

impl Command<BoardController> for BoardCommand {
    fn execute(&self, controller: &mut BoardController) -> DragboardResult<()> {
        if let BoardCommand::Drag { event } = self {
            controller.dispatch(event);
            return Ok(());
        }

        let store = controller.store_mut();
        match self.clone() {
            BoardCommand::AddColumn { title } => {
                store.add_column(title);
            }
            BoardCommand::DeleteColumn { id } => {
                store.delete_column(&id);
            }
            BoardCommand::RenameColumn { id, title } => {
                store.rename_column(&id, title);
            }
            BoardCommand::AddCard {
                column_id,
                content,
                title,
            } => {
                store.add_card(column_id, content, title);
            }
            BoardCommand::DeleteCard { id } => {
                store.delete_card(&id);
            }
            BoardCommand::UpdateCard { id, updates } => {
                store.update_card(&id, updates);
            }
            BoardCommand::MoveCard {
                card_id,
                to_column_id,
                index,
            } => {
                store.move_card(&card_id, &to_column_id, index);
            }
            BoardCommand::ReorderCards {
                column_id,
                active_id,
                over_id,
            } => {
                store.reorder_cards(&column_id, &active_id, &over_id);
            }
            BoardCommand::SetCards { cards } => store.set_cards(cards),
            BoardCommand::Drag { .. } => {}
        }
        Ok(())
    }

    fn description(&self) -> String {
        match self {
            BoardCommand::AddColumn { title } => format!("Add column: '{}'", title),
            BoardCommand::DeleteColumn { id } => format!("Delete column {}", id),
            BoardCommand::RenameColumn { id, title } => {
                format!("Rename column {} to '{}'", id, title)
            }
            BoardCommand::AddCard { column_id, .. } => format!("Add card to column {}", column_id),
            BoardCommand::DeleteCard { id } => format!("Delete card {}", id),
            BoardCommand::UpdateCard { id, .. } => format!("Update card {}", id),
            BoardCommand::MoveCard {
                card_id,
                to_column_id,
                index,
            } => format!(
                "Move card {} to column {} at {}",
                card_id, to_column_id, index
            ),
            BoardCommand::ReorderCards {
                column_id,
                active_id,
                over_id,
            } => format!(
                "Reorder card {} onto {} in column {}",
                active_id, over_id, column_id
            ),
            BoardCommand::SetCards { cards } => format!("Replace cards ({} total)", cards.len()),
            BoardCommand::Drag { event } => format!("Drag event {:?}", event),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::BoardStore;

    #[test]
    fn test_parse_script() {
        let script = r#"[
            {"op": "add_column", "title": "Review"},
            {"op": "move_card", "card_id": "1", "to_column_id": "done", "index": 0},
            {"op": "update_card", "id": "2", "title": "Specs v2"},
            {"op": "drag", "event": {"event": "start", "dragged": "3", "kind": "card"}}
        ]"#;
        let commands: Vec<BoardCommand> = serde_json::from_str(script).unwrap();

        assert_eq!(commands.len(), 4);
        assert_eq!(
            commands[2],
            BoardCommand::UpdateCard {
                id: Id::from("2"),
                updates: CardUpdate {
                    title: Some("Specs v2".to_string()),
                    ..Default::default()
                },
            }
        );
    }

    #[test]
    fn test_execute_sequence() {
        let mut controller = BoardController::new(BoardStore::demo());
        let commands = vec![
            BoardCommand::MoveCard {
                card_id: Id::from("1"),
                to_column_id: Id::from("done"),
                index: 0,
            },
            BoardCommand::AddCard {
                column_id: Id::from("done"),
                content: "Ship it".to_string(),
                title: None,
            },
            BoardCommand::DeleteColumn {
                id: Id::from("todo"),
            },
        ];
        for command in &commands {
            command.execute(&mut controller).unwrap();
        }

        let store = controller.store();
        assert_eq!(store.columns().len(), 2);
        let done = store.cards_in_column(&Id::from("done"));
        assert_eq!(done.len(), 2);
        assert_eq!(done[0].id, Id::from("1"));
        assert_eq!(done[1].title, "New Task");
    }

    #[test]
    fn test_unknown_ids_do_not_fail() {
        let mut controller = BoardController::new(BoardStore::demo());
        let command = BoardCommand::DeleteCard {
            id: Id::from("missing"),
        };
        assert!(command.execute(&mut controller).is_ok());
        assert_eq!(controller.store().cards().len(), 3);
    }

    #[test]
    fn test_description() {
        let command = BoardCommand::AddColumn {
            title: "Review".to_string(),
        };
        assert_eq!(command.description(), "Add column: 'Review'");
    }
}
