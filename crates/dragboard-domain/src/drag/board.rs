use dragboard_core::Id;

use super::{DragHandler, DragKind, DragSession};
use crate::board::BoardStore;
use crate::card::Card;

/// Owns the board store and routes drag gestures into it.
///
/// Hovering a card over another column moves it there immediately; the
/// drop only reorders within a column.
#[derive(Debug, Clone, Default)]
pub struct BoardController {
    store: BoardStore,
    session: DragSession,
    active_card: Option<Card>,
}

impl BoardController {
    pub fn new(store: BoardStore) -> Self {
        Self {
            store,
            session: DragSession::new(),
            active_card: None,
        }
    }

    pub fn store(&self) -> &BoardStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut BoardStore {
        &mut self.store
    }

    pub fn session(&self) -> &DragSession {
        &self.session
    }

    /// Card shown in the drag overlay while a card gesture is in flight.
    pub fn active_card(&self) -> Option<&Card> {
        self.active_card.as_ref()
    }

    fn is_card_drag(&self, dragged: &Id) -> bool {
        match self.session.kind_of(dragged) {
            Some(kind) => kind == DragKind::Card,
            None => self.store.card(dragged).is_some(),
        }
    }
}

impl DragHandler for BoardController {
    fn on_drag_start(&mut self, dragged: &Id, kind: DragKind) {
        self.session.start(dragged, kind);
        if kind == DragKind::Card {
            self.active_card = self.store.card(dragged).cloned();
        }
    }

    fn on_drag_over(&mut self, dragged: &Id, target: &Id, target_kind: DragKind) {
        if dragged == target || !self.is_card_drag(dragged) {
            return;
        }
        let Some(active_column) = self.store.card(dragged).map(|c| c.column_id.clone()) else {
            return;
        };

        match target_kind {
            DragKind::Card => {
                let Some(over_column) = self.store.card(target).map(|c| c.column_id.clone())
                else {
                    return;
                };
                if active_column != over_column {
                    let index = self.store.index_in_column(target).unwrap_or(0);
                    self.store.move_card(dragged, &over_column, index);
                }
            }
            DragKind::Column => {
                if &active_column != target {
                    let end = self.store.cards().len();
                    self.store.move_card(dragged, target, end);
                }
            }
            DragKind::Node => {
                tracing::debug!("Ignoring outline node {} as a board drop target", target);
            }
        }
    }

    fn on_drag_end(&mut self, dragged: &Id, target: Option<&Id>) {
        self.active_card = None;
        self.session.end(dragged);

        let Some(target) = target else {
            return;
        };
        let (Some(active), Some(over)) = (self.store.card(dragged), self.store.card(target))
        else {
            return;
        };
        if active.column_id == over.column_id {
            let column_id = active.column_id.clone();
            self.store.reorder_cards(&column_id, dragged, target);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drag::DragEvent;

    fn column_ids(controller: &BoardController, column: &str) -> Vec<String> {
        controller
            .store()
            .cards_in_column(&Id::from(column))
            .iter()
            .map(|c| c.id.to_string())
            .collect()
    }

    #[test]
    fn test_start_sets_overlay_card() {
        let mut controller = BoardController::new(BoardStore::demo());
        controller.on_drag_start(&Id::from("1"), DragKind::Card);
        assert_eq!(controller.active_card().unwrap().title, "Research competitors");

        controller.on_drag_end(&Id::from("1"), None);
        assert!(controller.active_card().is_none());
        assert!(!controller.session().is_dragging());
    }

    #[test]
    fn test_column_drag_has_no_overlay() {
        let mut controller = BoardController::new(BoardStore::demo());
        controller.on_drag_start(&Id::from("todo"), DragKind::Column);
        assert!(controller.active_card().is_none());
    }

    #[test]
    fn test_over_card_in_other_column_moves_to_its_index() {
        let mut controller = BoardController::new(BoardStore::demo());
        controller.on_drag_start(&Id::from("3"), DragKind::Card);
        controller.on_drag_over(&Id::from("3"), &Id::from("2"), DragKind::Card);

        assert_eq!(column_ids(&controller, "todo"), ["1", "3", "2"]);
        assert!(column_ids(&controller, "in-progress").is_empty());
    }

    #[test]
    fn test_over_column_appends() {
        let mut controller = BoardController::new(BoardStore::demo());
        controller.on_drag_start(&Id::from("1"), DragKind::Card);
        controller.on_drag_over(&Id::from("1"), &Id::from("in-progress"), DragKind::Column);

        assert_eq!(column_ids(&controller, "in-progress"), ["3", "1"]);
    }

    #[test]
    fn test_redundant_over_events_are_idempotent() {
        let mut controller = BoardController::new(BoardStore::demo());
        controller.on_drag_start(&Id::from("1"), DragKind::Card);
        for _ in 0..5 {
            controller.on_drag_over(&Id::from("1"), &Id::from("done"), DragKind::Column);
        }

        assert_eq!(column_ids(&controller, "done"), ["1"]);
        assert_eq!(controller.store().cards().len(), 3);
    }

    #[test]
    fn test_over_same_column_card_waits_for_drop() {
        let mut controller = BoardController::new(BoardStore::demo());
        controller.on_drag_start(&Id::from("2"), DragKind::Card);
        controller.on_drag_over(&Id::from("2"), &Id::from("1"), DragKind::Card);
        assert_eq!(column_ids(&controller, "todo"), ["1", "2"]);

        controller.on_drag_end(&Id::from("2"), Some(&Id::from("1")));
        assert_eq!(column_ids(&controller, "todo"), ["2", "1"]);
    }

    #[test]
    fn test_column_drag_does_not_move_cards() {
        let mut controller = BoardController::new(BoardStore::demo());
        let before = controller.store().snapshot();
        controller.on_drag_start(&Id::from("todo"), DragKind::Column);
        controller.on_drag_over(&Id::from("todo"), &Id::from("done"), DragKind::Column);
        controller.on_drag_end(&Id::from("todo"), Some(&Id::from("done")));
        assert_eq!(controller.store().snapshot(), before);
    }

    #[test]
    fn test_full_gesture_via_dispatch() {
        let mut controller = BoardController::new(BoardStore::demo());
        let events = [
            DragEvent::Start {
                dragged: Id::from("1"),
                kind: DragKind::Card,
            },
            DragEvent::Over {
                dragged: Id::from("1"),
                target: Id::from("3"),
                target_kind: DragKind::Card,
            },
            DragEvent::End {
                dragged: Id::from("1"),
                target: Some(Id::from("3")),
            },
        ];
        for event in &events {
            controller.dispatch(event);
        }

        // hovering moved it ahead of 3, dropping on 3 swaps them back
        assert_eq!(column_ids(&controller, "in-progress"), ["3", "1"]);
        assert_eq!(column_ids(&controller, "todo"), ["2"]);
    }

    #[test]
    fn test_drop_outside_any_target() {
        let mut controller = BoardController::new(BoardStore::demo());
        let before = controller.store().snapshot();
        controller.on_drag_start(&Id::from("1"), DragKind::Card);
        controller.on_drag_end(&Id::from("1"), None);
        assert_eq!(controller.store().snapshot(), before);
    }
}
