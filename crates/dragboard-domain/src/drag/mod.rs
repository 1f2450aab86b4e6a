//! Drag session adapter.
//!
//! Gesture detection and pointer collision live outside this crate. They
//! report each gesture as `start`, any number of `over`, then `end`, and a
//! [`DragHandler`] turns those into store or tree mutations.

mod board;
mod outline;
mod session;

pub use board::BoardController;
pub use outline::OutlineController;
pub use session::{ActiveDrag, DragSession};

use dragboard_core::Id;
use serde::{Deserialize, Serialize};

/// What is being dragged, or what is under the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DragKind {
    Card,
    Column,
    Node,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum DragEvent {
    Start {
        dragged: Id,
        kind: DragKind,
    },
    Over {
        dragged: Id,
        target: Id,
        target_kind: DragKind,
    },
    End {
        dragged: Id,
        #[serde(default)]
        target: Option<Id>,
    },
}

/// Receiver of drag lifecycle events.
///
/// `on_drag_over` fires repeatedly while hovering, often with the same ids,
/// so implementations must tolerate redundant calls.
pub trait DragHandler {
    fn on_drag_start(&mut self, dragged: &Id, kind: DragKind);

    fn on_drag_over(&mut self, dragged: &Id, target: &Id, target_kind: DragKind);

    fn on_drag_end(&mut self, dragged: &Id, target: Option<&Id>);

    fn dispatch(&mut self, event: &DragEvent) {
        match event {
            DragEvent::Start { dragged, kind } => self.on_drag_start(dragged, *kind),
            DragEvent::Over {
                dragged,
                target,
                target_kind,
            } => self.on_drag_over(dragged, target, *target_kind),
            DragEvent::End { dragged, target } => self.on_drag_end(dragged, target.as_ref()),
        }
    }
}
