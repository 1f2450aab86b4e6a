use dragboard_core::Id;

use super::{DragHandler, DragKind, DragSession};
use crate::outline::OutlineTree;

/// Owns the outline tree. Only the drop mutates it.
#[derive(Debug, Clone, Default)]
pub struct OutlineController {
    tree: OutlineTree,
    session: DragSession,
}

impl OutlineController {
    pub fn new(tree: OutlineTree) -> Self {
        Self {
            tree,
            session: DragSession::new(),
        }
    }

    pub fn tree(&self) -> &OutlineTree {
        &self.tree
    }

    pub fn tree_mut(&mut self) -> &mut OutlineTree {
        &mut self.tree
    }

    pub fn session(&self) -> &DragSession {
        &self.session
    }
}

impl DragHandler for OutlineController {
    fn on_drag_start(&mut self, dragged: &Id, kind: DragKind) {
        self.session.start(dragged, kind);
    }

    fn on_drag_over(&mut self, dragged: &Id, target: &Id, _target_kind: DragKind) {
        tracing::trace!("Outline node {} over {}", dragged, target);
    }

    fn on_drag_end(&mut self, dragged: &Id, target: Option<&Id>) {
        self.session.end(dragged);
        match target {
            Some(target) if target != dragged => {
                self.tree.move_node(dragged, target);
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outline::OutlineNode;

    fn controller() -> OutlineController {
        OutlineController::new(OutlineTree::from_nodes(vec![
            OutlineNode::branch("a", "A", vec![OutlineNode::leaf("a1", "A1")]),
            OutlineNode::leaf("b", "B"),
        ]))
    }

    #[test]
    fn test_hover_does_not_mutate() {
        let mut controller = controller();
        let before = controller.tree().snapshot();
        controller.on_drag_start(&Id::from("b"), DragKind::Node);
        controller.on_drag_over(&Id::from("b"), &Id::from("a1"), DragKind::Node);
        assert_eq!(controller.tree().snapshot(), before);
        assert!(controller.session().is_dragging());
    }

    #[test]
    fn test_drop_reparents() {
        let mut controller = controller();
        controller.on_drag_start(&Id::from("b"), DragKind::Node);
        controller.on_drag_end(&Id::from("b"), Some(&Id::from("a1")));

        let b = controller.tree().get(&Id::from("b")).unwrap();
        assert_eq!(b.parent_id, Some(Id::from("a")));
        assert_eq!(b.position_label, "1.1");
        assert!(!controller.session().is_dragging());
    }

    #[test]
    fn test_drop_on_self_or_nothing_is_noop() {
        let mut controller = controller();
        let before = controller.tree().snapshot();
        controller.on_drag_end(&Id::from("b"), Some(&Id::from("b")));
        controller.on_drag_end(&Id::from("b"), None);
        assert_eq!(controller.tree().snapshot(), before);
    }
}
