use dragboard_core::Id;

use super::DragKind;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveDrag {
    pub id: Id,
    pub kind: DragKind,
}

/// Tracks the single in-flight gesture.
///
/// Callers serialize gestures; events for an id other than the active one
/// are still accepted and only logged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DragSession {
    active: Option<ActiveDrag>,
}

impl DragSession {
    pub fn new() -> Self {
        Self { active: None }
    }

    pub fn start(&mut self, id: &Id, kind: DragKind) {
        if let Some(previous) = &self.active {
            tracing::debug!("Drag of {} replaced by drag of {}", previous.id, id);
        }
        self.active = Some(ActiveDrag {
            id: id.clone(),
            kind,
        });
    }

    pub fn active(&self) -> Option<&ActiveDrag> {
        self.active.as_ref()
    }

    pub fn is_dragging(&self) -> bool {
        self.active.is_some()
    }

    /// Kind recorded at `start`, if `id` is the item being dragged.
    pub fn kind_of(&self, id: &Id) -> Option<DragKind> {
        self.active
            .as_ref()
            .filter(|active| &active.id == id)
            .map(|active| active.kind)
    }

    pub fn end(&mut self, id: &Id) -> Option<ActiveDrag> {
        match &self.active {
            Some(active) if &active.id != id => {
                tracing::debug!("Drag end for {} while {} is active", id, active.id)
            }
            None => tracing::debug!("Drag end for {} without a drag start", id),
            _ => {}
        }
        self.active.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_and_end() {
        let mut session = DragSession::new();
        assert!(!session.is_dragging());

        session.start(&Id::from("1"), DragKind::Card);
        assert!(session.is_dragging());
        assert_eq!(session.kind_of(&Id::from("1")), Some(DragKind::Card));
        assert_eq!(session.kind_of(&Id::from("2")), None);

        let ended = session.end(&Id::from("1")).unwrap();
        assert_eq!(ended.id, Id::from("1"));
        assert!(!session.is_dragging());
    }

    #[test]
    fn test_restart_replaces_active() {
        let mut session = DragSession::new();
        session.start(&Id::from("1"), DragKind::Card);
        session.start(&Id::from("todo"), DragKind::Column);
        assert_eq!(session.active().unwrap().kind, DragKind::Column);
    }

    #[test]
    fn test_end_without_start() {
        let mut session = DragSession::new();
        assert!(session.end(&Id::from("1")).is_none());
    }
}
