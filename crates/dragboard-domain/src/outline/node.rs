use dragboard_core::Id;
use serde::{Deserialize, Serialize};

/// Nested view of one outline node and its subtree.
///
/// `children: None` is a true leaf. `Some(vec![])` is a branch that is
/// currently empty and still gets an expand affordance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutlineNode {
    pub id: Id,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<OutlineNode>>,
    #[serde(default)]
    pub is_expanded: bool,
    #[serde(default)]
    pub is_loading: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<Id>,
    #[serde(default)]
    pub position_label: String,
}

impl OutlineNode {
    pub fn leaf(id: impl Into<Id>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            children: None,
            is_expanded: false,
            is_loading: false,
            parent_id: None,
            position_label: String::new(),
        }
    }

    pub fn branch(id: impl Into<Id>, label: impl Into<String>, children: Vec<OutlineNode>) -> Self {
        Self {
            children: Some(children),
            ..Self::leaf(id, label)
        }
    }

    pub fn is_branch(&self) -> bool {
        self.children.is_some()
    }

    /// This node plus all of its descendants.
    pub fn subtree_len(&self) -> usize {
        1 + self
            .children
            .iter()
            .flatten()
            .map(OutlineNode::subtree_len)
            .sum::<usize>()
    }
}
