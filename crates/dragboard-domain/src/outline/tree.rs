//! Outline tree engine.
//!
//! Nodes live in a flat table keyed by id. Each entry keeps a pointer to
//! its parent and the ordered ids of its children, so structural edits are
//! pointer updates along one path instead of rebuilding nested vectors.
//! Position labels (`"2.3.1"`) are derived data and are recomputed by
//! [`OutlineTree::reindex`] after every insert, delete and move.

use std::collections::HashMap;

use dragboard_core::config::DEFAULT_NODE_LABEL;
use dragboard_core::{DragboardError, DragboardResult, Id};

use super::node::OutlineNode;
use crate::snapshot::OutlineSnapshot;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutlineEntry {
    pub id: Id,
    pub label: String,
    /// `None` for a leaf, `Some` for a branch (possibly empty).
    pub children: Option<Vec<Id>>,
    pub is_expanded: bool,
    pub is_loading: bool,
    pub parent_id: Option<Id>,
    pub position_label: String,
}

/// Insertion point for [`OutlineTree::add_child`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Parent {
    Root,
    Node(Id),
}

impl From<Option<Id>> for Parent {
    fn from(id: Option<Id>) -> Self {
        id.map_or(Parent::Root, Parent::Node)
    }
}

/// Resolved source and destination of a node move.
#[derive(Debug, Clone, PartialEq, Eq)]
struct MovePlan {
    source_parent: Option<Id>,
    source_index: usize,
    dest_parent: Option<Id>,
    dest_index: usize,
}

#[derive(Debug, Clone)]
pub struct OutlineTree {
    nodes: HashMap<Id, OutlineEntry>,
    roots: Vec<Id>,
    default_label: String,
}

impl Default for OutlineTree {
    fn default() -> Self {
        Self::new()
    }
}

impl OutlineTree {
    pub fn new() -> Self {
        Self {
            nodes: HashMap::new(),
            roots: Vec::new(),
            default_label: DEFAULT_NODE_LABEL.to_string(),
        }
    }

    /// Label given to nodes created by [`OutlineTree::add_child`].
    pub fn with_default_label(mut self, label: impl Into<String>) -> Self {
        self.default_label = label.into();
        self
    }

    /// Build a tree from nested nodes.
    ///
    /// Parent pointers and position labels are derived from the nesting;
    /// whatever the input carries for them is ignored. A node whose id was
    /// already seen is dropped together with its subtree.
    pub fn from_nodes(nodes: Vec<OutlineNode>) -> Self {
        let mut tree = Self::new();
        for node in nodes {
            if let Some(id) = tree.insert_subtree(node, None) {
                tree.roots.push(id);
            }
        }
        tree.reindex();
        tree
    }

    /// A single collapsed, empty "Documents" folder.
    pub fn demo() -> Self {
        let mut root = OutlineNode::branch("root-1", "Documents", Vec::new());
        root.position_label = "1".to_string();
        Self::from_nodes(vec![root])
    }

    fn insert_subtree(&mut self, node: OutlineNode, parent_id: Option<Id>) -> Option<Id> {
        if self.nodes.contains_key(&node.id) {
            tracing::warn!("Dropping duplicate outline node {}", node.id);
            return None;
        }

        let id = node.id.clone();
        // Reserve the id before descending so a child cannot reuse it.
        self.nodes.insert(
            id.clone(),
            OutlineEntry {
                id: id.clone(),
                label: node.label,
                children: None,
                is_expanded: node.is_expanded,
                is_loading: node.is_loading,
                parent_id,
                position_label: String::new(),
            },
        );

        let children = node.children.map(|children| {
            children
                .into_iter()
                .filter_map(|child| self.insert_subtree(child, Some(id.clone())))
                .collect::<Vec<_>>()
        });
        if let Some(entry) = self.nodes.get_mut(&id) {
            entry.children = children;
        }
        Some(id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn roots(&self) -> &[Id] {
        &self.roots
    }

    pub fn get(&self, id: &Id) -> Option<&OutlineEntry> {
        self.nodes.get(id)
    }

    pub fn children(&self, id: &Id) -> Option<&[Id]> {
        self.nodes.get(id)?.children.as_deref()
    }

    /// Nested copy of the node and its subtree, if present.
    pub fn find(&self, id: &Id) -> Option<OutlineNode> {
        let entry = self.nodes.get(id)?;
        Some(OutlineNode {
            id: entry.id.clone(),
            label: entry.label.clone(),
            children: entry.children.as_ref().map(|children| {
                children
                    .iter()
                    .filter_map(|child| self.find(child))
                    .collect()
            }),
            is_expanded: entry.is_expanded,
            is_loading: entry.is_loading,
            parent_id: entry.parent_id.clone(),
            position_label: entry.position_label.clone(),
        })
    }

    pub fn snapshot(&self) -> OutlineSnapshot {
        OutlineSnapshot {
            nodes: self.roots.iter().filter_map(|id| self.find(id)).collect(),
        }
    }

    /// Ids of the node and all of its descendants, depth-first pre-order.
    pub fn subtree_ids(&self, id: &Id) -> Vec<Id> {
        let mut ids = Vec::new();
        let mut stack = vec![id.clone()];
        while let Some(current) = stack.pop() {
            let Some(entry) = self.nodes.get(&current) else {
                continue;
            };
            if let Some(children) = &entry.children {
                stack.extend(children.iter().rev().cloned());
            }
            ids.push(current);
        }
        ids
    }

    /// True when `node` is `ancestor` or lies somewhere below it.
    pub fn is_within(&self, node: &Id, ancestor: &Id) -> bool {
        let mut current = Some(node.clone());
        while let Some(id) = current {
            if &id == ancestor {
                return true;
            }
            current = self.nodes.get(&id).and_then(|e| e.parent_id.clone());
        }
        false
    }

    fn siblings(&self, parent: Option<&Id>) -> Option<&Vec<Id>> {
        match parent {
            None => Some(&self.roots),
            Some(id) => self.nodes.get(id)?.children.as_ref(),
        }
    }

    fn siblings_mut(&mut self, parent: Option<&Id>) -> Option<&mut Vec<Id>> {
        match parent {
            None => Some(&mut self.roots),
            Some(id) => self.nodes.get_mut(id)?.children.as_mut(),
        }
    }

    /// Containing sequence (by owner, `None` = roots) and index of a node.
    fn locate(&self, id: &Id) -> Option<(Option<Id>, usize)> {
        let parent = self.nodes.get(id)?.parent_id.clone();
        let index = self
            .siblings(parent.as_ref())?
            .iter()
            .position(|sibling| sibling == id)?;
        Some((parent, index))
    }

    /// Flip the expanded flag of a branch. Leaves are not expandable.
    /// Collapsing keeps the children in place.
    pub fn toggle_expand(&mut self, id: &Id) -> bool {
        match self.nodes.get_mut(id) {
            Some(entry) if entry.children.is_some() => {
                entry.is_expanded = !entry.is_expanded;
                true
            }
            Some(_) => false,
            None => {
                tracing::debug!("toggle_expand: unknown node {}", id);
                false
            }
        }
    }

    /// Append a new empty branch under `parent` and return its id.
    ///
    /// The parent is expanded so the new node is visible. An unknown parent
    /// id falls back to appending at the root.
    pub fn add_child(&mut self, parent: Parent) -> Id {
        let parent_id = match parent {
            Parent::Root => None,
            Parent::Node(id) if self.nodes.contains_key(&id) => Some(id),
            Parent::Node(id) => {
                tracing::debug!("add_child: unknown parent {}, appending to root", id);
                None
            }
        };

        let id = Id::generate("node");
        self.nodes.insert(
            id.clone(),
            OutlineEntry {
                id: id.clone(),
                label: self.default_label.clone(),
                children: Some(Vec::new()),
                is_expanded: false,
                is_loading: false,
                parent_id: parent_id.clone(),
                position_label: String::new(),
            },
        );

        match parent_id.and_then(|p| self.nodes.get_mut(&p)) {
            Some(parent) => {
                parent.children.get_or_insert_with(Vec::new).push(id.clone());
                parent.is_expanded = true;
            }
            None => self.roots.push(id.clone()),
        }

        self.reindex();
        id
    }

    /// Remove a node and its entire subtree.
    pub fn delete_node(&mut self, id: &Id) -> bool {
        let Some((parent, index)) = self.locate(id) else {
            tracing::debug!("delete_node: unknown node {}", id);
            return false;
        };

        if let Some(siblings) = self.siblings_mut(parent.as_ref()) {
            siblings.remove(index);
        }
        for removed in self.subtree_ids(id) {
            self.nodes.remove(&removed);
        }

        self.reindex();
        true
    }

    pub fn rename_node(&mut self, id: &Id, label: impl Into<String>) -> bool {
        match self.nodes.get_mut(id) {
            Some(entry) => {
                entry.label = label.into();
                true
            }
            None => {
                tracing::debug!("rename_node: unknown node {}", id);
                false
            }
        }
    }

    /// Make `active_id` a sibling of `over_id`, taking the over node's place.
    ///
    /// The active node's subtree travels with it. Moving a node into its own
    /// subtree is rejected and leaves the tree unchanged.
    pub fn move_node(&mut self, active_id: &Id, over_id: &Id) -> bool {
        match self.plan_move(active_id, over_id) {
            Ok(plan) => {
                self.apply_move(active_id, plan);
                self.reindex();
                true
            }
            Err(e) => {
                tracing::debug!("move_node: {}", e);
                false
            }
        }
    }

    fn plan_move(&self, active_id: &Id, over_id: &Id) -> DragboardResult<MovePlan> {
        if active_id == over_id {
            return Err(DragboardError::InvalidMove(format!(
                "node {} dropped on itself",
                active_id
            )));
        }

        let (source_parent, source_index) = self
            .locate(active_id)
            .ok_or_else(|| DragboardError::NotFound(format!("node {}", active_id)))?;
        let (dest_parent, over_index) = self
            .locate(over_id)
            .ok_or_else(|| DragboardError::NotFound(format!("node {}", over_id)))?;

        if let Some(dest) = &dest_parent {
            if self.is_within(dest, active_id) {
                return Err(DragboardError::InvalidMove(format!(
                    "node {} cannot move inside its own subtree",
                    active_id
                )));
            }
        }

        // Within one sequence the over node shifts left once the active node
        // ahead of it is removed.
        let dest_index = if source_parent == dest_parent && source_index < over_index {
            over_index - 1
        } else {
            over_index
        };

        Ok(MovePlan {
            source_parent,
            source_index,
            dest_parent,
            dest_index,
        })
    }

    fn apply_move(&mut self, active_id: &Id, plan: MovePlan) {
        if let Some(siblings) = self.siblings_mut(plan.source_parent.as_ref()) {
            siblings.remove(plan.source_index);
        }
        if let Some(siblings) = self.siblings_mut(plan.dest_parent.as_ref()) {
            let index = plan.dest_index.min(siblings.len());
            siblings.insert(index, active_id.clone());
        }
        if let Some(entry) = self.nodes.get_mut(active_id) {
            entry.parent_id = plan.dest_parent;
        }
    }

    /// Recompute every position label from sibling rank and ancestry.
    pub fn reindex(&mut self) {
        let roots = self.roots.clone();
        self.label_sequence(&roots, None, "");
        tracing::trace!("Reindexed {} outline nodes", self.nodes.len());
    }

    fn label_sequence(&mut self, ids: &[Id], parent: Option<&Id>, prefix: &str) {
        for (rank, id) in ids.iter().enumerate() {
            let label = if prefix.is_empty() {
                (rank + 1).to_string()
            } else {
                format!("{}.{}", prefix, rank + 1)
            };

            let Some(entry) = self.nodes.get_mut(id) else {
                continue;
            };
            entry.position_label = label.clone();
            entry.parent_id = parent.cloned();
            let children = entry.children.clone();

            if let Some(children) = children {
                self.label_sequence(&children, Some(id), &label);
            }
        }
    }
}
