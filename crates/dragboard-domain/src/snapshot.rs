//! Point-in-time captures of engine state.
//!
//! Snapshots are what the presentation layer renders from and what the
//! CLI prints. They are plain serializable data with no behavior beyond
//! a few counting helpers.

use crate::outline::OutlineNode;
use crate::{Card, Column};
use serde::{Deserialize, Serialize};

/// Columns and cards of the board, in display order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    #[serde(default)]
    pub columns: Vec<Column>,

    #[serde(default)]
    pub cards: Vec<Card>,
}

impl BoardSnapshot {
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty() && self.cards.is_empty()
    }
}

/// The outline forest as nested nodes with fresh position labels.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutlineSnapshot {
    #[serde(default)]
    pub nodes: Vec<OutlineNode>,
}

impl OutlineSnapshot {
    /// Total node count across the forest.
    pub fn len(&self) -> usize {
        self.nodes.iter().map(OutlineNode::subtree_len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
