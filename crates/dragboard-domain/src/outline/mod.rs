mod node;
mod tree;

pub use node::OutlineNode;
pub use tree::{OutlineEntry, OutlineTree, Parent};
