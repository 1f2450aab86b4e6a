pub mod board;
pub mod card;
pub mod column;
pub mod commands;
pub mod drag;
pub mod outline;
pub mod snapshot;
pub mod view;
pub mod workspace;

pub use board::BoardStore;
pub use card::{Card, CardUpdate};
pub use column::Column;
pub use commands::{BoardCommand, Command, OutlineCommand};
pub use drag::{
    ActiveDrag, BoardController, DragEvent, DragHandler, DragKind, DragSession,
    OutlineController,
};
pub use outline::{OutlineEntry, OutlineNode, OutlineTree, Parent};
pub use snapshot::{BoardSnapshot, OutlineSnapshot};
pub use view::View;
pub use workspace::{ScreenSnapshot, Workspace};
