use dragboard_core::DragboardResult;

pub mod board_commands;
pub mod outline_commands;

pub use board_commands::BoardCommand;
pub use outline_commands::OutlineCommand;

/// Trait for domain commands that mutate state
/// Commands represent intent and can be executed, queued, and replayed from scripts
pub trait Command<T>: Send + Sync {
    /// Execute this command against the target it mutates
    fn execute(&self, target: &mut T) -> DragboardResult<()>;

    /// Human-readable description of what this command does
    fn description(&self) -> String;
}
