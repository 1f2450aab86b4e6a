use clap::{Args, Parser, Subcommand};
use dragboard_domain::View;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "dragboard")]
#[command(about = "Drag-and-drop kanban board and outline tree engines", long_about = None)]
#[command(
    version,
    long_version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_COMMIT_HASH"), ")")
)]
pub struct Cli {
    /// Path to the preferences file (or set DRAGBOARD_PREFS env var)
    #[arg(long, value_name = "FILE", env = "DRAGBOARD_PREFS", global = true)]
    pub prefs: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show or change the current screen
    View(ViewCommand),
    /// Kanban board operations
    Board(BoardCommand),
    /// Outline tree operations
    Outline(OutlineCommand),
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

// View commands
#[derive(Args)]
pub struct ViewCommand {
    #[command(subcommand)]
    pub action: ViewAction,
}

#[derive(Subcommand)]
pub enum ViewAction {
    /// Print the stored screen
    Show,
    /// Switch to another screen and remember it
    Set {
        /// home, kanban or tree
        view: View,
    },
}

// Board commands
#[derive(Args)]
pub struct BoardCommand {
    #[command(subcommand)]
    pub action: BoardAction,
}

#[derive(Subcommand)]
pub enum BoardAction {
    /// Print the board snapshot
    Show,
    /// Apply a JSON array of board commands to the demo board
    Replay {
        #[arg(value_name = "SCRIPT")]
        script: PathBuf,
    },
}

// Outline commands
#[derive(Args)]
pub struct OutlineCommand {
    #[command(subcommand)]
    pub action: OutlineAction,
}

#[derive(Subcommand)]
pub enum OutlineAction {
    /// Print the outline snapshot
    Show,
    /// Apply a JSON array of outline commands to the demo outline
    Replay {
        #[arg(value_name = "SCRIPT")]
        script: PathBuf,
    },
}
