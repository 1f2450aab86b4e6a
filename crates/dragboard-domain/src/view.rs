use dragboard_core::DragboardError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The screen currently shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum View {
    #[default]
    #[serde(rename = "home")]
    Home,
    #[serde(rename = "kanban tool")]
    Kanban,
    #[serde(rename = "tree tool")]
    Tree,
}

impl View {
    pub const ALL: [View; 3] = [View::Home, View::Kanban, View::Tree];

    /// Value written to the preference store.
    pub fn as_str(self) -> &'static str {
        match self {
            View::Home => "home",
            View::Kanban => "kanban tool",
            View::Tree => "tree tool",
        }
    }

    /// Interpret a stored preference. Missing or unrecognized values open
    /// the home screen.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                tracing::warn!("Unrecognized stored view '{}', showing home", raw);
                View::Home
            }),
            None => View::Home,
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for View {
    type Err = DragboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "home" => Ok(View::Home),
            "kanban tool" | "kanban" => Ok(View::Kanban),
            "tree tool" | "tree" => Ok(View::Tree),
            other => Err(DragboardError::Validation(format!("unknown view '{}'", other))),
        }
    }
}
