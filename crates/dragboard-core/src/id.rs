//! Opaque identifiers shared by columns, cards and outline nodes.
//!
//! An [`Id`] is either an integer or a string token. Both forms serialize
//! untagged, so `1` and `"todo"` are accepted in JSON documents.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Id {
    Int(i64),
    Str(String),
}

impl Id {
    /// Generate a fresh, process-unique string id such as `card-3f2a...`.
    pub fn generate(prefix: &str) -> Self {
        Id::Str(format!("{}-{}", prefix, Uuid::new_v4().simple()))
    }

    /// A string id must contain something other than whitespace.
    /// Integer ids are always valid.
    pub fn is_valid(&self) -> bool {
        match self {
            Id::Int(_) => true,
            Id::Str(s) => !s.trim().is_empty(),
        }
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Id::Int(n) => write!(f, "{}", n),
            Id::Str(s) => f.write_str(s),
        }
    }
}

impl From<&str> for Id {
    fn from(s: &str) -> Self {
        Id::Str(s.to_string())
    }
}

impl From<String> for Id {
    fn from(s: String) -> Self {
        Id::Str(s)
    }
}

impl From<i64> for Id {
    fn from(n: i64) -> Self {
        Id::Int(n)
    }
}

impl FromStr for Id {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Id::Str(s.to_string()))
    }
}
