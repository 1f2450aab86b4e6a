use dragboard_core::Id;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub id: Id,
    pub title: String,
}

impl Column {
    pub fn new(title: String) -> Self {
        Self {
            id: Id::generate("col"),
            title,
        }
    }

    pub fn with_id(id: impl Into<Id>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }

    pub fn rename(&mut self, title: String) {
        self.title = title;
    }
}
