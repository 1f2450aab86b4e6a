use dragboard_core::Id;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: Id,
    pub column_id: Id,
    pub title: String,
    pub content: String,
}

/// Partial card update. `None` fields keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardUpdate {
    #[serde(default)]
    pub column_id: Option<Id>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

impl CardUpdate {
    pub fn is_empty(&self) -> bool {
        self.column_id.is_none() && self.title.is_none() && self.content.is_none()
    }
}

impl Card {
    pub fn new(column_id: Id, title: String, content: String) -> Self {
        Self {
            id: Id::generate("card"),
            column_id,
            title,
            content,
        }
    }

    pub fn with_id(
        id: impl Into<Id>,
        column_id: impl Into<Id>,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            column_id: column_id.into(),
            title: title.into(),
            content: content.into(),
        }
    }

    pub fn update(&mut self, updates: CardUpdate) {
        if let Some(column_id) = updates.column_id {
            self.column_id = column_id;
        }
        if let Some(title) = updates.title {
            self.title = title;
        }
        if let Some(content) = updates.content {
            self.content = content;
        }
    }

    pub fn move_to_column(&mut self, column_id: Id) {
        self.column_id = column_id;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_card_gets_generated_id() {
        let a = Card::new(Id::from("todo"), "A".to_string(), String::new());
        let b = Card::new(Id::from("todo"), "B".to_string(), String::new());
        assert_ne!(a.id, b.id);
        assert!(a.id.to_string().starts_with("card-"));
    }

    #[test]
    fn test_update_merges_only_given_fields() {
        let mut card = Card::with_id("1", "todo", "Research", "Analyze competitors");
        card.update(CardUpdate {
            title: Some("Research more".to_string()),
            ..Default::default()
        });

        assert_eq!(card.title, "Research more");
        assert_eq!(card.content, "Analyze competitors");
        assert_eq!(card.column_id, Id::from("todo"));
    }

    #[test]
    fn test_empty_update() {
        assert!(CardUpdate::default().is_empty());
        assert!(!CardUpdate {
            content: Some(String::new()),
            ..Default::default()
        }
        .is_empty());
    }
}
