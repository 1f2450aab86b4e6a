//! Board state store.
//!
//! Owns the ordered columns and the global card sequence. Display order of
//! the cards in one column is their relative order in the global sequence.
//! Every operation is total: unknown ids leave the state unchanged and are
//! reported through the `bool`/`Option` return value, never as an error.

use dragboard_core::config::DEFAULT_CARD_TITLE;
use dragboard_core::Id;

use crate::card::{Card, CardUpdate};
use crate::column::Column;
use crate::snapshot::BoardSnapshot;

#[derive(Debug, Clone)]
pub struct BoardStore {
    columns: Vec<Column>,
    cards: Vec<Card>,
    default_card_title: String,
}

impl Default for BoardStore {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardStore {
    pub fn new() -> Self {
        Self {
            columns: Vec::new(),
            cards: Vec::new(),
            default_card_title: DEFAULT_CARD_TITLE.to_string(),
        }
    }

    /// Title used by [`BoardStore::add_card`] when none is given.
    pub fn with_default_card_title(mut self, title: impl Into<String>) -> Self {
        self.default_card_title = title.into();
        self
    }

    pub fn from_snapshot(snapshot: BoardSnapshot) -> Self {
        Self {
            columns: snapshot.columns,
            cards: snapshot.cards,
            ..Self::new()
        }
    }

    /// Three columns and three cards, the board a fresh session starts with.
    pub fn demo() -> Self {
        Self::from_snapshot(BoardSnapshot {
            columns: vec![
                Column::with_id("todo", "To Do"),
                Column::with_id("in-progress", "In Progress"),
                Column::with_id("done", "Done"),
            ],
            cards: vec![
                Card::with_id(
                    "1",
                    "todo",
                    "Research competitors",
                    "Analyze top 3 competitors features",
                ),
                Card::with_id(
                    "2",
                    "todo",
                    "Draft technical specs",
                    "Outline API endpoints and DB schema",
                ),
                Card::with_id(
                    "3",
                    "in-progress",
                    "Setup repo",
                    "Initialize project with CRA and Typescript",
                ),
            ],
        })
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            columns: self.columns.clone(),
            cards: self.cards.clone(),
        }
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn column(&self, id: &Id) -> Option<&Column> {
        self.columns.iter().find(|c| &c.id == id)
    }

    pub fn card(&self, id: &Id) -> Option<&Card> {
        self.cards.iter().find(|c| &c.id == id)
    }

    /// Cards of one column in display order.
    pub fn cards_in_column(&self, column_id: &Id) -> Vec<&Card> {
        self.cards
            .iter()
            .filter(|c| &c.column_id == column_id)
            .collect()
    }

    /// Position of a card among the cards of its own column.
    pub fn index_in_column(&self, card_id: &Id) -> Option<usize> {
        let card = self.card(card_id)?;
        self.cards
            .iter()
            .filter(|c| c.column_id == card.column_id)
            .position(|c| &c.id == card_id)
    }

    pub fn add_column(&mut self, title: impl Into<String>) -> Id {
        let column = Column::new(title.into());
        let id = column.id.clone();
        self.columns.push(column);
        id
    }

    /// Remove a column together with every card it holds.
    pub fn delete_column(&mut self, id: &Id) -> bool {
        let before = self.columns.len();
        self.columns.retain(|c| &c.id != id);
        if self.columns.len() == before {
            tracing::debug!("delete_column: unknown column {}", id);
            return false;
        }
        self.cards.retain(|c| &c.column_id != id);
        true
    }

    pub fn rename_column(&mut self, id: &Id, title: impl Into<String>) -> bool {
        match self.columns.iter_mut().find(|c| &c.id == id) {
            Some(column) => {
                column.rename(title.into());
                true
            }
            None => {
                tracing::debug!("rename_column: unknown column {}", id);
                false
            }
        }
    }

    /// Append a card to the end of the global sequence.
    ///
    /// Only an invalid column id is rejected; the column is not required to
    /// exist. A missing or empty title falls back to the default card title.
    pub fn add_card(
        &mut self,
        column_id: Id,
        content: impl Into<String>,
        title: Option<String>,
    ) -> Option<Id> {
        if !column_id.is_valid() {
            tracing::debug!("add_card: invalid column id {:?}", column_id);
            return None;
        }
        if self.column(&column_id).is_none() {
            tracing::debug!("add_card: column {} does not exist yet", column_id);
        }

        let title = title
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| self.default_card_title.clone());
        let card = Card::new(column_id, title, content.into());
        let id = card.id.clone();
        self.cards.push(card);
        Some(id)
    }

    pub fn delete_card(&mut self, id: &Id) -> bool {
        let before = self.cards.len();
        self.cards.retain(|c| &c.id != id);
        let removed = self.cards.len() != before;
        if !removed {
            tracing::debug!("delete_card: unknown card {}", id);
        }
        removed
    }

    pub fn update_card(&mut self, id: &Id, updates: CardUpdate) -> bool {
        match self.cards.iter_mut().find(|c| &c.id == id) {
            Some(card) => {
                card.update(updates);
                true
            }
            None => {
                tracing::debug!("update_card: unknown card {}", id);
                false
            }
        }
    }

    /// Relocate a card into `to_column_id` at `index` among that column's
    /// cards. An index past the end appends.
    ///
    /// The rebuilt sequence lists the other columns' cards first, then the
    /// target column's cards.
    pub fn move_card(&mut self, card_id: &Id, to_column_id: &Id, index: usize) -> bool {
        let Some(pos) = self.cards.iter().position(|c| &c.id == card_id) else {
            tracing::debug!("move_card: unknown card {}", card_id);
            return false;
        };

        let mut card = self.cards.remove(pos);
        card.move_to_column(to_column_id.clone());

        let (mut column_cards, mut other_cards): (Vec<Card>, Vec<Card>) =
            std::mem::take(&mut self.cards)
                .into_iter()
                .partition(|c| &c.column_id == to_column_id);

        let index = index.min(column_cards.len());
        column_cards.insert(index, card);

        other_cards.extend(column_cards);
        self.cards = other_cards;
        tracing::debug!("Moved card {} to column {} at {}", card_id, to_column_id, index);
        true
    }

    /// Move `active_id` to the position `over_id` holds within `column_id`,
    /// shifting the cards in between by one.
    pub fn reorder_cards(&mut self, column_id: &Id, active_id: &Id, over_id: &Id) -> bool {
        let old_index = self
            .cards
            .iter()
            .filter(|c| &c.column_id == column_id)
            .position(|c| &c.id == active_id);
        let new_index = self
            .cards
            .iter()
            .filter(|c| &c.column_id == column_id)
            .position(|c| &c.id == over_id);

        let (Some(old_index), Some(new_index)) = (old_index, new_index) else {
            tracing::debug!(
                "reorder_cards: {} or {} not in column {}",
                active_id,
                over_id,
                column_id
            );
            return false;
        };
        if old_index == new_index {
            return false;
        }

        let (mut column_cards, mut other_cards): (Vec<Card>, Vec<Card>) =
            std::mem::take(&mut self.cards)
                .into_iter()
                .partition(|c| &c.column_id == column_id);

        let moved = column_cards.remove(old_index);
        column_cards.insert(new_index, moved);

        other_cards.extend(column_cards);
        self.cards = other_cards;
        true
    }

    /// Wholesale replacement of the card sequence.
    pub fn set_cards(&mut self, cards: Vec<Card>) {
        self.cards = cards;
    }
}
