//! Board-level types: Board, Column, Label

use super::card::Card;
use super::ids::{CardId, ColumnId, LabelId};
use serde::{Deserialize, Serialize};

/// A column defines a workflow stage.
///
/// `order` is a dense zero-based rank unique across all columns; it determines
/// display sequence.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Column {
    pub id: ColumnId,
    pub title: String,
    pub order: usize,
    /// 6-character hex color code without `#`
    pub color: String,
}

impl Column {
    /// Create a new column at rank 0 with an auto-assigned color
    pub fn new(title: impl Into<String>) -> Self {
        let title = title.into();
        let color = crate::auto_color::auto_color(&title).to_string();
        Self {
            id: ColumnId::new(),
            title,
            order: 0,
            color,
        }
    }

    /// Set an explicit color
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }
}

/// A label categorizes cards.
///
/// Labels have a stable `id` and a mutable `name`/`color`. Color defaults to
/// a deterministic auto-color based on the name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Label {
    pub id: LabelId,
    pub name: String,
    /// 6-character hex color code without `#`
    pub color: String,
}

impl Label {
    /// Create a new label with an auto-assigned color
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let color = crate::auto_color::auto_color(&name).to_string();
        Self {
            id: LabelId::new(),
            name,
            color,
        }
    }

    /// Set an explicit color
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }
}

/// The full board snapshot: the aggregate of columns, cards, and labels.
///
/// This is the unit of persistence and the unit mutations treat atomically.
/// Mutations never modify a snapshot in place — they produce a new one
/// (see [`Mutation`](crate::Mutation)).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Board {
    #[serde(default)]
    pub columns: Vec<Column>,
    #[serde(default)]
    pub cards: Vec<Card>,
    #[serde(default)]
    pub labels: Vec<Label>,
}

impl Board {
    /// Create an empty board
    pub fn new() -> Self {
        Self::default()
    }

    /// Find a column by id
    pub fn find_column(&self, id: &ColumnId) -> Option<&Column> {
        self.columns.iter().find(|c| &c.id == id)
    }

    /// Find a column by id (mutable)
    pub fn find_column_mut(&mut self, id: &ColumnId) -> Option<&mut Column> {
        self.columns.iter_mut().find(|c| &c.id == id)
    }

    /// Find a card by id
    pub fn find_card(&self, id: &CardId) -> Option<&Card> {
        self.cards.iter().find(|c| &c.id == id)
    }

    /// Find a card by id (mutable)
    pub fn find_card_mut(&mut self, id: &CardId) -> Option<&mut Card> {
        self.cards.iter_mut().find(|c| &c.id == id)
    }

    /// Find a label by id
    pub fn find_label(&self, id: &LabelId) -> Option<&Label> {
        self.labels.iter().find(|l| &l.id == id)
    }

    /// Find a label by id (mutable)
    pub fn find_label_mut(&mut self, id: &LabelId) -> Option<&mut Label> {
        self.labels.iter_mut().find(|l| &l.id == id)
    }

    /// All columns sorted ascending by `order` — the only queried ordering
    /// contract for columns
    pub fn columns_ordered(&self) -> Vec<&Column> {
        let mut columns: Vec<&Column> = self.columns.iter().collect();
        columns.sort_by_key(|c| c.order);
        columns
    }

    /// Cards belonging to the given column, sorted ascending by `order`.
    /// Used both as a query and as a building block for the move algorithm.
    pub fn cards_in_column(&self, column_id: &ColumnId) -> Vec<&Card> {
        let mut cards: Vec<&Card> = self
            .cards
            .iter()
            .filter(|c| &c.column_id == column_id)
            .collect();
        cards.sort_by_key(|c| c.order);
        cards
    }

    /// Number of cards currently in the given column
    pub fn column_card_count(&self, column_id: &ColumnId) -> usize {
        self.cards
            .iter()
            .filter(|c| &c.column_id == column_id)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_auto_color() {
        let col = Column::new("To Do");
        assert_eq!(col.color.len(), 6);
        assert!(col.color.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_column_with_color() {
        let col = Column::new("Done").with_color("0e8a16");
        assert_eq!(col.color, "0e8a16");
    }

    #[test]
    fn test_label_creation() {
        let label = Label::new("bug");
        assert_eq!(label.name, "bug");
        assert_eq!(label.id.as_str().len(), 26);
    }

    #[test]
    fn test_find_helpers() {
        let mut board = Board::new();
        let col = Column::new("Todo");
        let card = Card::new("Task", col.id.clone());
        let label = Label::new("bug");
        board.columns.push(col.clone());
        board.cards.push(card.clone());
        board.labels.push(label.clone());

        assert_eq!(board.find_column(&col.id), Some(&col));
        assert_eq!(board.find_card(&card.id).map(|c| &c.id), Some(&card.id));
        assert_eq!(board.find_label(&label.id), Some(&label));
        assert!(board.find_column(&ColumnId::new()).is_none());
    }

    #[test]
    fn test_columns_ordered_sorts_by_order() {
        let mut board = Board::new();
        let mut a = Column::new("A");
        a.order = 2;
        let mut b = Column::new("B");
        b.order = 0;
        let mut c = Column::new("C");
        c.order = 1;
        board.columns = vec![a, b, c];

        let titles: Vec<&str> = board
            .columns_ordered()
            .iter()
            .map(|c| c.title.as_str())
            .collect();
        assert_eq!(titles, vec!["B", "C", "A"]);
    }

    #[test]
    fn test_cards_in_column_filters_and_sorts() {
        let mut board = Board::new();
        let col = Column::new("Todo");
        let other = Column::new("Done");
        let mut first = Card::new("first", col.id.clone());
        first.order = 0;
        let mut second = Card::new("second", col.id.clone());
        second.order = 1;
        let mut elsewhere = Card::new("elsewhere", other.id.clone());
        elsewhere.order = 0;
        board.columns = vec![col.clone(), other];
        board.cards = vec![second, elsewhere, first];

        let titles: Vec<&str> = board
            .cards_in_column(&col.id)
            .iter()
            .map(|c| c.title.as_str())
            .collect();
        assert_eq!(titles, vec!["first", "second"]);
        assert_eq!(board.column_card_count(&col.id), 2);
    }

    #[test]
    fn test_board_serialization() {
        let mut board = Board::new();
        board.columns.push(Column::new("Todo"));
        board.labels.push(Label::new("bug"));
        let json = serde_json::to_string_pretty(&board).unwrap();
        let parsed: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, board);
    }
}
