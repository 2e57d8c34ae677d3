//! Card type

use super::ids::{CardId, ColumnId, LabelId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A card on the board.
///
/// `column_id` is the sole source of truth for membership — columns keep no
/// card list of their own. `order` is a dense zero-based rank among the cards
/// sharing a `column_id`; the engine keeps the rank set for every column equal
/// to `{0, 1, .., n-1}` after each mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub column_id: ColumnId,
    /// Labels attached to this card. Duplicate-free; entries always reference
    /// an existing label (deleting a label strips it from every card).
    #[serde(default)]
    pub label_ids: Vec<LabelId>,
    pub order: usize,
    pub created_at: DateTime<Utc>,
}

impl Card {
    /// Create a new card at rank 0 of the given column
    pub fn new(title: impl Into<String>, column_id: ColumnId) -> Self {
        Self {
            id: CardId::new(),
            title: title.into(),
            description: String::new(),
            column_id,
            label_ids: Vec::new(),
            order: 0,
            created_at: Utc::now(),
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the labels (replaces all existing labels)
    pub fn with_labels(mut self, label_ids: Vec<LabelId>) -> Self {
        self.label_ids = label_ids;
        self
    }

    /// Check whether this card carries the given label
    pub fn has_label(&self, label_id: &LabelId) -> bool {
        self.label_ids.contains(label_id)
    }
}
