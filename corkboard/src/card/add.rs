//! AddCard operation

use crate::mutation::Mutation;
use crate::types::{Board, Card, CardId, ColumnId, LabelId};
use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Add a new card at the end of a column.
///
/// The card's `order` is the count of cards already in the column, so the
/// column's ranks stay dense. Supplied label ids are de-duplicated and ids
/// that reference no existing label are dropped. Returns `None` with the
/// board unchanged when the target column is absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddCard {
    /// The card title
    pub title: String,
    /// The card description
    pub description: String,
    /// The column the card is created in
    pub column_id: ColumnId,
    /// Labels to attach
    pub label_ids: Vec<LabelId>,
}

impl AddCard {
    /// Create a new AddCard operation
    pub fn new(title: impl Into<String>, column_id: impl Into<ColumnId>) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            column_id: column_id.into(),
            label_ids: Vec::new(),
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the labels to attach
    pub fn with_labels(mut self, label_ids: Vec<LabelId>) -> Self {
        self.label_ids = label_ids;
        self
    }
}

/// De-duplicate and keep only ids that reference an existing label.
pub(crate) fn sanitize_label_ids(board: &Board, requested: &[LabelId]) -> Vec<LabelId> {
    let mut label_ids = Vec::new();
    for id in requested {
        if board.find_label(id).is_some() && !label_ids.contains(id) {
            label_ids.push(id.clone());
        }
    }
    label_ids
}

impl Mutation for AddCard {
    type Output = Option<Card>;

    fn apply(&self, board: &Board) -> (Option<Card>, Board) {
        if board.find_column(&self.column_id).is_none() {
            return (None, board.clone());
        }

        let mut next = board.clone();

        let card = Card {
            id: CardId::new(),
            title: self.title.clone(),
            description: self.description.clone(),
            column_id: self.column_id.clone(),
            label_ids: sanitize_label_ids(&next, &self.label_ids),
            order: next.column_card_count(&self.column_id),
            created_at: Utc::now(),
        };

        next.cards.push(card.clone());
        (Some(card), next)
    }
}
