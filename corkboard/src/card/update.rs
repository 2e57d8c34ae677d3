//! UpdateCard operation

use crate::card::add::sanitize_label_ids;
use crate::mutation::Mutation;
use crate::types::{Board, Card, CardId, LabelId};
use serde::{Deserialize, Serialize};

/// Update an existing card's fields.
///
/// Only supplied fields change. `column_id` and `order` are deliberately not
/// updatable here — [`MoveCard`](crate::card::MoveCard) is the only re-homing
/// and re-ordering path, which is what keeps rank density out of callers'
/// hands. Returns `None` with the board unchanged when the id is absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateCard {
    /// The card ID to update
    pub id: CardId,
    /// New title
    pub title: Option<String>,
    /// New description
    pub description: Option<String>,
    /// Replace all labels
    pub label_ids: Option<Vec<LabelId>>,
}

impl UpdateCard {
    /// Create a new UpdateCard operation
    pub fn new(id: impl Into<CardId>) -> Self {
        Self {
            id: id.into(),
            title: None,
            description: None,
            label_ids: None,
        }
    }

    /// Set the title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the labels (replaces all existing labels)
    pub fn with_labels(mut self, label_ids: Vec<LabelId>) -> Self {
        self.label_ids = Some(label_ids);
        self
    }
}

impl Mutation for UpdateCard {
    type Output = Option<Card>;

    fn apply(&self, board: &Board) -> (Option<Card>, Board) {
        let mut next = board.clone();

        let label_ids = self
            .label_ids
            .as_ref()
            .map(|requested| sanitize_label_ids(&next, requested));

        let Some(card) = next.find_card_mut(&self.id) else {
            return (None, next);
        };

        if let Some(title) = &self.title {
            card.title = title.clone();
        }
        if let Some(description) = &self.description {
            card.description = description.clone();
        }
        if let Some(label_ids) = label_ids {
            card.label_ids = label_ids;
        }

        let updated = card.clone();
        (Some(updated), next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::AddCard;
    use crate::column::AddColumn;
    use crate::label::AddLabel;

    fn board_with_card() -> (Card, Board) {
        let board = Board::new();
        let (todo, board) = AddColumn::new("Todo").apply(&board);
        let (card, board) = AddCard::new("Original", todo.id).apply(&board);
        (card.unwrap(), board)
    }

    #[test]
    fn test_update_card_title_and_description() {
        let (card, board) = board_with_card();

        let (updated, board) = UpdateCard::new(card.id.clone())
            .with_title("Renamed")
            .with_description("Now with details")
            .apply(&board);

        let updated = updated.unwrap();
        assert_eq!(updated.title, "Renamed");
        assert_eq!(updated.description, "Now with details");
        // Position is untouched
        assert_eq!(updated.column_id, card.column_id);
        assert_eq!(updated.order, card.order);
        assert_eq!(board.find_card(&card.id).unwrap().title, "Renamed");
    }

    #[test]
    fn test_update_card_replaces_labels() {
        let (card, board) = board_with_card();
        let (bug, board) = AddLabel::new("bug").apply(&board);

        let (updated, _) = UpdateCard::new(card.id.clone())
            .with_labels(vec![bug.id.clone(), LabelId::new(), bug.id.clone()])
            .apply(&board);

        // Unknown ids pruned, duplicates dropped
        assert_eq!(updated.unwrap().label_ids, vec![bug.id]);
    }

    #[test]
    fn test_update_card_partial_merge_leaves_other_fields() {
        let (card, board) = board_with_card();

        let (updated, _) = UpdateCard::new(card.id.clone())
            .with_description("only this")
            .apply(&board);

        let updated = updated.unwrap();
        assert_eq!(updated.title, "Original");
        assert_eq!(updated.description, "only this");
    }

    #[test]
    fn test_update_card_missing_id_is_noop() {
        let (_, board) = board_with_card();

        let (result, next) = UpdateCard::new(CardId::new())
            .with_title("Ghost")
            .apply(&board);

        assert!(result.is_none());
        assert_eq!(next, board);
    }
}
