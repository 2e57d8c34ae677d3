//! DeleteLabel operation

use crate::mutation::Mutation;
use crate::types::{Board, LabelId};
use serde::{Deserialize, Serialize};

/// Delete a label and detach it from every card that carries it.
///
/// Returns `false` with the board unchanged when the id is absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteLabel {
    /// The label ID to delete
    pub id: LabelId,
}

impl DeleteLabel {
    /// Create a new DeleteLabel operation
    pub fn new(id: impl Into<LabelId>) -> Self {
        Self { id: id.into() }
    }
}

impl Mutation for DeleteLabel {
    type Output = bool;

    fn apply(&self, board: &Board) -> (bool, Board) {
        if board.find_label(&self.id).is_none() {
            return (false, board.clone());
        }

        let mut next = board.clone();
        for card in &mut next.cards {
            card.label_ids.retain(|l| l != &self.id);
        }
        next.labels.retain(|l| l.id != self.id);

        (true, next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::AddCard;
    use crate::column::AddColumn;
    use crate::label::AddLabel;

    #[test]
    fn test_delete_label_detaches_from_cards() {
        let board = Board::new();
        let (todo, board) = AddColumn::new("Todo").apply(&board);
        let (bug, board) = AddLabel::new("bug").apply(&board);
        let (urgent, board) = AddLabel::new("urgent").apply(&board);
        let (card, board) = AddCard::new("A", todo.id)
            .with_labels(vec![bug.id.clone(), urgent.id.clone()])
            .apply(&board);

        let (deleted, board) = DeleteLabel::new(bug.id.clone()).apply(&board);

        assert!(deleted);
        assert!(board.find_label(&bug.id).is_none());
        let card = board.find_card(&card.unwrap().id).unwrap();
        assert_eq!(card.label_ids, vec![urgent.id]);
    }

    #[test]
    fn test_delete_label_missing_id_is_noop() {
        let board = Board::new();
        let (_, board) = AddLabel::new("bug").apply(&board);

        let (deleted, next) = DeleteLabel::new(LabelId::new()).apply(&board);
        assert!(!deleted);
        assert_eq!(next, board);
    }
}
