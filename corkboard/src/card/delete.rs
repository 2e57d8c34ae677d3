//! DeleteCard operation

use crate::mutation::Mutation;
use crate::types::{Board, CardId};
use serde::{Deserialize, Serialize};

/// Delete a card, closing the rank gap it leaves behind.
///
/// Every sibling in the card's column with a greater `order` is shifted down
/// one rank, so the column's ranks stay dense at all times. Returns `false`
/// with the board unchanged when the id is absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteCard {
    /// The card ID to delete
    pub id: CardId,
}

impl DeleteCard {
    /// Create a new DeleteCard operation
    pub fn new(id: impl Into<CardId>) -> Self {
        Self { id: id.into() }
    }
}

impl Mutation for DeleteCard {
    type Output = bool;

    fn apply(&self, board: &Board) -> (bool, Board) {
        let Some(card) = board.find_card(&self.id) else {
            return (false, board.clone());
        };
        let column_id = card.column_id.clone();
        let removed_order = card.order;

        let mut next = board.clone();
        next.cards.retain(|c| c.id != self.id);
        for sibling in &mut next.cards {
            if sibling.column_id == column_id && sibling.order > removed_order {
                sibling.order -= 1;
            }
        }

        (true, next)
    }
}
