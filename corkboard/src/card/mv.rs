//! MoveCard operation

use crate::mutation::Mutation;
use crate::types::{Board, Card, CardId, ColumnId};
use serde::{Deserialize, Serialize};

/// Move a card to a target column and rank.
///
/// The move runs in two phases over a single cloned board: first the gap the
/// card leaves behind is closed (siblings in the source column above its old
/// rank shift down), then a slot is opened at the target rank (cards in the
/// target column at or above it shift up) and the card is re-homed. The
/// requested rank is clamped to the target column's occupancy, counted
/// without the moved card, so `usize::MAX` means "append at the end".
///
/// Returns `None` with the board unchanged when either the card or the
/// target column is absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoveCard {
    /// The card ID to move
    pub id: CardId,
    /// The destination column
    pub column_id: ColumnId,
    /// The desired rank within the destination column
    pub order: usize,
}

impl MoveCard {
    /// Create a new MoveCard operation
    pub fn new(id: impl Into<CardId>, column_id: impl Into<ColumnId>, order: usize) -> Self {
        Self {
            id: id.into(),
            column_id: column_id.into(),
            order,
        }
    }

    /// Move the card to the end of the destination column
    pub fn to_column_end(id: impl Into<CardId>, column_id: impl Into<ColumnId>) -> Self {
        Self::new(id, column_id, usize::MAX)
    }
}

impl Mutation for MoveCard {
    type Output = Option<Card>;

    fn apply(&self, board: &Board) -> (Option<Card>, Board) {
        let Some(card) = board.find_card(&self.id) else {
            return (None, board.clone());
        };
        if board.find_column(&self.column_id).is_none() {
            return (None, board.clone());
        }
        let source_column = card.column_id.clone();
        let old_order = card.order;

        let mut next = board.clone();

        // Phase one: close the gap the card leaves in its source column.
        for sibling in &mut next.cards {
            if sibling.id != self.id
                && sibling.column_id == source_column
                && sibling.order > old_order
            {
                sibling.order -= 1;
            }
        }

        // Occupancy of the target column, not counting the moved card.
        let occupancy = next
            .cards
            .iter()
            .filter(|c| c.column_id == self.column_id && c.id != self.id)
            .count();
        let target = self.order.min(occupancy);

        // Phase two: open a slot at the target rank and re-home the card.
        for sibling in &mut next.cards {
            if sibling.id != self.id
                && sibling.column_id == self.column_id
                && sibling.order >= target
            {
                sibling.order += 1;
            }
        }

        let moved = next
            .find_card_mut(&self.id)
            .map(|card| {
                card.column_id = self.column_id.clone();
                card.order = target;
                card.clone()
            });

        (moved, next)
    }
}
