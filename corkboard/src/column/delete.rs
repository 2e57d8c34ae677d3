//! DeleteColumn operation

use crate::mutation::Mutation;
use crate::types::{Board, ColumnId};
use serde::{Deserialize, Serialize};

/// Delete a column, cascading deletion to every card it contains.
///
/// Remaining columns with a higher `order` are shifted down one rank so
/// column ranks stay dense. Returns `false` with the board unchanged when
/// the id is absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteColumn {
    /// The column ID to delete
    pub id: ColumnId,
}

impl DeleteColumn {
    /// Create a new DeleteColumn operation
    pub fn new(id: impl Into<ColumnId>) -> Self {
        Self { id: id.into() }
    }
}

impl Mutation for DeleteColumn {
    type Output = bool;

    fn apply(&self, board: &Board) -> (bool, Board) {
        let Some(removed) = board.find_column(&self.id) else {
            return (false, board.clone());
        };
        let removed_order = removed.order;

        let mut next = board.clone();
        next.columns.retain(|c| c.id != self.id);
        for column in &mut next.columns {
            if column.order > removed_order {
                column.order -= 1;
            }
        }

        // Cascade: membership is derived from column_id, so the cards go too
        next.cards.retain(|c| c.column_id != self.id);

        (true, next)
    }
}
