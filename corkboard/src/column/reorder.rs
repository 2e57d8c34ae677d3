//! ReorderColumns operation

use crate::mutation::Mutation;
use crate::types::{Board, ColumnId};
use serde::{Deserialize, Serialize};

/// Re-rank columns to match the given id sequence.
///
/// Each listed column gets `order = position in the sequence`. Unknown ids
/// are skipped; columns missing from the sequence keep their stale order, so
/// callers must pass the full id set to keep column ranks dense.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReorderColumns {
    /// The full set of column IDs in the desired display order
    pub ids: Vec<ColumnId>,
}

impl ReorderColumns {
    /// Create a new ReorderColumns operation
    pub fn new(ids: Vec<ColumnId>) -> Self {
        Self { ids }
    }
}

impl Mutation for ReorderColumns {
    type Output = ();

    fn apply(&self, board: &Board) -> ((), Board) {
        let mut next = board.clone();

        for (order, id) in self.ids.iter().enumerate() {
            if let Some(column) = next.find_column_mut(id) {
                column.order = order;
            }
        }

        ((), next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::AddColumn;

    #[test]
    fn test_reorder_columns_assigns_positions() {
        let board = Board::new();
        let (a, board) = AddColumn::new("A").apply(&board);
        let (b, board) = AddColumn::new("B").apply(&board);
        let (c, board) = AddColumn::new("C").apply(&board);

        let (_, board) =
            ReorderColumns::new(vec![c.id.clone(), a.id.clone(), b.id.clone()]).apply(&board);

        let titles: Vec<&str> = board
            .columns_ordered()
            .iter()
            .map(|col| col.title.as_str())
            .collect();
        assert_eq!(titles, vec!["C", "A", "B"]);
    }

    #[test]
    fn test_reorder_columns_ignores_unknown_ids() {
        let board = Board::new();
        let (a, board) = AddColumn::new("A").apply(&board);
        let (b, board) = AddColumn::new("B").apply(&board);

        let (_, board) =
            ReorderColumns::new(vec![b.id.clone(), ColumnId::new(), a.id.clone()]).apply(&board);

        assert_eq!(board.find_column(&b.id).unwrap().order, 0);
        assert_eq!(board.find_column(&a.id).unwrap().order, 2);
    }
}
