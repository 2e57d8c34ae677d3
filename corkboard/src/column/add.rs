//! AddColumn operation

use crate::auto_color::auto_color;
use crate::mutation::Mutation;
use crate::types::{Board, Column, ColumnId};
use serde::{Deserialize, Serialize};

/// Add a new column at the end of the board.
///
/// The new column's `order` is the count of existing columns, so column
/// ranks stay dense. Always succeeds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddColumn {
    /// The column display title
    pub title: String,
    /// Optional explicit color; auto-assigned from the title when absent
    pub color: Option<String>,
}

impl AddColumn {
    /// Create a new AddColumn operation
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            color: None,
        }
    }

    /// Set an explicit color
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

impl Mutation for AddColumn {
    type Output = Column;

    fn apply(&self, board: &Board) -> (Column, Board) {
        let mut next = board.clone();

        let color = self
            .color
            .clone()
            .unwrap_or_else(|| auto_color(&self.title).to_string());

        let column = Column {
            id: ColumnId::new(),
            title: self.title.clone(),
            order: next.columns.len(),
            color,
        };

        next.columns.push(column.clone());
        (column, next)
    }
}
