//! UpdateColumn operation

use crate::mutation::Mutation;
use crate::types::{Board, Column, ColumnId};
use serde::{Deserialize, Serialize};

/// Update an existing column's fields.
///
/// Only supplied fields change; id and `order` are untouched. Returns `None`
/// with the board unchanged when the id is absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateColumn {
    /// The column ID to update
    pub id: ColumnId,
    /// New title
    pub title: Option<String>,
    /// New color
    pub color: Option<String>,
}

impl UpdateColumn {
    /// Create a new UpdateColumn operation
    pub fn new(id: impl Into<ColumnId>) -> Self {
        Self {
            id: id.into(),
            title: None,
            color: None,
        }
    }

    /// Set the title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the color
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

impl Mutation for UpdateColumn {
    type Output = Option<Column>;

    fn apply(&self, board: &Board) -> (Option<Column>, Board) {
        let mut next = board.clone();

        let Some(column) = next.find_column_mut(&self.id) else {
            return (None, next);
        };

        if let Some(title) = &self.title {
            column.title = title.clone();
        }
        if let Some(color) = &self.color {
            column.color = color.clone();
        }

        let updated = column.clone();
        (Some(updated), next)
    }
}
