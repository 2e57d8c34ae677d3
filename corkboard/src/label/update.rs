//! UpdateLabel operation

use crate::mutation::Mutation;
use crate::types::{Board, Label, LabelId};
use serde::{Deserialize, Serialize};

/// Update an existing label's name or color.
///
/// Only supplied fields change. Returns `None` with the board unchanged when
/// the id is absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateLabel {
    /// The label ID to update
    pub id: LabelId,
    /// New name
    pub name: Option<String>,
    /// New color
    pub color: Option<String>,
}

impl UpdateLabel {
    /// Create a new UpdateLabel operation
    pub fn new(id: impl Into<LabelId>) -> Self {
        Self {
            id: id.into(),
            name: None,
            color: None,
        }
    }

    /// Set the name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the color
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

impl Mutation for UpdateLabel {
    type Output = Option<Label>;

    fn apply(&self, board: &Board) -> (Option<Label>, Board) {
        let mut next = board.clone();

        let Some(label) = next.find_label_mut(&self.id) else {
            return (None, next);
        };

        if let Some(name) = &self.name {
            label.name = name.clone();
        }
        if let Some(color) = &self.color {
            label.color = color.clone();
        }

        let updated = label.clone();
        (Some(updated), next)
    }
}
