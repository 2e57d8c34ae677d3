//! AddLabel operation

use crate::auto_color::auto_color;
use crate::mutation::Mutation;
use crate::types::{Board, Label, LabelId};
use serde::{Deserialize, Serialize};

/// Add a new label to the board.
///
/// When no color is supplied one is derived from the label name, so the same
/// name always lands on the same palette entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddLabel {
    /// The label name
    pub name: String,
    /// Hex color without the leading `#`; derived from the name when `None`
    pub color: Option<String>,
}

impl AddLabel {
    /// Create a new AddLabel operation
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: None,
        }
    }

    /// Set an explicit color
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

impl Mutation for AddLabel {
    type Output = Label;

    fn apply(&self, board: &Board) -> (Label, Board) {
        let mut next = board.clone();

        let label = Label {
            id: LabelId::new(),
            name: self.name.clone(),
            color: self
                .color
                .clone()
                .unwrap_or_else(|| auto_color(&self.name).to_string()),
        };

        next.labels.push(label.clone());
        (label, next)
    }
}
