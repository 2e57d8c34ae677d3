//! Starter content for a board opened with no persisted snapshot.
//!
//! Mirrors what a fresh session sees: three workflow columns and a small set
//! of ready-made labels. Cards start empty.

use crate::types::{Board, Column, Label};

/// Column titles and colors seeded into a fresh board, in display order.
const STARTER_COLUMNS: &[(&str, &str)] = &[
    ("To Do", "1d76db"),     // blue
    ("In Progress", "f9c513"), // yellow
    ("Done", "0e8a16"),      // green
];

/// Label names seeded into a fresh board. Colors are auto-assigned.
const STARTER_LABELS: &[&str] = &["bug", "feature", "docs"];

/// Build the seed board used when no snapshot is found in storage.
pub fn starter_board() -> Board {
    let mut board = Board::new();

    for (order, (title, color)) in STARTER_COLUMNS.iter().enumerate() {
        let mut column = Column::new(*title).with_color(*color);
        column.order = order;
        board.columns.push(column);
    }

    for name in STARTER_LABELS {
        board.labels.push(Label::new(*name));
    }

    board
}
