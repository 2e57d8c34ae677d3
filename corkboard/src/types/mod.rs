//! Core types for the board engine

mod board;
mod card;
mod ids;

// Re-export all types
pub use board::{Board, Column, Label};
pub use card::Card;
pub use ids::{CardId, ColumnId, LabelId};
