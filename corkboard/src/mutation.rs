//! The `Mutation` trait - pure copy-on-write operations over a board snapshot.

use crate::types::Board;

/// A pure operation on a board snapshot.
///
/// `apply` never modifies the input snapshot; it returns a new snapshot plus
/// an operation-specific output (the created entity, a found/not-found
/// sentinel, or nothing). Operations that reference an absent id return their
/// not-found sentinel (`None` / `false`) with the board unchanged — a
/// deliberate fail-quiet policy: callers treat it as a no-op, not a crash.
///
/// Every mutation leaves the snapshot's structural invariants intact:
/// card `order` values are dense `{0, .., n-1}` within each column, column
/// `order` values are dense across the board, and no card references a
/// missing column or label.
pub trait Mutation {
    /// Operation-specific result handed back to the caller
    type Output;

    /// Compute the next snapshot from the current one
    fn apply(&self, board: &Board) -> (Self::Output, Board);
}
