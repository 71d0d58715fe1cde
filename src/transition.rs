//! Transition trait implemented by every board command.

use crate::error::Result;
use crate::types::Board;

/// A validated command that turns one board into the next.
///
/// Implementations never mutate the input board. They validate against it,
/// clone it, edit the clone, and return it; when they fail, the caller still
/// holds the original untouched. `apply` is total over any board that passes
/// [`Board::validate`](crate::Board::validate): bad input is an `Err`, never
/// a panic or a half-applied edit.
pub trait Transition {
    /// Short command name used in log lines.
    fn label(&self) -> &'static str;

    /// Produce the next board state.
    fn apply(&self, board: &Board) -> Result<Board>;
}
