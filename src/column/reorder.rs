//! ReorderColumn command

use crate::error::{BoardError, Result};
use crate::transition::Transition;
use crate::types::{Board, ColumnId};
use serde::Deserialize;

/// Move a column to a new position along the board.
///
/// The entry at `source_index` is spliced out and reinserted at
/// `dest_index`, so `column_order` stays a permutation of the column set no
/// matter what. `column` names the id the caller believes it is moving.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReorderColumn {
    pub column: ColumnId,
    pub source_index: usize,
    pub dest_index: usize,
}

impl ReorderColumn {
    pub fn new(column: impl Into<ColumnId>, source_index: usize, dest_index: usize) -> Self {
        Self {
            column: column.into(),
            source_index,
            dest_index,
        }
    }
}

impl Transition for ReorderColumn {
    fn label(&self) -> &'static str {
        "reorder_column"
    }

    fn apply(&self, board: &Board) -> Result<Board> {
        let len = board.column_order.len();
        if self.source_index >= len {
            return Err(BoardError::invalid_value(
                "sourceIndex",
                format!("position {} is outside the board", self.source_index),
            ));
        }
        if self.dest_index >= len {
            return Err(BoardError::invalid_value(
                "destIndex",
                format!("position {} is outside the board", self.dest_index),
            ));
        }

        let mut next = board.clone();
        let id = next.column_order.remove(self.source_index);
        debug_assert_eq!(id, self.column, "reorder gesture out of sync with board");
        next.column_order.insert(self.dest_index, id);
        Ok(next)
    }
}
