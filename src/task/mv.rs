//! MoveTask command

use crate::error::{BoardError, Result};
use crate::transition::Transition;
use crate::types::{Board, ColumnId, TaskId};
use serde::Deserialize;

/// Move a task to a new position, within its column or across columns.
///
/// Carries the full drag coordinates so a gesture recorded against a stale
/// board is rejected instead of silently moving the wrong card. A move onto
/// the exact position the task already occupies is a no-op.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveTask {
    pub task: TaskId,
    pub source: ColumnId,
    pub source_index: usize,
    pub dest: ColumnId,
    pub dest_index: usize,
}

impl MoveTask {
    pub fn new(
        task: impl Into<TaskId>,
        source: impl Into<ColumnId>,
        source_index: usize,
        dest: impl Into<ColumnId>,
        dest_index: usize,
    ) -> Self {
        Self {
            task: task.into(),
            source: source.into(),
            source_index,
            dest: dest.into(),
            dest_index,
        }
    }
}

impl Transition for MoveTask {
    fn label(&self) -> &'static str {
        "move_task"
    }

    fn apply(&self, board: &Board) -> Result<Board> {
        let source = board.column(&self.source)?;
        let dest = board.column(&self.dest)?;
        board.task(&self.task)?;

        // The gesture must match the board it is applied to.
        match source.task_ids.get(self.source_index) {
            Some(id) if *id == self.task => {}
            _ => {
                return Err(BoardError::invalid_value(
                    "sourceIndex",
                    format!(
                        "position {} in column '{}' does not hold task '{}'",
                        self.source_index, self.source, self.task
                    ),
                ))
            }
        }

        if self.source == self.dest && self.source_index == self.dest_index {
            return Ok(board.clone());
        }

        let mut next = board.clone();
        if self.source == self.dest {
            let column = next.column_mut(&self.source)?;
            let id = column.task_ids.remove(self.source_index);
            if self.dest_index > column.task_ids.len() {
                return Err(BoardError::invalid_value(
                    "destIndex",
                    format!(
                        "position {} is outside column '{}'",
                        self.dest_index, self.dest
                    ),
                ));
            }
            column.task_ids.insert(self.dest_index, id);
        } else {
            if self.dest_index > dest.task_ids.len() {
                return Err(BoardError::invalid_value(
                    "destIndex",
                    format!(
                        "position {} is outside column '{}'",
                        self.dest_index, self.dest
                    ),
                ));
            }
            // WIP is checked only when a task enters a column.
            if dest.at_capacity() {
                return Err(BoardError::WipLimitExceeded {
                    column: dest.id.to_string(),
                    limit: dest.wip.map(|w| w.get()).unwrap_or(0),
                });
            }
            let id = next
                .column_mut(&self.source)?
                .task_ids
                .remove(self.source_index);
            next.column_mut(&self.dest)?
                .task_ids
                .insert(self.dest_index, id);
            next.task_mut(&self.task)?.status = self.dest.clone();
        }
        Ok(next)
    }
}
