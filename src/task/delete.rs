//! DeleteTask command

use crate::error::{BoardError, Result};
use crate::transition::Transition;
use crate::types::{Board, TaskId};
use serde::Deserialize;

/// Delete a task from the board.
///
/// The owning column is resolved through the task's `status`, so the entry
/// disappears from both the task map and that column's ordering in one step.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteTask {
    pub task: TaskId,
}

impl DeleteTask {
    pub fn new(task: impl Into<TaskId>) -> Self {
        Self { task: task.into() }
    }
}

impl Transition for DeleteTask {
    fn label(&self) -> &'static str {
        "delete_task"
    }

    fn apply(&self, board: &Board) -> Result<Board> {
        let owner = board.column_of_task(&self.task)?.id.clone();

        let mut next = board.clone();
        let column = next.column_mut(&owner)?;
        match column.position_of(&self.task) {
            Some(index) => {
                column.task_ids.remove(index);
            }
            None => {
                // status points at a column that does not hold the task
                return Err(BoardError::invalid_value(
                    "status",
                    format!("task '{}' is not listed in column '{}'", self.task, owner),
                ));
            }
        }
        next.tasks.remove(&self.task);
        Ok(next)
    }
}
