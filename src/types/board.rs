//! Board type: the complete state of a kanban board.

use super::column::Column;
use super::ids::{ColumnId, TaskId};
use super::task::Task;
use crate::auto_color::auto_color;
use crate::error::{BoardError, Result};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Complete board state.
///
/// `tasks` and `columns` are keyed lookups; all ordering lives in
/// `column_order` (left-to-right columns) and each column's `task_ids`
/// (top-to-bottom tasks). Transitions never mutate a board in place; they
/// clone, edit the clone, and hand it back.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    #[serde(default)]
    pub tasks: HashMap<TaskId, Task>,
    #[serde(default)]
    pub columns: HashMap<ColumnId, Column>,
    #[serde(default)]
    pub column_order: Vec<ColumnId>,
}

impl Board {
    /// An empty board with no columns.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a task or fail with `TaskNotFound`.
    pub fn task(&self, id: &TaskId) -> Result<&Task> {
        self.tasks.get(id).ok_or_else(|| BoardError::TaskNotFound {
            id: id.to_string(),
        })
    }

    /// Look up a column or fail with `ColumnNotFound`.
    pub fn column(&self, id: &ColumnId) -> Result<&Column> {
        self.columns
            .get(id)
            .ok_or_else(|| BoardError::ColumnNotFound {
                id: id.to_string(),
            })
    }

    /// Mutable task lookup, same error contract as [`Board::task`].
    pub fn task_mut(&mut self, id: &TaskId) -> Result<&mut Task> {
        self.tasks
            .get_mut(id)
            .ok_or_else(|| BoardError::TaskNotFound {
                id: id.to_string(),
            })
    }

    /// Mutable column lookup, same error contract as [`Board::column`].
    pub fn column_mut(&mut self, id: &ColumnId) -> Result<&mut Column> {
        self.columns
            .get_mut(id)
            .ok_or_else(|| BoardError::ColumnNotFound {
                id: id.to_string(),
            })
    }

    /// Columns in display order.
    pub fn ordered_columns(&self) -> impl Iterator<Item = &Column> {
        self.column_order
            .iter()
            .filter_map(|id| self.columns.get(id))
    }

    /// The column whose `task_ids` contains this task, resolved through the
    /// task's own `status` field.
    pub fn column_of_task(&self, id: &TaskId) -> Result<&Column> {
        let task = self.task(id)?;
        self.column(&task.status)
    }

    /// Tasks of one column in display order.
    pub fn tasks_in(&self, id: &ColumnId) -> Result<Vec<&Task>> {
        let column = self.column(id)?;
        Ok(column
            .task_ids
            .iter()
            .filter_map(|task_id| self.tasks.get(task_id))
            .collect())
    }

    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Check the structural invariants that every transition preserves:
    ///
    /// 1. every task id referenced by a column resolves to a task
    /// 2. each task's `status` names the column that holds it
    /// 3. `column_order` is a permutation of the column key set
    /// 4. no task id is referenced twice, and no task is orphaned
    pub fn validate(&self) -> Result<()> {
        if self.column_order.len() != self.columns.len() {
            return Err(BoardError::invalid_value(
                "columnOrder",
                format!(
                    "lists {} columns but the board has {}",
                    self.column_order.len(),
                    self.columns.len()
                ),
            ));
        }
        let mut seen_columns = HashSet::new();
        for column_id in &self.column_order {
            if !self.columns.contains_key(column_id) {
                return Err(BoardError::ColumnNotFound {
                    id: column_id.to_string(),
                });
            }
            if !seen_columns.insert(column_id) {
                return Err(BoardError::invalid_value(
                    "columnOrder",
                    format!("column '{}' listed more than once", column_id),
                ));
            }
        }

        let mut seen_tasks = HashSet::new();
        for column in self.columns.values() {
            for task_id in &column.task_ids {
                let task = self.tasks.get(task_id).ok_or_else(|| BoardError::TaskNotFound {
                    id: task_id.to_string(),
                })?;
                if task.status != column.id {
                    return Err(BoardError::invalid_value(
                        "status",
                        format!(
                            "task '{}' sits in column '{}' but its status says '{}'",
                            task_id, column.id, task.status
                        ),
                    ));
                }
                if !seen_tasks.insert(task_id) {
                    return Err(BoardError::invalid_value(
                        "taskIds",
                        format!("task '{}' referenced by more than one position", task_id),
                    ));
                }
            }
        }
        if seen_tasks.len() != self.tasks.len() {
            let orphan = self
                .tasks
                .keys()
                .find(|id| !seen_tasks.contains(id))
                .map(|id| id.to_string())
                .unwrap_or_default();
            return Err(BoardError::invalid_value(
                "tasks",
                format!("task '{}' belongs to no column", orphan),
            ));
        }
        Ok(())
    }

    /// Parse a board snapshot from JSON, normalize legacy gaps, and validate.
    ///
    /// Snapshots written by older frontends omit column colors; those get the
    /// deterministic default so a rendered board never shows a blank header.
    pub fn from_json(json: &str) -> Result<Self> {
        let mut board: Board = serde_json::from_str(json)?;
        for column in board.columns.values_mut() {
            if column.color.is_empty() {
                column.color = auto_color(&column.title).to_string();
            }
        }
        board.validate()?;
        Ok(board)
    }

    /// Serialize to compact JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serialize to pretty-printed JSON, the shape snapshots are stored in.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
