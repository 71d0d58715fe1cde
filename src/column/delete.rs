//! DeleteColumn command

use crate::error::{BoardError, Result};
use crate::transition::Transition;
use crate::types::{Board, ColumnId};
use serde::Deserialize;

/// Remove an empty column from the board.
///
/// A column still holding tasks is refused; callers move or remove the tasks
/// first, nothing is deleted in cascade.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteColumn {
    pub column: ColumnId,
}

impl DeleteColumn {
    pub fn new(column: impl Into<ColumnId>) -> Self {
        Self {
            column: column.into(),
        }
    }
}

impl Transition for DeleteColumn {
    fn label(&self) -> &'static str {
        "delete_column"
    }

    fn apply(&self, board: &Board) -> Result<Board> {
        let column = board.column(&self.column)?;
        if !column.task_ids.is_empty() {
            return Err(BoardError::ColumnNotEmpty {
                id: column.id.to_string(),
                count: column.task_ids.len(),
            });
        }

        let mut next = board.clone();
        next.columns.remove(&self.column);
        next.column_order.retain(|id| id != &self.column);
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Column, Task, TaskId};

    fn three_column_board() -> Board {
        let mut board = Board::new();
        for (id, title) in [("todo", "To Do"), ("doing", "Doing"), ("done", "Done")] {
            let column = Column::new(id, title);
            board.column_order.push(column.id.clone());
            board.columns.insert(column.id.clone(), column);
        }
        board
    }

    #[test]
    fn test_delete_empty_column() {
        let board = three_column_board();
        let next = DeleteColumn::new("doing").apply(&board).unwrap();
        assert_eq!(next.column_count(), 2);
        let order: Vec<&str> = next.column_order.iter().map(|id| id.as_str()).collect();
        assert_eq!(order, vec!["todo", "done"]);
        assert!(next.validate().is_ok());
        // input untouched
        assert_eq!(board.column_count(), 3);
    }

    #[test]
    fn test_delete_refuses_populated_column() {
        let mut board = three_column_board();
        for i in 0..2 {
            let mut task = Task::new(format!("Task {}", i), ColumnId::from("doing"));
            task.id = TaskId::from(format!("t{}", i));
            board
                .column_mut(&ColumnId::from("doing"))
                .unwrap()
                .task_ids
                .push(task.id.clone());
            board.tasks.insert(task.id.clone(), task);
        }

        let err = DeleteColumn::new("doing").apply(&board).unwrap_err();
        assert!(
            matches!(err, BoardError::ColumnNotEmpty { ref id, count } if id == "doing" && count == 2)
        );
        assert_eq!(board.column_count(), 3);
    }

    #[test]
    fn test_delete_last_column_leaves_empty_board() {
        let mut board = Board::new();
        let column = Column::new("only", "Only");
        board.column_order.push(column.id.clone());
        board.columns.insert(column.id.clone(), column);

        let next = DeleteColumn::new("only").apply(&board).unwrap();
        assert_eq!(next.column_count(), 0);
        assert!(next.column_order.is_empty());
        assert!(next.validate().is_ok());
    }

    #[test]
    fn test_delete_unknown_column() {
        let err = DeleteColumn::new("nowhere").apply(&Board::new()).unwrap_err();
        assert!(matches!(err, BoardError::ColumnNotFound { .. }));
    }
}
