//! UpdateColumn command

use super::add::normalize_color;
use crate::error::{BoardError, Result};
use crate::transition::Transition;
use crate::types::{Board, ColumnId};
use serde::Deserialize;

/// Edit a column's title, color, or WIP cap.
///
/// Only fields carried as `Some` change. Setting `wip` to `0` removes the
/// cap. Lowering the cap below the current task count is allowed: the tasks
/// already there stay put and only further arrivals are blocked.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateColumn {
    pub column: ColumnId,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub wip: Option<usize>,
}

impl UpdateColumn {
    pub fn new(column: impl Into<ColumnId>) -> Self {
        Self {
            column: column.into(),
            title: None,
            color: None,
            wip: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_wip(mut self, wip: usize) -> Self {
        self.wip = Some(wip);
        self
    }
}

impl Transition for UpdateColumn {
    fn label(&self) -> &'static str {
        "update_column"
    }

    fn apply(&self, board: &Board) -> Result<Board> {
        board.column(&self.column)?;

        if let Some(title) = &self.title {
            if title.trim().is_empty() {
                return Err(BoardError::missing_field("title"));
            }
        }
        let color = match &self.color {
            Some(color) => Some(normalize_color(color)?),
            None => None,
        };

        let mut next = board.clone();
        let column = next.column_mut(&self.column)?;
        if let Some(title) = &self.title {
            column.title = title.trim().to_string();
        }
        if let Some(color) = color {
            column.color = color;
        }
        if let Some(wip) = self.wip {
            column.wip = std::num::NonZeroUsize::new(wip);
        }
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Column, Task, TaskId};

    fn board_with_tasks(count: usize) -> Board {
        let mut board = Board::new();
        let column = Column::new("todo", "To Do");
        board.column_order.push(column.id.clone());
        board.columns.insert(column.id.clone(), column);
        for i in 0..count {
            let mut task = Task::new(format!("Task {}", i), ColumnId::from("todo"));
            task.id = TaskId::from(format!("t{}", i));
            board
                .column_mut(&ColumnId::from("todo"))
                .unwrap()
                .task_ids
                .push(task.id.clone());
            board.tasks.insert(task.id.clone(), task);
        }
        board
    }

    #[test]
    fn test_rename_keeps_everything_else() {
        let board = board_with_tasks(2);
        let next = UpdateColumn::new("todo")
            .with_title("Inbox")
            .apply(&board)
            .unwrap();
        let column = next.column(&ColumnId::from("todo")).unwrap();
        assert_eq!(column.title, "Inbox");
        assert_eq!(column.task_ids.len(), 2);
        assert_eq!(column.color, board.column(&ColumnId::from("todo")).unwrap().color);
    }

    #[test]
    fn test_recolor() {
        let board = board_with_tasks(0);
        let next = UpdateColumn::new("todo")
            .with_color("#0E8A16")
            .apply(&board)
            .unwrap();
        assert_eq!(next.column(&ColumnId::from("todo")).unwrap().color, "0e8a16");

        let err = UpdateColumn::new("todo")
            .with_color("not-a-color")
            .apply(&board)
            .unwrap_err();
        assert!(matches!(err, BoardError::InvalidValue { ref field, .. } if field == "color"));
    }

    #[test]
    fn test_wip_can_shrink_below_count_without_evicting() {
        let board = board_with_tasks(3);
        let next = UpdateColumn::new("todo").with_wip(1).apply(&board).unwrap();
        let column = next.column(&ColumnId::from("todo")).unwrap();
        assert_eq!(column.wip.map(|w| w.get()), Some(1));
        assert_eq!(column.task_ids.len(), 3);
        assert!(column.at_capacity());
        assert!(next.validate().is_ok());
    }

    #[test]
    fn test_wip_zero_clears_cap() {
        let board = board_with_tasks(1);
        let board = UpdateColumn::new("todo").with_wip(5).apply(&board).unwrap();
        let board = UpdateColumn::new("todo").with_wip(0).apply(&board).unwrap();
        assert!(board.column(&ColumnId::from("todo")).unwrap().wip.is_none());
    }

    #[test]
    fn test_blank_title_rejected() {
        let board = board_with_tasks(0);
        let err = UpdateColumn::new("todo")
            .with_title("")
            .apply(&board)
            .unwrap_err();
        assert!(matches!(err, BoardError::MissingField { ref field } if field == "title"));
    }

    #[test]
    fn test_unknown_column_rejected() {
        let err = UpdateColumn::new("nowhere")
            .with_title("X")
            .apply(&Board::new())
            .unwrap_err();
        assert!(matches!(err, BoardError::ColumnNotFound { .. }));
    }
}
