//! AddTask command

use crate::error::{BoardError, Result};
use crate::transition::Transition;
use crate::types::{Board, ColumnId, Priority, Task};
use chrono::NaiveDate;
use serde::Deserialize;
use std::collections::HashSet;

/// Create a new task at the bottom of a column.
///
/// Unset fields fall back to the same defaults the board UI shows for a
/// blank card: medium priority, unassigned, `0h` estimation, zero progress.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddTask {
    /// Column the task is created in.
    pub column: ColumnId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub priority: Option<Priority>,
    #[serde(default)]
    pub assignee: Option<String>,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub estimation: Option<String>,
    #[serde(default)]
    pub progress: Option<u8>,
}

impl AddTask {
    pub fn new(column: impl Into<ColumnId>, title: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            title: title.into(),
            description: None,
            priority: None,
            assignee: None,
            due_date: None,
            labels: Vec::new(),
            estimation: None,
            progress: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn with_assignee(mut self, assignee: impl Into<String>) -> Self {
        self.assignee = Some(assignee.into());
        self
    }

    pub fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    pub fn with_labels(mut self, labels: Vec<String>) -> Self {
        self.labels = labels;
        self
    }

    pub fn with_estimation(mut self, estimation: impl Into<String>) -> Self {
        self.estimation = Some(estimation.into());
        self
    }

    pub fn with_progress(mut self, progress: u8) -> Self {
        self.progress = Some(progress);
        self
    }
}

/// Drop blank and repeated labels, keeping first-occurrence order.
pub(super) fn dedup_labels(labels: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    labels
        .iter()
        .filter(|label| !label.trim().is_empty() && seen.insert(label.as_str()))
        .cloned()
        .collect()
}

impl Transition for AddTask {
    fn label(&self) -> &'static str {
        "add_task"
    }

    fn apply(&self, board: &Board) -> Result<Board> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(BoardError::missing_field("title"));
        }
        if let Some(progress) = self.progress {
            if progress > 100 {
                return Err(BoardError::invalid_value(
                    "progress",
                    format!("{} exceeds 100 percent", progress),
                ));
            }
        }
        let column = board.column(&self.column)?;
        if column.at_capacity() {
            return Err(BoardError::WipLimitExceeded {
                column: column.id.to_string(),
                limit: column.wip.map(|w| w.get()).unwrap_or(0),
            });
        }

        let mut task = Task::new(title, self.column.clone());
        if let Some(description) = &self.description {
            task.description = description.clone();
        }
        if let Some(priority) = self.priority {
            task.priority = priority;
        }
        if let Some(assignee) = &self.assignee {
            task.assignee = assignee.clone();
        }
        task.due_date = self.due_date;
        task.labels = dedup_labels(&self.labels);
        if let Some(estimation) = &self.estimation {
            task.estimation = estimation.clone();
        }
        task.progress = self.progress.unwrap_or(0);

        let mut next = board.clone();
        next.column_mut(&self.column)?.task_ids.push(task.id.clone());
        next.tasks.insert(task.id.clone(), task);
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Column;

    fn two_column_board() -> Board {
        let mut board = Board::new();
        for (id, title) in [("todo", "To Do"), ("done", "Done")] {
            let column = Column::new(id, title);
            board.column_order.push(column.id.clone());
            board.columns.insert(column.id.clone(), column);
        }
        board
    }

    #[test]
    fn test_add_task_with_defaults() {
        let board = two_column_board();
        let next = AddTask::new("todo", "Write the changelog")
            .apply(&board)
            .unwrap();

        assert_eq!(next.task_count(), 1);
        let column = next.column(&ColumnId::from("todo")).unwrap();
        assert_eq!(column.task_ids.len(), 1);
        let task = next.task(&column.task_ids[0]).unwrap();
        assert_eq!(task.title, "Write the changelog");
        assert_eq!(task.description, "");
        assert_eq!(task.priority, Priority::Medium);
        assert_eq!(task.assignee, "Unassigned");
        assert_eq!(task.estimation, "0h");
        assert_eq!(task.progress, 0);
        assert_eq!(task.status, ColumnId::from("todo"));
        assert!(next.validate().is_ok());
        // the input board is untouched
        assert_eq!(board.task_count(), 0);
    }

    #[test]
    fn test_add_task_appends_at_bottom() {
        let board = two_column_board();
        let board = AddTask::new("todo", "First").apply(&board).unwrap();
        let board = AddTask::new("todo", "Second").apply(&board).unwrap();
        let column = board.column(&ColumnId::from("todo")).unwrap();
        let titles: Vec<&str> = column
            .task_ids
            .iter()
            .map(|id| board.task(id).unwrap().title.as_str())
            .collect();
        assert_eq!(titles, vec!["First", "Second"]);
    }

    #[test]
    fn test_add_task_rejects_blank_title() {
        let board = two_column_board();
        let err = AddTask::new("todo", "   ").apply(&board).unwrap_err();
        assert!(matches!(err, BoardError::MissingField { ref field } if field == "title"));
    }

    #[test]
    fn test_add_task_rejects_unknown_column() {
        let board = two_column_board();
        let err = AddTask::new("archive", "Lost").apply(&board).unwrap_err();
        assert!(matches!(err, BoardError::ColumnNotFound { .. }));
    }

    #[test]
    fn test_add_task_honors_wip_limit() {
        let mut board = two_column_board();
        board.column_mut(&ColumnId::from("todo")).unwrap().wip = std::num::NonZeroUsize::new(1);

        let board = AddTask::new("todo", "Fits").apply(&board).unwrap();
        let err = AddTask::new("todo", "Does not").apply(&board).unwrap_err();
        assert!(err.is_wip_rejection());
        assert!(
            matches!(err, BoardError::WipLimitExceeded { ref column, limit } if column == "todo" && limit == 1)
        );
        assert_eq!(board.task_count(), 1);
    }

    #[test]
    fn test_add_task_dedups_labels() {
        let board = two_column_board();
        let next = AddTask::new("todo", "Tag me")
            .with_labels(vec![
                "backend".to_string(),
                "urgent".to_string(),
                "".to_string(),
                "backend".to_string(),
            ])
            .apply(&board)
            .unwrap();
        let column = next.column(&ColumnId::from("todo")).unwrap();
        let task = next.task(&column.task_ids[0]).unwrap();
        assert_eq!(task.labels, vec!["backend", "urgent"]);
    }

    #[test]
    fn test_add_task_rejects_progress_past_100() {
        let board = two_column_board();
        let err = AddTask::new("todo", "Overdone")
            .with_progress(101)
            .apply(&board)
            .unwrap_err();
        assert!(matches!(err, BoardError::InvalidValue { ref field, .. } if field == "progress"));
    }

    #[test]
    fn test_add_task_with_builders() {
        let board = two_column_board();
        let due = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        let next = AddTask::new("todo", "Ship it")
            .with_description("Cut the release")
            .with_priority(Priority::High)
            .with_assignee("Jane Smith")
            .with_due_date(due)
            .with_estimation("8h")
            .with_progress(25)
            .apply(&board)
            .unwrap();
        let column = next.column(&ColumnId::from("todo")).unwrap();
        let task = next.task(&column.task_ids[0]).unwrap();
        assert_eq!(task.description, "Cut the release");
        assert_eq!(task.priority, Priority::High);
        assert_eq!(task.assignee, "Jane Smith");
        assert_eq!(task.due_date, Some(due));
        assert_eq!(task.estimation, "8h");
        assert_eq!(task.progress, 25);
    }
}
