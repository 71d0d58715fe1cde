//! UpdateTask command

use crate::error::{BoardError, Result};
use crate::transition::Transition;
use crate::types::{Board, Priority, TaskId};
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};

/// Distinguish "field absent" from "field set to null" when parsing a patch.
fn double_option<'de, T, D>(deserializer: D) -> std::result::Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}

/// Patch a task's editable fields.
///
/// Only fields carried as `Some` change; the rest keep their values. A
/// task's `status` is deliberately not editable here, it only moves through
/// [`MoveTask`](crate::MoveTask), and comments only grow through
/// [`AddComment`](crate::AddComment).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTask {
    pub task: TaskId,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub priority: Option<Priority>,
    #[serde(default)]
    pub assignee: Option<String>,
    /// `Some(None)` clears the due date; `None` leaves it alone.
    #[serde(default, deserialize_with = "double_option")]
    pub due_date: Option<Option<NaiveDate>>,
    #[serde(default)]
    pub labels: Option<Vec<String>>,
    #[serde(default)]
    pub estimation: Option<String>,
    #[serde(default)]
    pub progress: Option<u8>,
}

impl UpdateTask {
    pub fn new(task: impl Into<TaskId>) -> Self {
        Self {
            task: task.into(),
            ..Self::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
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
        self.due_date = Some(Some(due_date));
        self
    }

    pub fn clear_due_date(mut self) -> Self {
        self.due_date = Some(None);
        self
    }

    pub fn with_labels(mut self, labels: Vec<String>) -> Self {
        self.labels = Some(labels);
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

impl Transition for UpdateTask {
    fn label(&self) -> &'static str {
        "update_task"
    }

    fn apply(&self, board: &Board) -> Result<Board> {
        board.task(&self.task)?;

        if let Some(title) = &self.title {
            if title.trim().is_empty() {
                return Err(BoardError::missing_field("title"));
            }
        }
        if let Some(progress) = self.progress {
            if progress > 100 {
                return Err(BoardError::invalid_value(
                    "progress",
                    format!("{} exceeds 100 percent", progress),
                ));
            }
        }

        let mut next = board.clone();
        let task = next.task_mut(&self.task)?;
        if let Some(title) = &self.title {
            task.title = title.trim().to_string();
        }
        if let Some(description) = &self.description {
            task.description = description.clone();
        }
        if let Some(priority) = self.priority {
            task.priority = priority;
        }
        if let Some(assignee) = &self.assignee {
            task.assignee = assignee.clone();
        }
        if let Some(due_date) = self.due_date {
            task.due_date = due_date;
        }
        if let Some(labels) = &self.labels {
            task.labels = super::add::dedup_labels(labels);
        }
        if let Some(estimation) = &self.estimation {
            task.estimation = estimation.clone();
        }
        if let Some(progress) = self.progress {
            task.progress = progress;
        }
        Ok(next)
    }
}
