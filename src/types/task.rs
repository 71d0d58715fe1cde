//! Task types: Task, Priority, Comment

use super::ids::{ColumnId, CommentId, TaskId};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

fn default_assignee() -> String {
    "Unassigned".to_string()
}

fn default_estimation() -> String {
    "0h".to_string()
}

/// A task/card on the kanban board.
///
/// `status` always names the column whose `task_ids` contains this task; the
/// transition functions keep the two in lockstep, so a board never reports a
/// task in one column while listing it under another.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default = "default_assignee")]
    pub assignee: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    /// Id of the column currently containing this task.
    pub status: ColumnId,
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default = "default_estimation")]
    pub estimation: String,
    /// Completion percentage, 0..=100.
    #[serde(default)]
    pub progress: u8,
    /// Discussion thread, append-only.
    #[serde(default)]
    pub comments: Vec<Comment>,
}

impl Task {
    /// Create a new task with the given title, homed in `status`.
    pub fn new(title: impl Into<String>, status: impl Into<ColumnId>) -> Self {
        Self {
            id: TaskId::new(),
            title: title.into(),
            description: String::new(),
            priority: Priority::default(),
            assignee: default_assignee(),
            due_date: None,
            status: status.into(),
            labels: Vec::new(),
            estimation: default_estimation(),
            progress: 0,
            comments: Vec::new(),
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the priority
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Set the assignee
    pub fn with_assignee(mut self, assignee: impl Into<String>) -> Self {
        self.assignee = assignee.into();
        self
    }

    /// Set the due date
    pub fn with_due_date(mut self, due: NaiveDate) -> Self {
        self.due_date = Some(due);
        self
    }

    /// Set the labels
    pub fn with_labels(mut self, labels: Vec<String>) -> Self {
        self.labels = labels;
        self
    }

    /// Set the estimation
    pub fn with_estimation(mut self, estimation: impl Into<String>) -> Self {
        self.estimation = estimation.into();
        self
    }

    /// Set the progress percentage
    pub fn with_progress(mut self, progress: u8) -> Self {
        self.progress = progress;
        self
    }
}

/// Task priority level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

/// A comment on a task - part of the discussion thread
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: CommentId,
    pub author: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    /// Create a new comment stamped with the current time
    pub fn new(body: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            id: CommentId::new(),
            author: author.into(),
            body: body.into(),
            created_at: Utc::now(),
        }
    }
}
