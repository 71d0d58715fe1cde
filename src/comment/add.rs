//! AddComment command

use crate::error::{BoardError, Result};
use crate::transition::Transition;
use crate::types::{Board, Comment, TaskId};
use serde::Deserialize;

/// Append a comment to a task's discussion thread.
///
/// Comments are append-only; nothing edits or reorders the existing thread.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddComment {
    pub task: TaskId,
    pub body: String,
    pub author: String,
}

impl AddComment {
    pub fn new(
        task: impl Into<TaskId>,
        body: impl Into<String>,
        author: impl Into<String>,
    ) -> Self {
        Self {
            task: task.into(),
            body: body.into(),
            author: author.into(),
        }
    }
}

impl Transition for AddComment {
    fn label(&self) -> &'static str {
        "add_comment"
    }

    fn apply(&self, board: &Board) -> Result<Board> {
        let body = self.body.trim();
        if body.is_empty() {
            return Err(BoardError::missing_field("body"));
        }
        let author = self.author.trim();
        if author.is_empty() {
            return Err(BoardError::missing_field("author"));
        }
        board.task(&self.task)?;

        let mut next = board.clone();
        next.task_mut(&self.task)?
            .comments
            .push(Comment::new(body, author));
        Ok(next)
    }
}
