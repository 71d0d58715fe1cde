//! Kanban board state-transition engine
//!
//! This crate models a drag-and-drop task board as a pure state machine: a
//! [`Board`] value plus one command struct per operation, each validating
//! against the current board and returning the next one. Nothing is mutated
//! in place and nothing does IO; rendering, persistence, and drag wiring
//! belong to the presentation layer.
//!
//! ## Overview
//!
//! - **One value = whole board** — tasks, columns, and left-to-right order
//!   in a single [`Board`]
//! - **Command per operation** — [`MoveTask`], [`AddColumn`], … all
//!   implement [`Transition`]
//! - **Rejected means untouched** — a failed command returns an error and
//!   the previous board survives as-is
//! - **WIP at the boundary** — column caps are enforced when a card enters,
//!   never retroactively
//!
//! ## Basic Usage
//!
//! ```rust
//! use cardwall::{AddTask, BoardStore, DragEvent};
//!
//! # fn example() -> cardwall::Result<()> {
//! let mut store = BoardStore::new(cardwall::seed::starter_board());
//!
//! // Add a task to the first column
//! store.dispatch(&AddTask::new("todo", "Implement feature X").with_assignee("Jane Smith"))?;
//!
//! // A finished drag gesture moves it to "done"
//! let task_id = store.board().column(&"todo".into())?.task_ids[0].clone();
//! store.drag_end(&DragEvent::task(task_id.as_str(), "todo", 0, "done", 0))?;
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod auto_color;
mod error;
pub mod seed;
mod store;
mod transition;
pub mod types;

// Command modules
pub mod column;
pub mod comment;
pub mod task;

pub use error::{BoardError, Result};
pub use store::BoardStore;
pub use transition::Transition;

// Re-export the commands
pub use column::{AddColumn, DeleteColumn, ReorderColumn, UpdateColumn};
pub use comment::AddComment;
pub use task::{AddTask, DeleteTask, MoveTask, UpdateTask};

// Re-export commonly used types
pub use types::{
    Board, Column, ColumnId, Comment, CommentId, DragEvent, DragKind, Priority, Task, TaskId,
};
