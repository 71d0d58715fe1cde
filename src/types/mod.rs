//! Core board types.

mod board;
mod column;
mod event;
mod ids;
mod task;

pub use board::Board;
pub use column::Column;
pub use event::{DragEvent, DragKind};
pub use ids::{ColumnId, CommentId, TaskId};
pub use task::{Comment, Priority, Task};
