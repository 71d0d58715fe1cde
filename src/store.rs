//! BoardStore: owns the canonical board for a session and applies
//! transitions to it.

use crate::error::Result;
use crate::transition::Transition;
use crate::types::{Board, DragEvent, DragKind};
use crate::{MoveTask, ReorderColumn};

/// Explicit state container for one board.
///
/// Commands arrive one at a time; each accepted transition replaces the held
/// board wholesale, so the input of the next command is always the output of
/// the last. A rejected command leaves the board exactly as it was.
#[derive(Debug, Clone)]
pub struct BoardStore {
    board: Board,
}

impl BoardStore {
    pub fn new(board: Board) -> Self {
        Self { board }
    }

    /// The current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Give up the store and keep the board, e.g. to snapshot it.
    pub fn into_board(self) -> Board {
        self.board
    }

    /// Apply a transition to the current board.
    ///
    /// On success the store holds the new board and returns a borrow of it;
    /// on rejection the previous board stays in place and the error is
    /// passed through.
    pub fn dispatch(&mut self, command: &impl Transition) -> Result<&Board> {
        match command.apply(&self.board) {
            Ok(next) => {
                debug_assert!(next.validate().is_ok());
                tracing::debug!(
                    "{} applied: {} tasks in {} columns",
                    command.label(),
                    next.task_count(),
                    next.column_count()
                );
                self.board = next;
                Ok(&self.board)
            }
            Err(e) => {
                tracing::warn!("{} rejected: {}", command.label(), e);
                Err(e)
            }
        }
    }

    /// Translate a finished drag gesture into the matching transition and
    /// dispatch it: task drags move a card, column drags reorder the board.
    pub fn drag_end(&mut self, event: &DragEvent) -> Result<&Board> {
        match event.kind {
            DragKind::Task => self.dispatch(&MoveTask::new(
                event.dragged_id.as_str(),
                event.source_column.clone(),
                event.source_index,
                event.dest_column.clone(),
                event.dest_index,
            )),
            DragKind::Column => self.dispatch(&ReorderColumn::new(
                event.dragged_id.as_str(),
                event.source_index,
                event.dest_index,
            )),
        }
    }
}
