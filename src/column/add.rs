//! AddColumn command

use crate::error::{BoardError, Result};
use crate::transition::Transition;
use crate::types::{Board, Column, ColumnId};
use serde::Deserialize;

/// Append a new empty column at the right edge of the board.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddColumn {
    pub title: String,
    /// Header color; defaults off the title when absent.
    #[serde(default)]
    pub color: Option<String>,
    /// WIP cap; `0` or absent means unlimited.
    #[serde(default)]
    pub wip: Option<usize>,
}

impl AddColumn {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            color: None,
            wip: None,
        }
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

/// Accept `RRGGBB` or `#RRGGBB`, stored lowercase without the hash.
pub(super) fn normalize_color(color: &str) -> Result<String> {
    let hex = color.trim().trim_start_matches('#');
    if hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()) {
        Ok(hex.to_ascii_lowercase())
    } else {
        Err(BoardError::invalid_value(
            "color",
            format!("'{}' is not a 6-digit hex color", color),
        ))
    }
}

impl Transition for AddColumn {
    fn label(&self) -> &'static str {
        "add_column"
    }

    fn apply(&self, board: &Board) -> Result<Board> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(BoardError::missing_field("title"));
        }

        let mut column = Column::new(ColumnId::new(), title);
        if let Some(color) = &self.color {
            column.color = normalize_color(color)?;
        }
        column = column.with_wip(self.wip.unwrap_or(0));

        let mut next = board.clone();
        next.column_order.push(column.id.clone());
        next.columns.insert(column.id.clone(), column);
        Ok(next)
    }
}
