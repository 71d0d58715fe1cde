//! Drag gesture wire format.
//!
//! Frontends report the end of a drag as a flat JSON object; the store maps
//! it onto a move or reorder transition. Cancelled gestures (pointer released
//! outside every drop zone) carry a null destination and are filtered by the
//! presentation layer before they reach the engine, so the destination fields
//! here are not optional.

use super::ids::ColumnId;
use serde::{Deserialize, Serialize};

/// What was picked up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DragKind {
    #[default]
    Task,
    Column,
}

/// The end of a drag gesture as reported by the UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DragEvent {
    /// Id of the dragged task, or of the dragged column when `kind` is
    /// `Column`.
    pub dragged_id: String,
    #[serde(default)]
    pub kind: DragKind,
    /// Column the drag started in. Column drags start from the board-level
    /// droppable, so this is not consulted for them.
    #[serde(rename = "sourceColumnId")]
    pub source_column: ColumnId,
    pub source_index: usize,
    #[serde(rename = "destColumnId")]
    pub dest_column: ColumnId,
    pub dest_index: usize,
}

impl DragEvent {
    /// A task drag between (or within) columns.
    pub fn task(
        dragged_id: impl Into<String>,
        source_column: impl Into<ColumnId>,
        source_index: usize,
        dest_column: impl Into<ColumnId>,
        dest_index: usize,
    ) -> Self {
        Self {
            dragged_id: dragged_id.into(),
            kind: DragKind::Task,
            source_column: source_column.into(),
            source_index,
            dest_column: dest_column.into(),
            dest_index,
        }
    }

    /// A column drag along the board. Both column fields carry the
    /// board-level droppable id.
    pub fn column(dragged_id: impl Into<String>, source_index: usize, dest_index: usize) -> Self {
        Self {
            dragged_id: dragged_id.into(),
            kind: DragKind::Column,
            source_column: ColumnId::from("board"),
            source_index,
            dest_column: ColumnId::from("board"),
            dest_index,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_shape() {
        let event = DragEvent::task("task-1", "todo", 0, "done", 1);
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"draggedId\":\"task-1\""));
        assert!(json.contains("\"sourceColumnId\":\"todo\""));
        assert!(json.contains("\"sourceIndex\":0"));
        assert!(json.contains("\"destColumnId\":\"done\""));
        assert!(json.contains("\"destIndex\":1"));
        assert!(json.contains("\"kind\":\"task\""));
    }

    #[test]
    fn test_kind_defaults_to_task() {
        let event: DragEvent = serde_json::from_str(
            r#"{"draggedId":"task-1","sourceColumnId":"todo","sourceIndex":0,
                "destColumnId":"todo","destIndex":2}"#,
        )
        .unwrap();
        assert_eq!(event.kind, DragKind::Task);
        assert_eq!(event.dest_column.as_str(), "todo");
    }

    #[test]
    fn test_cancelled_gesture_does_not_parse() {
        // The presentation layer drops null-destination events; one leaking
        // through is a parse error, not a silent move.
        let result: Result<DragEvent, _> = serde_json::from_str(
            r#"{"draggedId":"task-1","sourceColumnId":"todo","sourceIndex":0,
                "destColumnId":null,"destIndex":null}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_column_drag_round_trip() {
        let event = DragEvent::column("in-progress", 1, 0);
        let json = serde_json::to_string(&event).unwrap();
        let parsed: DragEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, event);
        assert_eq!(parsed.kind, DragKind::Column);
    }
}
