//! Column type: a workflow stage holding an ordered list of task ids.

use super::ids::{ColumnId, TaskId};
use crate::auto_color::auto_color;
use serde::{Deserialize, Deserializer, Serialize};
use std::num::NonZeroUsize;

/// Accept `0` (and absent) as "no limit" when reading drafts or snapshots.
fn wip_from_raw<'de, D>(deserializer: D) -> Result<Option<NonZeroUsize>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<usize>::deserialize(deserializer)?;
    Ok(raw.and_then(NonZeroUsize::new))
}

/// A column defines a workflow stage.
///
/// `task_ids` is the single source of truth for in-column ordering; nothing
/// else in the board encodes position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    pub id: ColumnId,
    pub title: String,
    /// 6-char hex color without `#`.
    #[serde(default)]
    pub color: String,
    /// Work-in-progress cap. `None` = unlimited; incoming `0` normalizes to
    /// `None`.
    #[serde(
        default,
        deserialize_with = "wip_from_raw",
        skip_serializing_if = "Option::is_none"
    )]
    pub wip: Option<NonZeroUsize>,
    /// Ordered task ids, top of the column first.
    #[serde(default)]
    pub task_ids: Vec<TaskId>,
}

impl Column {
    /// Create an empty column with a deterministic default color.
    pub fn new(id: impl Into<ColumnId>, title: impl Into<String>) -> Self {
        let title = title.into();
        let color = auto_color(&title).to_string();
        Self {
            id: id.into(),
            title,
            color,
            wip: None,
            task_ids: Vec::new(),
        }
    }

    /// Set an explicit color.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// Set the WIP cap. `0` means unlimited.
    pub fn with_wip(mut self, wip: usize) -> Self {
        self.wip = NonZeroUsize::new(wip);
        self
    }

    /// True when a WIP cap is set and the column already holds that many
    /// tasks, so one more add or incoming move must be rejected.
    pub fn at_capacity(&self) -> bool {
        match self.wip {
            Some(limit) => self.task_ids.len() >= limit.get(),
            None => false,
        }
    }

    /// Index of a task within this column, if present.
    pub fn position_of(&self, id: &TaskId) -> Option<usize> {
        self.task_ids.iter().position(|t| t == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_creation() {
        let col = Column::new("todo", "To Do");
        assert_eq!(col.id.as_str(), "todo");
        assert_eq!(col.title, "To Do");
        assert!(col.wip.is_none());
        assert!(col.task_ids.is_empty());
        // Default color comes off the palette
        assert_eq!(col.color.len(), 6);
    }

    #[test]
    fn test_with_wip_zero_means_unlimited() {
        let col = Column::new("todo", "To Do").with_wip(0);
        assert!(col.wip.is_none());
        let col = Column::new("doing", "Doing").with_wip(3);
        assert_eq!(col.wip.map(|w| w.get()), Some(3));
    }

    #[test]
    fn test_at_capacity() {
        let mut col = Column::new("doing", "Doing").with_wip(2);
        assert!(!col.at_capacity());
        col.task_ids.push(TaskId::from("t1"));
        assert!(!col.at_capacity());
        col.task_ids.push(TaskId::from("t2"));
        assert!(col.at_capacity());

        // Unlimited columns never hit capacity
        let mut open = Column::new("todo", "To Do");
        for i in 0..50 {
            open.task_ids.push(TaskId::from(format!("t{}", i)));
        }
        assert!(!open.at_capacity());
    }

    #[test]
    fn test_position_of() {
        let mut col = Column::new("todo", "To Do");
        col.task_ids.push(TaskId::from("a"));
        col.task_ids.push(TaskId::from("b"));
        assert_eq!(col.position_of(&TaskId::from("b")), Some(1));
        assert_eq!(col.position_of(&TaskId::from("z")), None);
    }

    #[test]
    fn test_serde_camel_case_and_wip_zero() {
        let col = Column::new("todo", "To Do").with_wip(2);
        let json = serde_json::to_string(&col).unwrap();
        assert!(json.contains("\"taskIds\""));
        assert!(json.contains("\"wip\":2"));

        // A snapshot written with wip: 0 reads back as unlimited
        let parsed: Column = serde_json::from_str(
            r#"{"id":"todo","title":"To Do","color":"1d76db","wip":0,"taskIds":["task-1"]}"#,
        )
        .unwrap();
        assert!(parsed.wip.is_none());
        assert_eq!(parsed.task_ids.len(), 1);
    }

    #[test]
    fn test_unlimited_wip_not_serialized() {
        let col = Column::new("todo", "To Do");
        let json = serde_json::to_string(&col).unwrap();
        assert!(!json.contains("wip"));
    }
}
