//! Seed boards: the default column set and a small demo board.

use crate::types::{Board, Column, ColumnId, Priority, Task, TaskId};
use chrono::NaiveDate;

/// The three-stage column set new boards start with.
pub fn default_columns() -> Vec<Column> {
    vec![
        Column::new("todo", "To Do"),
        Column::new("in-progress", "In Progress"),
        Column::new("done", "Done"),
    ]
}

/// An empty board with the default columns.
pub fn starter_board() -> Board {
    let mut board = Board::new();
    for column in default_columns() {
        board.column_order.push(column.id.clone());
        board.columns.insert(column.id.clone(), column);
    }
    board
}

fn demo_task(
    id: &str,
    title: &str,
    description: &str,
    priority: Priority,
    assignee: &str,
    due: (i32, u32, u32),
    column: &str,
) -> Task {
    let mut task = Task::new(title, ColumnId::from(column))
        .with_description(description)
        .with_priority(priority)
        .with_assignee(assignee);
    task.id = TaskId::from(id);
    task.due_date = NaiveDate::from_ymd_opt(due.0, due.1, due.2);
    task
}

/// The starter board populated with three sample tasks, one per column.
/// Used by docs and integration tests.
pub fn demo_board() -> Board {
    let mut board = starter_board();
    let tasks = [
        demo_task(
            "task-1",
            "Setup project structure",
            "Create the basic folder structure and install dependencies",
            Priority::High,
            "John Doe",
            (2025, 2, 15),
            "todo",
        ),
        demo_task(
            "task-2",
            "Design UI components",
            "Create reusable UI components using Ant Design",
            Priority::Medium,
            "Jane Smith",
            (2025, 2, 20),
            "in-progress",
        ),
        demo_task(
            "task-3",
            "Implement authentication",
            "Add user login and registration functionality",
            Priority::High,
            "Bob Johnson",
            (2025, 2, 25),
            "done",
        ),
    ];
    for task in tasks {
        if let Some(column) = board.columns.get_mut(&task.status) {
            column.task_ids.push(task.id.clone());
        }
        board.tasks.insert(task.id.clone(), task);
    }
    board
}
