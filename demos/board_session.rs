//! Walk a demo board through a short editing session.
//!
//! Usage:
//!   cargo run --example board_session
//!
//! Prints each step's outcome to stderr and the final board snapshot as
//! JSON to stdout.

use cardwall::{AddColumn, AddTask, Board, BoardStore, DragEvent, Result, UpdateColumn};

fn main() {
    if let Err(e) = run() {
        eprintln!("session failed: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let mut store = BoardStore::new(cardwall::seed::demo_board());
    print_order("start", store.board());

    // A fresh card lands at the bottom of its column.
    store.dispatch(&AddTask::new("todo", "Write release notes").with_assignee("Jane Smith"))?;
    let card = store
        .board()
        .column(&"todo".into())?
        .task_ids
        .last()
        .cloned()
        .expect("todo holds the card that was just added");

    // Cap work in progress; the column already holds one card, so the next
    // arrival bounces and the board stays put.
    store.dispatch(&UpdateColumn::new("in-progress").with_wip(1))?;
    let gesture = DragEvent::task(card.as_str(), "todo", 1, "in-progress", 0);
    match store.drag_end(&gesture) {
        Ok(_) => eprintln!("drag unexpectedly accepted"),
        Err(e) => eprintln!("drag rejected: {}", e),
    }

    // Route the card to done instead.
    store.drag_end(&DragEvent::task(card.as_str(), "todo", 1, "done", 1))?;

    // Grow the board and pull the new column in front of done.
    store.dispatch(&AddColumn::new("Review").with_wip(2))?;
    let review = store
        .board()
        .column_order
        .last()
        .cloned()
        .expect("board holds the column that was just added");
    store.drag_end(&DragEvent::column(review.as_str(), 3, 2))?;

    print_order("end", store.board());
    println!("{}", store.board().to_json_pretty()?);
    Ok(())
}

fn print_order(stage: &str, board: &Board) {
    let columns: Vec<String> = board
        .ordered_columns()
        .map(|c| format!("{} ({})", c.title, c.task_ids.len()))
        .collect();
    eprintln!("{}: {}", stage, columns.join(" | "));
}
