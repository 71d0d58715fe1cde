//! Column commands.

mod add;
mod delete;
mod reorder;
mod update;

pub use add::AddColumn;
pub use delete::DeleteColumn;
pub use reorder::ReorderColumn;
pub use update::UpdateColumn;
