//! Column operations

mod add;
mod delete;
mod reorder;
mod update;

pub use add::AddColumn;
pub use delete::DeleteColumn;
pub use reorder::ReorderColumns;
pub use update::UpdateColumn;
