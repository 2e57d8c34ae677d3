//! Label operations

mod add;
mod delete;
mod update;

pub use add::AddLabel;
pub use delete::DeleteLabel;
pub use update::UpdateLabel;
