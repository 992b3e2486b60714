pub mod details;
pub mod dialogs;
pub mod list;

pub use list::ModeratorsPage;
