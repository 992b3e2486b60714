pub mod aggregate;
pub mod mutations;

pub use aggregate::{Moderator, ModeratorRole, ModeratorStats, ModeratorStatus};
pub use mutations::{delete_form, status_form, RoleChangeForm};
