pub mod aggregate;
pub mod mutations;

pub use aggregate::{User, UserStats, UserStatus};
pub use mutations::{delete_form, status_form, BalanceForm, DiscountForm};
