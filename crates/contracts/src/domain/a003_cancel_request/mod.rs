pub mod aggregate;
pub mod mutations;

pub use aggregate::{CancelRequest, CancelRequestStats, CancelRequestStatus};
pub use mutations::{decline_form, ApproveCancelForm};
