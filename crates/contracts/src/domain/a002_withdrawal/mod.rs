pub mod aggregate;
pub mod mutations;

pub use aggregate::{Withdrawal, WithdrawalStats, WithdrawalStatus};
pub use mutations::{
    apply_optimistic_cancel, decline_form, ApproveWithdrawalForm, CancelWithdrawalForm,
    UpdateTransactionIdForm,
};
