pub mod aggregate;
pub mod mutations;

pub use aggregate::{Affiliate, AffiliateStats, AffiliateStatus};
pub use mutations::{status_form, PayoutForm};
