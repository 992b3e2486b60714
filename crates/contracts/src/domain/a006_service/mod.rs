pub mod aggregate;
pub mod mutations;

pub use aggregate::{Service, ServiceStats, ServiceStatus};
pub use mutations::{delete_form, status_form};
