//! Common types and traits for all admin resources

pub mod resource;
pub mod resource_id;

// Re-exports
pub use resource::{AdminResource, ResourceStatus, StatusTone};
pub use resource_id::deserialize_id;
