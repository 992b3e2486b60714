pub mod config;
pub mod debounce;
pub mod envelope;
pub mod error;
pub mod grouping;
pub mod list_state;
pub mod money;
pub mod mutation;
pub mod pagination;
pub mod query;
pub mod selection;
