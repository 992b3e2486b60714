//! Shared types and state machines for the SMM admin panel.
//!
//! Everything here is platform-neutral: the frontend wraps these types in
//! reactive signals, tests drive them directly.

pub mod domain;
pub mod shared;
pub mod usecases;
