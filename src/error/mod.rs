//! Error handling
//!
//! Defines error types for the workdir sandbox.

pub mod types;

pub use types::*;
