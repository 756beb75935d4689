//! Utility modules
//!
//! Shared helpers for embedding applications.

pub mod logging;
