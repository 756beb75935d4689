//! Session file storage
//!
//! Thin file operations on top of the sandbox resolver. Every entry point
//! resolves its target through the sandbox first; nothing here touches a
//! path the resolver has not validated.

pub mod operations;

pub use operations::{create_directory, delete_file, list_directory, read_file, write_file};
