//! Hive Workdir - Sandboxed per-session working directories
//!
//! Confines agent file access to per-identity sandbox directories laid out
//! as `sandbox_root/workspace_id/agent_id/session_id`.

pub mod config;
pub mod error;
pub mod sandbox;
pub mod storage;
pub mod utils;

pub use config::WorkdirConfig;
pub use error::{SandboxError, StorageError, WorkdirError};
pub use sandbox::{SandboxResolver, SessionIdentity};
