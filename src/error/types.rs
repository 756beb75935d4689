//! Error types
//!
//! Defines domain-specific error types for each module of the workdir sandbox.

use std::fmt;
use std::io;

/// Sandbox resolution errors
///
/// Every rejection of a candidate path is one of these kinds; callers
/// pattern-match instead of parsing message strings. Escape messages cite
/// the original candidate path, never the resolved real location.
#[derive(Debug)]
pub enum SandboxError {
    /// One or more identity segments is empty; payload names them
    InvalidIdentity(String),
    /// Lexical or physical resolution falls outside the session directory
    SandboxEscape { path: String, via_symlink: bool },
    /// Physical resolution hit a symlink cycle
    CircularSymlink(String),
    /// Any other filesystem error, propagated unchanged
    IoError(io::Error),
}

impl fmt::Display for SandboxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SandboxError::InvalidIdentity(fields) => {
                write!(f, "Invalid session identity: {} must not be empty", fields)
            }
            SandboxError::SandboxEscape { path, via_symlink: false } => {
                write!(f, "Access denied: path '{}' is outside the session sandbox", path)
            }
            SandboxError::SandboxEscape { path, via_symlink: true } => {
                write!(
                    f,
                    "Access denied: path '{}' resolves via symlink outside the session sandbox",
                    path
                )
            }
            SandboxError::CircularSymlink(path) => {
                write!(f, "Access denied: circular symlink detected at '{}'", path)
            }
            SandboxError::IoError(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for SandboxError {}

impl From<io::Error> for SandboxError {
    fn from(error: io::Error) -> Self {
        SandboxError::IoError(error)
    }
}

/// Storage module errors
#[derive(Debug)]
pub enum StorageError {
    FileNotFound(String),
    DirectoryNotFound(String),
    NotAFile(String),
    NotADirectory(String),
    Sandbox(SandboxError),
    IoError(io::Error),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::FileNotFound(p) => write!(f, "File not found: {}", p),
            StorageError::DirectoryNotFound(p) => write!(f, "Directory not found: {}", p),
            StorageError::NotAFile(p) => write!(f, "Not a file: {}", p),
            StorageError::NotADirectory(p) => write!(f, "Not a directory: {}", p),
            StorageError::Sandbox(e) => write!(f, "Sandbox error: {}", e),
            StorageError::IoError(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for StorageError {}

impl From<SandboxError> for StorageError {
    fn from(error: SandboxError) -> Self {
        StorageError::Sandbox(error)
    }
}

impl From<io::Error> for StorageError {
    fn from(error: io::Error) -> Self {
        StorageError::IoError(error)
    }
}

/// General workdir error that encompasses all error types
#[derive(Debug)]
pub enum WorkdirError {
    Sandbox(SandboxError),
    Storage(StorageError),
    Config(config::ConfigError),
    IoError(io::Error),
}

impl fmt::Display for WorkdirError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorkdirError::Sandbox(e) => write!(f, "Sandbox error: {}", e),
            WorkdirError::Storage(e) => write!(f, "Storage error: {}", e),
            WorkdirError::Config(e) => write!(f, "Configuration error: {}", e),
            WorkdirError::IoError(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for WorkdirError {}

impl From<SandboxError> for WorkdirError {
    fn from(error: SandboxError) -> Self {
        WorkdirError::Sandbox(error)
    }
}

impl From<StorageError> for WorkdirError {
    fn from(error: StorageError) -> Self {
        WorkdirError::Storage(error)
    }
}

impl From<config::ConfigError> for WorkdirError {
    fn from(error: config::ConfigError) -> Self {
        WorkdirError::Config(error)
    }
}

impl From<io::Error> for WorkdirError {
    fn from(error: io::Error) -> Self {
        WorkdirError::IoError(error)
    }
}
