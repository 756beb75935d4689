//! Storage operations
//!
//! File system operations for agent sessions: list, read, write, delete,
//! and directory creation.

use log::{error, info};
use std::fs;
use std::path::Path;

use crate::error::StorageError;
use crate::sandbox::{SandboxResolver, SessionIdentity};

/// List the contents of a directory inside the session sandbox.
///
/// Entries are sorted; directories carry a trailing slash.
pub fn list_directory(
    resolver: &SandboxResolver,
    identity: &SessionIdentity,
    path: &str,
) -> Result<Vec<String>, StorageError> {
    let dir_path = resolver.resolve(path, identity)?;

    if !dir_path.exists() {
        return Err(StorageError::DirectoryNotFound(path.to_string()));
    }
    if !dir_path.is_dir() {
        return Err(StorageError::NotADirectory(path.to_string()));
    }

    let mut entries = Vec::new();
    for entry in fs::read_dir(&dir_path)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().to_string();
        if entry.file_type()?.is_dir() {
            entries.push(format!("{}/", name));
        } else {
            entries.push(name);
        }
    }
    entries.sort();

    info!("Listed '{}' - {} entries", path, entries.len());
    Ok(entries)
}

/// Read a file inside the session sandbox
pub fn read_file(
    resolver: &SandboxResolver,
    identity: &SessionIdentity,
    path: &str,
) -> Result<Vec<u8>, StorageError> {
    let file_path = resolver.resolve(path, identity)?;

    if !file_path.exists() {
        return Err(StorageError::FileNotFound(path.to_string()));
    }
    if !file_path.is_file() {
        return Err(StorageError::NotAFile(path.to_string()));
    }

    let contents = fs::read(&file_path).inspect_err(|e| {
        error!("Failed to read '{}': {}", path, e);
    })?;

    info!("Read '{}' - {} bytes", path, contents.len());
    Ok(contents)
}

/// Write a file inside the session sandbox.
///
/// The parent directory must already exist; an existing file is
/// overwritten.
pub fn write_file(
    resolver: &SandboxResolver,
    identity: &SessionIdentity,
    path: &str,
    contents: &[u8],
) -> Result<(), StorageError> {
    let file_path = resolver.resolve(path, identity)?;

    if let Some(parent) = file_path.parent() {
        // error messages cite the caller's spelling, not the resolved
        // session-dir location
        if !parent.exists() {
            return Err(StorageError::DirectoryNotFound(parent_of(path)));
        }
        if !parent.is_dir() {
            return Err(StorageError::NotADirectory(parent_of(path)));
        }
    }

    fs::write(&file_path, contents).inspect_err(|e| {
        error!("Failed to write '{}': {}", path, e);
    })?;

    info!("Wrote '{}' - {} bytes", path, contents.len());
    Ok(())
}

/// Parent of a caller-supplied path, as the caller spelled it
fn parent_of(path: &str) -> String {
    Path::new(path)
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(|p| p.to_string_lossy().to_string())
        .unwrap_or_else(|| ".".to_string())
}

/// Delete a file inside the session sandbox
pub fn delete_file(
    resolver: &SandboxResolver,
    identity: &SessionIdentity,
    path: &str,
) -> Result<(), StorageError> {
    let file_path = resolver.resolve(path, identity)?;

    if !file_path.exists() {
        return Err(StorageError::FileNotFound(path.to_string()));
    }
    if !file_path.is_file() {
        return Err(StorageError::NotAFile(path.to_string()));
    }

    fs::remove_file(&file_path).inspect_err(|e| {
        error!("Failed to delete '{}': {}", path, e);
    })?;

    info!("Deleted '{}'", path);
    Ok(())
}

/// Create a directory (and missing parents) inside the session sandbox.
/// Idempotent.
pub fn create_directory(
    resolver: &SandboxResolver,
    identity: &SessionIdentity,
    path: &str,
) -> Result<(), StorageError> {
    let dir_path = resolver.resolve(path, identity)?;

    fs::create_dir_all(&dir_path).inspect_err(|e| {
        error!("Failed to create directory '{}': {}", path, e);
    })?;

    info!("Created directory '{}'", path);
    Ok(())
}
