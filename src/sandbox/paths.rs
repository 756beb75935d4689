//! Lexical path helpers
//!
//! String-level path manipulation only; nothing here follows symlinks.

use std::io;
use std::path::{Component, Path, PathBuf};

/// Reinterpret a candidate path as relative to the session root.
///
/// A candidate with a root (or drive prefix) is rebased by dropping the
/// root components, so "/etc/passwd" means "etc/passwd" inside the
/// sandbox and never the real filesystem root.
pub fn rebase_candidate(candidate: &str) -> PathBuf {
    let path = Path::new(candidate);
    if path.has_root() || path.is_absolute() {
        path.components()
            .filter(|c| !matches!(c, Component::RootDir | Component::Prefix(_)))
            .collect()
    } else {
        path.to_path_buf()
    }
}

/// Make a path absolute against the current directory, without touching
/// symlinks.
pub fn absolutize(path: &Path) -> io::Result<PathBuf> {
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        Ok(std::env::current_dir()?.join(path))
    }
}

/// Collapse `.` and `..` components lexically.
///
/// `..` at the root is dropped, matching abspath semantics: you cannot
/// climb above the filesystem root.
pub fn normalize_lexical(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => {
                normalized.push(component.as_os_str());
            }
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            Component::Normal(name) => normalized.push(name),
        }
    }
    normalized
}

/// Canonicalize the longest existing prefix of `path`, then append the
/// missing trailing components lexically.
///
/// Lets a candidate naming a not-yet-existing file resolve, while still
/// following every symlink in the existing portion. A trailing component
/// that exists as a dangling symlink is not skipped over; its NotFound
/// propagates, since following the dead link would bypass the physical
/// containment check.
pub fn canonicalize_existing_prefix(path: &Path) -> io::Result<PathBuf> {
    let mut existing = path.to_path_buf();
    let mut missing: Vec<std::ffi::OsString> = Vec::new();

    loop {
        match existing.canonicalize() {
            Ok(real) => {
                let mut resolved = real;
                for name in missing.iter().rev() {
                    resolved.push(name);
                }
                return Ok(resolved);
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                let is_dangling_link = existing
                    .symlink_metadata()
                    .map(|m| m.file_type().is_symlink())
                    .unwrap_or(false);
                if is_dangling_link {
                    return Err(e);
                }
                match existing.file_name() {
                    Some(name) => {
                        missing.push(name.to_os_string());
                        existing.pop();
                    }
                    None => return Err(e),
                }
            }
            Err(e) => return Err(e),
        }
    }
}
