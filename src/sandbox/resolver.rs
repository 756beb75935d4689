//! Sandbox path resolution
//!
//! The security boundary for agent file access. Every candidate path is
//! validated twice: once lexically (traversal via `..`) and once
//! physically (redirection via symlinks). Only paths confined to the
//! session directory survive both checks.

use log::{debug, warn};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::config::WorkdirConfig;
use crate::error::SandboxError;
use crate::sandbox::identity::SessionIdentity;
use crate::sandbox::paths;

/// Resolves candidate paths into per-identity session directories.
///
/// Stateless and reentrant; concurrent calls race only on session
/// directory creation, which is idempotent.
pub struct SandboxResolver {
    sandbox_root: PathBuf,
    case_insensitive: bool,
}

impl SandboxResolver {
    pub fn new(config: &WorkdirConfig) -> Self {
        Self {
            sandbox_root: config.sandbox_root_path(),
            case_insensitive: config.case_insensitive_paths,
        }
    }

    /// Build a resolver over an explicit root, bypassing configuration
    pub fn with_root(sandbox_root: impl Into<PathBuf>, case_insensitive: bool) -> Self {
        Self {
            sandbox_root: sandbox_root.into(),
            case_insensitive,
        }
    }

    /// Session directory for an identity, as joined under the sandbox root
    pub fn session_dir(&self, identity: &SessionIdentity) -> PathBuf {
        self.sandbox_root.join(identity.relative_dir())
    }

    /// Resolve a candidate path into the identity's session directory.
    ///
    /// Pseudo-absolute candidates are rebased into the session directory;
    /// relative candidates join onto it; an empty candidate means the
    /// session root itself. The returned path is the lexical resolution,
    /// so legitimate in-sandbox symlinks stay visible to later I/O; the
    /// physical resolution only gates the result.
    pub fn resolve(
        &self,
        candidate: &str,
        identity: &SessionIdentity,
    ) -> Result<PathBuf, SandboxError> {
        identity.validate()?;

        // Ensure session directory exists: root/workspace_id/agent_id/session_id
        let session_dir =
            paths::normalize_lexical(&paths::absolutize(&self.session_dir(identity))?);
        fs::create_dir_all(&session_dir)?;

        // Lexical resolution: string normalization only, no symlink follow
        let lexical =
            paths::normalize_lexical(&session_dir.join(paths::rebase_candidate(candidate)));

        if !lexical.starts_with(&session_dir) {
            warn!("Rejected '{}': lexically outside the session sandbox", candidate);
            return Err(SandboxError::SandboxEscape {
                path: candidate.to_string(),
                via_symlink: false,
            });
        }

        // Physical resolution: follow symlinks in both paths and compare
        // the real locations
        let real_session_dir = self.fold_case(
            &session_dir
                .canonicalize()
                .map_err(|e| resolution_error(e, candidate))?,
        );
        let real_path = self.fold_case(
            &paths::canonicalize_existing_prefix(&lexical)
                .map_err(|e| resolution_error(e, candidate))?,
        );

        if !real_path.starts_with(&real_session_dir) {
            warn!(
                "Rejected '{}': resolves via symlink outside the session sandbox",
                candidate
            );
            return Err(SandboxError::SandboxEscape {
                path: candidate.to_string(),
                via_symlink: true,
            });
        }

        debug!("Resolved '{}' to {}", candidate, lexical.display());
        Ok(lexical)
    }

    /// Fold path case when the host filesystem is case-insensitive, so
    /// differently-cased spellings of the same location compare equal.
    ///
    /// Folds component by component: names with no valid UTF-8 form have
    /// no case to fold and keep their raw bytes, so two distinct
    /// non-UTF-8 names never collapse into the same spelling.
    fn fold_case(&self, path: &Path) -> PathBuf {
        if !self.case_insensitive {
            return path.to_path_buf();
        }
        let mut folded = PathBuf::new();
        for component in path.components() {
            match component.as_os_str().to_str() {
                Some(name) => folded.push(name.to_lowercase()),
                None => folded.push(component.as_os_str()),
            }
        }
        folded
    }
}

/// errno for "too many levels of symbolic links"
#[cfg(target_os = "linux")]
const ELOOP: i32 = 40;
#[cfg(not(target_os = "linux"))]
const ELOOP: i32 = 62;

/// Classify a canonicalization failure: symlink cycles get their own
/// error kind, everything else propagates as plain I/O
fn resolution_error(error: io::Error, candidate: &str) -> SandboxError {
    if error.raw_os_error() == Some(ELOOP) {
        SandboxError::CircularSymlink(candidate.to_string())
    } else {
        SandboxError::IoError(error)
    }
}
