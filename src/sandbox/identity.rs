//! Session identity
//!
//! The 3-level identity tuple that selects one session directory.

use std::path::{Path, PathBuf};

use crate::error::SandboxError;

/// Identity of one agent session: workspace, agent, and session ids.
///
/// Segments are opaque tokens; the only structural requirement is that
/// each is non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionIdentity {
    pub workspace_id: String,
    pub agent_id: String,
    pub session_id: String,
}

impl SessionIdentity {
    pub fn new(
        workspace_id: impl Into<String>,
        agent_id: impl Into<String>,
        session_id: impl Into<String>,
    ) -> Self {
        Self {
            workspace_id: workspace_id.into(),
            agent_id: agent_id.into(),
            session_id: session_id.into(),
        }
    }

    /// Check that all three segments are present
    pub fn validate(&self) -> Result<(), SandboxError> {
        let mut missing = Vec::new();
        if self.workspace_id.is_empty() {
            missing.push("workspace_id");
        }
        if self.agent_id.is_empty() {
            missing.push("agent_id");
        }
        if self.session_id.is_empty() {
            missing.push("session_id");
        }

        if missing.is_empty() {
            Ok(())
        } else {
            Err(SandboxError::InvalidIdentity(missing.join(", ")))
        }
    }

    /// Session directory path relative to the sandbox root
    pub(crate) fn relative_dir(&self) -> PathBuf {
        Path::new(&self.workspace_id)
            .join(&self.agent_id)
            .join(&self.session_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complete_identity_validates() {
        let identity = SessionIdentity::new("ws", "agent", "sess");
        assert!(identity.validate().is_ok());
        assert_eq!(identity.relative_dir(), Path::new("ws/agent/sess"));
    }

    #[test]
    fn empty_segments_are_named() {
        let identity = SessionIdentity::new("ws", "", "");
        match identity.validate() {
            Err(SandboxError::InvalidIdentity(fields)) => {
                assert_eq!(fields, "agent_id, session_id");
            }
            other => panic!("expected InvalidIdentity, got {:?}", other),
        }
    }
}
