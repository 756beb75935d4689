//! Configuration for the workdir sandbox
//!
//! The sandbox root is injected configuration rather than a module-level
//! constant so embedders and tests can point resolvers at isolated roots.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;

/// Workdir sandbox configuration
#[derive(Debug, Deserialize, Clone)]
pub struct WorkdirConfig {
    /// Directory under which all identity-scoped session directories live
    pub sandbox_root: String,

    /// Fold case before comparing canonical paths (case-insensitive
    /// filesystems). Explicit setting, not an OS branch.
    pub case_insensitive_paths: bool,
}

impl Default for WorkdirConfig {
    fn default() -> Self {
        Self {
            sandbox_root: default_sandbox_root().to_string_lossy().into_owned(),
            case_insensitive_paths: false,
        }
    }
}

impl WorkdirConfig {
    /// Load configuration from workdir.toml (if present) with environment
    /// overrides (HIVE_WORKDIR_SANDBOX_ROOT, HIVE_WORKDIR_CASE_INSENSITIVE_PATHS)
    pub fn load() -> Result<Self, ConfigError> {
        let defaults = WorkdirConfig::default();

        let settings = Config::builder()
            .set_default("sandbox_root", defaults.sandbox_root)?
            .set_default("case_insensitive_paths", defaults.case_insensitive_paths)?
            .add_source(File::with_name("workdir").required(false))
            .add_source(Environment::with_prefix("HIVE_WORKDIR").try_parsing(true))
            .build()?;

        let config: WorkdirConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Get the sandbox root as a PathBuf
    pub fn sandbox_root_path(&self) -> PathBuf {
        PathBuf::from(&self.sandbox_root)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.sandbox_root.is_empty() {
            return Err(ConfigError::Message("sandbox_root cannot be empty".into()));
        }
        Ok(())
    }
}

/// Default sandbox root under the invoking user's home directory
fn default_sandbox_root() -> PathBuf {
    std::env::var_os("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".hive")
        .join("workdir")
        .join("workspaces")
}
