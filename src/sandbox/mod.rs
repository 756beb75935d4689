//! Session sandbox
//!
//! Resolves candidate paths into per-identity session directories and
//! rejects anything that would escape them, including through symlinks.

mod identity;
pub(crate) mod paths;
mod resolver;

pub use identity::SessionIdentity;
pub use resolver::SandboxResolver;
