//! Host introspection: the fact-source seam and the HostFacts snapshot.

pub mod sysctl;
pub mod types;

pub use sysctl::SysctlSource;
pub use types::HostFacts;

use async_trait::async_trait;
use thiserror::Error;

/// Appliance version string lives here, one line.
pub const VERSION_FILE: &str = "/etc/version";

/// Host-fact or version-file lookup failure. Required facts have no
/// defaults; a miss aborts the whole render.
#[derive(Debug, Error)]
pub enum ResolutionError {
    #[error("unknown host fact: {name}")]
    UnknownFact { name: String },

    #[error("host fact lookup for {name} failed: {reason}")]
    LookupFailed { name: String, reason: String },

    #[error("cannot read version file {path}: {source}")]
    VersionFile {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

#[async_trait]
pub trait FactSource: Send + Sync {
    /// Resolve a single named host fact to its scalar value.
    async fn lookup(&self, name: &str) -> Result<String, ResolutionError>;
}
