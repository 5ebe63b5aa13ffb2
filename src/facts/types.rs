//! HostFacts snapshot and the all-or-nothing gather step.

use std::path::Path;

use tracing::debug;

use crate::facts::{FactSource, ResolutionError};

/// Immutable snapshot of machine identity, taken once per render.
#[derive(Debug, Clone)]
pub struct HostFacts {
    pub version: String,
    pub machine: String,
    pub model: String,
    pub clockrate: String,
    pub ostype: String,
    pub osrelease: String,
    pub osrevision: String,
}

impl HostFacts {
    /// Resolve every required fact up front. Any miss fails the whole
    /// gather; the renderer never sees a partial snapshot.
    pub async fn gather(
        source: &dyn FactSource,
        version_file: &Path,
    ) -> Result<Self, ResolutionError> {
        let version = tokio::fs::read_to_string(version_file)
            .await
            .map_err(|e| ResolutionError::VersionFile {
                path: version_file.display().to_string(),
                source: e,
            })?
            .trim()
            .to_string();

        let facts = Self {
            version,
            machine: source.lookup("hw.machine").await?,
            model: source.lookup("hw.model").await?,
            clockrate: source.lookup("hw.clockrate").await?,
            ostype: source.lookup("kern.ostype").await?,
            osrelease: source.lookup("kern.osrelease").await?,
            osrevision: source.lookup("kern.osrevision").await?,
        };

        debug!(
            "Gathered host facts: {} {} on {} {}",
            facts.machine, facts.model, facts.ostype, facts.osrelease
        );

        Ok(facts)
    }
}
