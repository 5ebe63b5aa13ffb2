//! sysctl subprocess fact source.
//! Respects SNMP_CONFGEN_SYSCTL for pointing at a stub binary in tests.

use async_trait::async_trait;
use tracing::trace;

use crate::facts::{FactSource, ResolutionError};

pub struct SysctlSource {
    sysctl: String,
}

impl SysctlSource {
    pub fn new() -> Self {
        let sysctl =
            std::env::var("SNMP_CONFGEN_SYSCTL").unwrap_or_else(|_| "sysctl".to_string());
        Self { sysctl }
    }
}

impl Default for SysctlSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FactSource for SysctlSource {
    async fn lookup(&self, name: &str) -> Result<String, ResolutionError> {
        trace!("Executing: {} -n {}", self.sysctl, name);

        let output = tokio::process::Command::new(&self.sysctl)
            .args(["-n", name])
            .output()
            .await
            .map_err(|e| ResolutionError::LookupFailed {
                name: name.to_string(),
                reason: e.to_string(),
            })?;

        if !output.status.success() {
            // sysctl exits non-zero for names the kernel does not export
            return Err(ResolutionError::UnknownFact {
                name: name.to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}
