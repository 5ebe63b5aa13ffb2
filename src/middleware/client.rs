//! midclt subprocess client for the management daemon.
//! Respects SNMP_CONFGEN_MIDCLT for pointing at a stub binary in tests.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::middleware::{ConfigFetchError, ManagementClient, SnmpConfig};

pub struct MidcltClient {
    midclt: String,
}

impl MidcltClient {
    pub fn new() -> Self {
        let midclt =
            std::env::var("SNMP_CONFGEN_MIDCLT").unwrap_or_else(|_| "midclt".to_string());
        Self { midclt }
    }

    async fn call<T: DeserializeOwned>(&self, method: &str) -> Result<T, ConfigFetchError> {
        debug!("Executing: {} call {}", self.midclt, method);

        let output = tokio::process::Command::new(&self.midclt)
            .args(["call", method])
            .output()
            .await
            .map_err(|e| ConfigFetchError::CallFailed {
                method: method.to_string(),
                reason: e.to_string(),
            })?;

        if !output.status.success() {
            return Err(ConfigFetchError::CallFailed {
                method: method.to_string(),
                reason: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        parse_reply(method, &String::from_utf8_lossy(&output.stdout))
    }
}

impl Default for MidcltClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Decode one JSON reply body. Split out of `call` so malformed-reply
/// handling is testable without a subprocess.
pub(crate) fn parse_reply<T: DeserializeOwned>(
    method: &str,
    body: &str,
) -> Result<T, ConfigFetchError> {
    serde_json::from_str(body.trim()).map_err(|e| ConfigFetchError::Malformed {
        method: method.to_string(),
        source: e,
    })
}

#[async_trait]
impl ManagementClient for MidcltClient {
    async fn snmp_config(&self) -> Result<SnmpConfig, ConfigFetchError> {
        self.call("snmp.config").await
    }

    async fn is_freenas_system(&self) -> Result<bool, ConfigFetchError> {
        self.call("system.is_freenas_system").await
    }
}
