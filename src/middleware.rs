//! Management-daemon client: the seam for fetching the SNMP service
//! configuration record and the product-variant flag.

pub mod client;
pub mod types;

pub use client::MidcltClient;
pub use types::SnmpConfig;

use async_trait::async_trait;
use thiserror::Error;

/// Management call failure or malformed reply. Propagated unmodified;
/// no local recovery.
#[derive(Debug, Error)]
pub enum ConfigFetchError {
    #[error("management call {method} failed: {reason}")]
    CallFailed { method: String, reason: String },

    #[error("malformed reply from {method}: {source}")]
    Malformed {
        method: String,
        #[source]
        source: serde_json::Error,
    },
}

#[async_trait]
pub trait ManagementClient: Send + Sync {
    /// Fetch the SNMP service configuration record.
    async fn snmp_config(&self) -> Result<SnmpConfig, ConfigFetchError>;

    /// Resolve which product variant is running.
    async fn is_freenas_system(&self) -> Result<bool, ConfigFetchError>;
}

/// Fetch the configuration record and fold the variant flag into it,
/// yielding the fully-resolved record the renderer consumes.
pub async fn fetch_resolved(
    client: &dyn ManagementClient,
) -> Result<SnmpConfig, ConfigFetchError> {
    let mut config = client.snmp_config().await?;
    config.is_freenas_system = client.is_freenas_system().await?;
    Ok(config)
}
