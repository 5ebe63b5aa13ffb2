//! SNMP service configuration record, as replied by the management daemon.

use serde::Deserialize;

/// Dynamic, partially-optional configuration for the SNMP agent.
/// `is_freenas_system` is not part of the stored record; it is resolved
/// through a separate management call and folded in before rendering.
#[derive(Debug, Clone, Deserialize)]
pub struct SnmpConfig {
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub contact: Option<String>,

    #[serde(default)]
    pub v3: bool,
    #[serde(default)]
    pub v3_username: Option<String>,
    #[serde(default)]
    pub v3_password: Option<String>,
    #[serde(default = "default_authtype")]
    pub v3_authtype: String,
    #[serde(default)]
    pub v3_privproto: Option<String>,
    #[serde(default)]
    pub v3_privpassphrase: Option<String>,

    #[serde(default = "default_community")]
    pub community: String,

    /// Free-form operator additions, appended verbatim to the rendered file.
    #[serde(default)]
    pub options: String,

    #[serde(skip)]
    pub is_freenas_system: bool,
}

fn default_authtype() -> String {
    "SHA".to_string()
}

fn default_community() -> String {
    "public".to_string()
}

impl Default for SnmpConfig {
    fn default() -> Self {
        Self {
            location: None,
            contact: None,
            v3: false,
            v3_username: None,
            v3_password: None,
            v3_authtype: default_authtype(),
            v3_privproto: None,
            v3_privpassphrase: None,
            community: default_community(),
            options: String::new(),
            is_freenas_system: false,
        }
    }
}
