//! snmpd.conf renderer.
//!
//! Pure transform over a resolved HostFacts + SnmpConfig pair. The daemon
//! parses the result with a strict line-oriented grammar, so line order and
//! punctuation here are load-bearing. All lookups happen before this point;
//! rendering itself cannot fail.

use crate::facts::HostFacts;
use crate::middleware::SnmpConfig;

const AGENT_ADDRESS: &str = "agentAddress udp:161,udp6:161,unix:/var/run/snmpd.sock";
const SYS_OBJECT_ID_BASE: &str = "1.3.6.1.4.1.50536.3";
const DEFAULT_LOCATION: &str = "unknown";
const DEFAULT_CONTACT: &str = "unknown@localhost";

/// Render the complete configuration file. One directive per line, fixed
/// order, `config.options` appended verbatim at the end.
pub fn render(facts: &HostFacts, config: &SnmpConfig) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push(AGENT_ADDRESS.to_string());

    lines.push(format!(
        "sysLocation {}",
        non_empty(&config.location).unwrap_or(DEFAULT_LOCATION)
    ));
    lines.push(format!(
        "sysContact {}",
        non_empty(&config.contact).unwrap_or(DEFAULT_CONTACT)
    ));

    lines.push(format!(
        "sysDescr {}. Hardware: {} {} running at {}. Software: {} {} (revision {})",
        facts.version,
        facts.machine,
        facts.model,
        facts.clockrate,
        facts.ostype,
        facts.osrelease,
        facts.osrevision
    ));

    let variant_arc = if config.is_freenas_system { 1 } else { 2 };
    lines.push(format!("sysObjectID {}.{}", SYS_OBJECT_ID_BASE, variant_arc));

    lines.push("master agentx".to_string());

    if config.v3 {
        // Both credentials or nothing: a half-specified user would lock
        // operators out with a directive the daemon accepts.
        if let (Some(username), Some(password)) = (
            non_empty(&config.v3_username),
            non_empty(&config.v3_password),
        ) {
            let create = match (
                non_empty(&config.v3_privproto),
                non_empty(&config.v3_privpassphrase),
            ) {
                (Some(privproto), Some(privpassphrase)) => format!(
                    "createUser {} {} \"{}\" {} \"{}\"",
                    username, config.v3_authtype, password, privproto, privpassphrase
                ),
                _ => format!(
                    "createUser {} {} \"{}\"",
                    username, config.v3_authtype, password
                ),
            };
            lines.push(create);
            lines.push(format!("rwuser {}", username));
        }
    } else {
        lines.push(format!("rocommunity \"{}\" default", config.community));
        lines.push(format!("rocommunity6 \"{}\" default", config.community));
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out.push_str(&config.options);
    out
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn facts() -> HostFacts {
        HostFacts {
            version: "TEST-1".to_string(),
            machine: "amd64".to_string(),
            model: "QEMU".to_string(),
            clockrate: "2000 MHz".to_string(),
            ostype: "FreeBSD".to_string(),
            osrelease: "13.0".to_string(),
            osrevision: "1300000".to_string(),
        }
    }

    fn v2c_config() -> SnmpConfig {
        SnmpConfig {
            location: Some(String::new()),
            contact: Some(String::new()),
            community: "public".to_string(),
            ..SnmpConfig::default()
        }
    }

    fn v3_config() -> SnmpConfig {
        SnmpConfig {
            v3: true,
            v3_username: Some("observer".to_string()),
            v3_password: Some("hunter22".to_string()),
            v3_authtype: "SHA".to_string(),
            ..SnmpConfig::default()
        }
    }

    fn count_prefixed(output: &str, prefix: &str) -> usize {
        output.lines().filter(|l| l.starts_with(prefix)).count()
    }

    #[test]
    fn spec_example_lines() {
        let output = render(&facts(), &v2c_config());
        assert!(output.contains("sysLocation unknown\n"));
        assert!(output.contains("sysContact unknown@localhost\n"));
        assert!(output.contains("rocommunity \"public\" default\n"));
        assert!(output.contains("rocommunity6 \"public\" default"));
        assert!(output.contains(
            "sysDescr TEST-1. Hardware: amd64 QEMU running at 2000 MHz. \
             Software: FreeBSD 13.0 (revision 1300000)\n"
        ));
    }

    #[test]
    fn fixed_header_order() {
        let output = render(&facts(), &v2c_config());
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(
            lines[0],
            "agentAddress udp:161,udp6:161,unix:/var/run/snmpd.sock"
        );
        assert!(lines[1].starts_with("sysLocation "));
        assert!(lines[2].starts_with("sysContact "));
        assert!(lines[3].starts_with("sysDescr "));
        assert!(lines[4].starts_with("sysObjectID "));
        assert_eq!(lines[5], "master agentx");
    }

    #[test]
    fn v2c_emits_both_transports_and_no_user_lines() {
        let output = render(&facts(), &v2c_config());
        assert_eq!(count_prefixed(&output, "rocommunity "), 1);
        assert_eq!(count_prefixed(&output, "rocommunity6 "), 1);
        assert_eq!(count_prefixed(&output, "createUser"), 0);
        assert_eq!(count_prefixed(&output, "rwuser"), 0);
    }

    #[test]
    fn v3_without_privacy_omits_the_privacy_clause() {
        let output = render(&facts(), &v3_config());
        assert!(output.contains("createUser observer SHA \"hunter22\"\n"));
        assert!(output.contains("rwuser observer\n"));
        assert_eq!(count_prefixed(&output, "createUser"), 1);
        assert_eq!(count_prefixed(&output, "rocommunity"), 0);
    }

    #[test]
    fn v3_with_privacy_emits_the_full_create_user() {
        let mut config = v3_config();
        config.v3_privproto = Some("AES".to_string());
        config.v3_privpassphrase = Some("secret".to_string());

        let output = render(&facts(), &config);
        assert!(output.contains("createUser observer SHA \"hunter22\" AES \"secret\"\n"));
        assert!(output.contains("rwuser observer\n"));
    }

    #[test]
    fn v3_with_half_a_privacy_pair_still_omits_the_clause() {
        let mut config = v3_config();
        config.v3_privproto = Some("AES".to_string());

        let output = render(&facts(), &config);
        assert!(output.contains("createUser observer SHA \"hunter22\"\n"));
        assert!(!output.contains("AES"));
    }

    #[test]
    fn v3_without_credentials_emits_no_user_lines_and_no_error() {
        for config in [
            SnmpConfig {
                v3: true,
                v3_username: Some("observer".to_string()),
                ..SnmpConfig::default()
            },
            SnmpConfig {
                v3: true,
                v3_password: Some("hunter22".to_string()),
                ..SnmpConfig::default()
            },
            SnmpConfig {
                v3: true,
                v3_username: Some(String::new()),
                v3_password: Some("hunter22".to_string()),
                ..SnmpConfig::default()
            },
        ] {
            let output = render(&facts(), &config);
            assert_eq!(count_prefixed(&output, "createUser"), 0);
            assert_eq!(count_prefixed(&output, "rwuser"), 0);
            // v3 mode still suppresses the community fallback
            assert_eq!(count_prefixed(&output, "rocommunity"), 0);
        }
    }

    #[test]
    fn location_and_contact_pass_through_when_set() {
        let mut config = v2c_config();
        config.location = Some("rack 4, row 2".to_string());
        config.contact = Some("noc@example.net".to_string());

        let output = render(&facts(), &config);
        assert!(output.contains("sysLocation rack 4, row 2\n"));
        assert!(output.contains("sysContact noc@example.net\n"));
    }

    #[test]
    fn object_id_arc_follows_the_variant_flag() {
        let mut config = v2c_config();
        config.is_freenas_system = true;
        let output = render(&facts(), &config);
        assert!(output.contains("sysObjectID 1.3.6.1.4.1.50536.3.1\n"));

        config.is_freenas_system = false;
        let output = render(&facts(), &config);
        assert!(output.contains("sysObjectID 1.3.6.1.4.1.50536.3.2\n"));
    }

    #[test]
    fn options_tail_is_verbatim() {
        let mut config = v2c_config();
        config.options = "agentXTimeout 30\n# operator note\nrouser probe\n".to_string();

        let output = render(&facts(), &config);
        assert!(output.ends_with("agentXTimeout 30\n# operator note\nrouser probe\n"));

        config.options = String::new();
        let output = render(&facts(), &config);
        assert!(output.ends_with("rocommunity6 \"public\" default\n"));
    }

    #[test]
    fn render_is_repeatable() {
        let config = v3_config();
        assert_eq!(render(&facts(), &config), render(&facts(), &config));
    }
}
