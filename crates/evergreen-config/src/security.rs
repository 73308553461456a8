use crate::artifact::Artifact;
use crate::error::ConfigError;
use crate::json;
use camino::Utf8Path;
use evergreen_settings::ArtifactKind;
use serde::Deserialize;
use serde_json::{Map, Value};

const REQUIRED_KEYS: &[&str] = &[
    "selinux",
    "ssh",
    "usbguard",
    "firewall",
    "disk_encryption",
    "secure_boot",
];

/// Aggregated EvergreenOS hardening policies.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SecurityPolicies {
    selinux_mode: String,
    ssh_enabled: bool,
    usbguard_default_policy: String,
    firewall_allowed_services: Vec<String>,
    firewall_custom_rules: Vec<Value>,
    disk_encryption: Map<String, Value>,
    secure_boot_status: String,
    auditing_enabled: bool,
    auditing_profile: Option<String>,
}

#[derive(Deserialize)]
struct RawPolicies {
    selinux: RawSelinux,
    ssh: RawSsh,
    usbguard: RawUsbguard,
    firewall: RawFirewall,
    disk_encryption: Map<String, Value>,
    secure_boot: RawSecureBoot,
    #[serde(default)]
    auditing: RawAuditing,
}

#[derive(Deserialize)]
struct RawSelinux {
    mode: String,
}

#[derive(Deserialize)]
struct RawSsh {
    enabled: bool,
}

#[derive(Deserialize)]
struct RawUsbguard {
    default_policy: String,
}

#[derive(Deserialize)]
struct RawFirewall {
    #[serde(default)]
    allowed_services: Vec<String>,
    #[serde(default)]
    custom_rules: Vec<Value>,
}

#[derive(Deserialize)]
struct RawSecureBoot {
    status: String,
}

#[derive(Default, Deserialize)]
struct RawAuditing {
    #[serde(default)]
    enabled: bool,
    #[serde(default)]
    profile: Option<String>,
}

impl Artifact for SecurityPolicies {
    const KIND: ArtifactKind = ArtifactKind::SecurityPolicies;

    fn parse(path: &Utf8Path, text: &str) -> Result<Self, ConfigError> {
        let doc = json::parse_document(path, text)?;
        json::require_keys(path, &doc, REQUIRED_KEYS)?;
        let raw: RawPolicies = json::decode(path, doc)?;

        Ok(SecurityPolicies {
            selinux_mode: raw.selinux.mode,
            ssh_enabled: raw.ssh.enabled,
            usbguard_default_policy: raw.usbguard.default_policy,
            firewall_allowed_services: raw.firewall.allowed_services,
            firewall_custom_rules: raw.firewall.custom_rules,
            disk_encryption: raw.disk_encryption,
            secure_boot_status: raw.secure_boot.status,
            auditing_enabled: raw.auditing.enabled,
            auditing_profile: raw.auditing.profile,
        })
    }
}

impl SecurityPolicies {
    pub fn selinux_mode(&self) -> &str {
        &self.selinux_mode
    }

    pub fn ssh_enabled(&self) -> bool {
        self.ssh_enabled
    }

    pub fn usbguard_default_policy(&self) -> &str {
        &self.usbguard_default_policy
    }

    pub fn firewall_allowed_services(&self) -> &[String] {
        &self.firewall_allowed_services
    }

    pub fn firewall_custom_rules(&self) -> &[Value] {
        &self.firewall_custom_rules
    }

    /// Disk-encryption settings, in document order.
    pub fn disk_encryption(&self) -> &Map<String, Value> {
        &self.disk_encryption
    }

    pub fn secure_boot_status(&self) -> &str {
        &self.secure_boot_status
    }

    pub fn auditing_enabled(&self) -> bool {
        self.auditing_enabled
    }

    pub fn auditing_profile(&self) -> Option<&str> {
        self.auditing_profile.as_deref()
    }

    pub fn firewall_allows(&self, service: &str) -> bool {
        self.firewall_allowed_services.iter().any(|s| s == service)
    }

    /// True only for a literal JSON `true` under `disk_encryption.tpm_auto_unlock`.
    pub fn tpm_auto_unlock(&self) -> bool {
        self.disk_encryption.get("tpm_auto_unlock") == Some(&Value::Bool(true))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: Value) -> Result<SecurityPolicies, ConfigError> {
        SecurityPolicies::parse(Utf8Path::new("policies.yaml"), &value.to_string())
    }

    fn minimal() -> Value {
        json!({
            "selinux": { "mode": "enforcing" },
            "ssh": { "enabled": false },
            "usbguard": { "default_policy": "block" },
            "firewall": {},
            "disk_encryption": {},
            "secure_boot": { "status": "planned" }
        })
    }

    #[test]
    fn canonical_policies_capture_hardening_defaults() {
        let policies = SecurityPolicies::load(None).expect("load canonical policies");

        assert_eq!(policies.selinux_mode(), "enforcing");
        assert!(!policies.ssh_enabled());
        assert_eq!(policies.usbguard_default_policy(), "block");
        assert!(policies.firewall_allows("evergreen-device-agent"));
        assert!(policies.tpm_auto_unlock());
        assert_eq!(policies.secure_boot_status(), "planned");
    }

    #[test]
    fn optional_sections_default() {
        let policies = parse(minimal()).expect("minimal policies");
        assert!(policies.firewall_allowed_services().is_empty());
        assert!(policies.firewall_custom_rules().is_empty());
        assert!(!policies.auditing_enabled());
        assert_eq!(policies.auditing_profile(), None);
        assert!(!policies.tpm_auto_unlock());
    }

    #[test]
    fn disk_encryption_keeps_document_order_and_requires_literal_true() {
        let mut doc = minimal();
        doc["disk_encryption"] = json!({ "type": "luks2", "tpm_auto_unlock": "true", "cipher": "aes-xts" });
        let policies = parse(doc).expect("policies");

        let keys: Vec<&str> = policies.disk_encryption().keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["type", "tpm_auto_unlock", "cipher"]);
        assert!(!policies.tpm_auto_unlock(), "string \"true\" is not a flag");
    }

    #[test]
    fn auditing_profile_is_read() {
        let mut doc = minimal();
        doc["auditing"] = json!({ "enabled": true, "profile": "cis-workstation" });
        let policies = parse(doc).expect("policies");
        assert!(policies.auditing_enabled());
        assert_eq!(policies.auditing_profile(), Some("cis-workstation"));
    }

    #[test]
    fn each_required_section_is_enforced() {
        for key in REQUIRED_KEYS {
            let mut doc = minimal();
            doc.as_object_mut().expect("object").remove(*key);
            let err = parse(doc).expect_err("missing section");
            assert!(
                matches!(err, ConfigError::Schema { .. }),
                "missing {key} should be a schema error"
            );
        }
    }

    #[test]
    fn missing_nested_scalar_is_schema_error() {
        let mut doc = minimal();
        doc["selinux"] = json!({});
        assert!(matches!(parse(doc), Err(ConfigError::Schema { .. })));
    }
}
