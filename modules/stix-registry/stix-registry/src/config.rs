//! Configuration for the STIX Registry module.

use serde::Deserialize;
use stix_registry_sdk::SpecVersion;

/// Configuration for the STIX Registry module.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct StixRegistryConfig {
    /// Spec version used when a caller does not name one.
    /// Default: `"2.1"`
    pub default_spec_version: SpecVersion,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_config() {
        let cfg = StixRegistryConfig::default();
        assert_eq!(cfg.default_spec_version, SpecVersion::V2_1);
    }

    #[test]
    fn test_deserialize_config() {
        let cfg: StixRegistryConfig =
            serde_json::from_value(json!({ "default_spec_version": "2.0" })).unwrap();
        assert_eq!(cfg.default_spec_version, SpecVersion::V2_0);

        let cfg: StixRegistryConfig = serde_json::from_value(json!({})).unwrap();
        assert_eq!(cfg.default_spec_version, SpecVersion::V2_1);
    }

    #[test]
    fn test_deserialize_rejects_unknown_fields() {
        let result =
            serde_json::from_value::<StixRegistryConfig>(json!({ "entity_id_fields": ["$id"] }));
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_rejects_empty_version() {
        let result =
            serde_json::from_value::<StixRegistryConfig>(json!({ "default_spec_version": "" }));
        assert!(result.is_err());
    }
}
