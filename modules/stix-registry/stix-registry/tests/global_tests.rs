#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Integration test for the process-wide registry
//!
//! Kept in its own test binary so no other test touches the global.

use stix_registry::config::StixRegistryConfig;
use stix_registry::global;
use stix_registry_sdk::{RegistryCategory, SpecVersion, TypeDefinition};

#[test]
fn test_global_registry_lifecycle() {
    assert!(global::get().is_none());

    let cfg = StixRegistryConfig {
        default_spec_version: SpecVersion::V2_0,
    };
    global::init(&cfg).unwrap();
    assert!(global::init(&cfg).is_err());

    let client = global::get().unwrap().client().unwrap();
    assert_eq!(client.default_version(), SpecVersion::V2_0);

    client
        .register_object(TypeDefinition::declare_object("x-acme-widget"), None)
        .unwrap();

    let again = global::get().unwrap().client().unwrap();
    assert!(
        again
            .get(RegistryCategory::Object, "x-acme-widget", Some(SpecVersion::V2_0))
            .is_ok()
    );
}
