#![allow(clippy::unwrap_used, clippy::expect_used, dead_code)]

//! Common test utilities for stix-registry integration tests

use std::sync::Arc;

use stix_registry::{
    config::StixRegistryConfig, domain::service::StixRegistryService,
    infra::InMemoryCatalogRepository,
};

pub fn create_service() -> Arc<StixRegistryService> {
    create_service_with(&StixRegistryConfig::default())
}

pub fn create_service_with(cfg: &StixRegistryConfig) -> Arc<StixRegistryService> {
    let repo = Arc::new(InMemoryCatalogRepository::new());
    Arc::new(StixRegistryService::new(repo, cfg))
}

pub const EXTENSION_DEFINITION_ID: &str =
    "extension-definition--d83fce45-ef58-4c6c-a3f4-1fbc32e98c6e";
