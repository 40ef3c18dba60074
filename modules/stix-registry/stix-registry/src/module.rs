//! Module declaration for the STIX Registry module.

use std::sync::{Arc, OnceLock};

use serde::Deserialize;
use stix_registry_sdk::StixRegistryApi;
use tracing::{debug, info};

use crate::config::StixRegistryConfig;
use crate::domain::service::StixRegistryService;
use crate::infra::InMemoryCatalogRepository;
use crate::local_client::StixRegistryLocalClient;

/// STIX Registry module.
///
/// Owns the registry for its lifetime: [`StixRegistryModule::init`] builds the
/// catalogs exactly once, after which [`StixRegistryModule::client`] hands out
/// the `StixRegistryApi` used by the rest of the process.
#[derive(Default)]
pub struct StixRegistryModule {
    service: OnceLock<Arc<StixRegistryService>>,
}

impl StixRegistryModule {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Initializes the registry with the given config.
    ///
    /// # Errors
    ///
    /// Fails if the module was already initialized.
    pub fn init(&self, cfg: &StixRegistryConfig) -> anyhow::Result<()> {
        info!("Initializing stix_registry module");
        debug!(
            "Loaded stix_registry config: default_spec_version={}",
            cfg.default_spec_version
        );

        let repo = Arc::new(InMemoryCatalogRepository::new());
        let service = Arc::new(StixRegistryService::new(repo, cfg));

        self.service
            .set(service)
            .map_err(|_| anyhow::anyhow!("stix_registry module already initialized"))?;

        info!("STIX registry module initialized");
        Ok(())
    }

    /// Initializes the registry from a raw config section.
    ///
    /// A missing section falls back to the default config.
    ///
    /// # Errors
    ///
    /// Fails if the section cannot be deserialized or the module was already
    /// initialized.
    pub fn init_from_value(&self, raw: Option<&serde_json::Value>) -> anyhow::Result<()> {
        let cfg = match raw {
            Some(value) => StixRegistryConfig::deserialize(value)
                .map_err(|e| anyhow::anyhow!("invalid stix_registry config: {e}"))?,
            None => StixRegistryConfig::default(),
        };
        self.init(&cfg)
    }

    /// Returns the domain service.
    ///
    /// # Errors
    ///
    /// Fails if the module has not been initialized.
    pub fn service(&self) -> anyhow::Result<Arc<StixRegistryService>> {
        self.service
            .get()
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("Service not initialized"))
    }

    /// Returns the public client.
    ///
    /// # Errors
    ///
    /// Fails if the module has not been initialized.
    pub fn client(&self) -> anyhow::Result<Arc<dyn StixRegistryApi>> {
        let service = self.service()?;
        Ok(Arc::new(StixRegistryLocalClient::new(service)))
    }

    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.service.get().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use stix_registry_sdk::{RegistryCategory, SpecVersion, TypeDefinition};

    #[test]
    fn test_service_before_init_fails() {
        let module = StixRegistryModule::new();
        assert!(!module.is_initialized());
        assert!(module.service().is_err());
        assert!(module.client().is_err());
    }

    #[test]
    fn test_init_twice_fails() {
        let module = StixRegistryModule::new();
        module.init(&StixRegistryConfig::default()).unwrap();
        assert!(module.init(&StixRegistryConfig::default()).is_err());
    }

    #[test]
    fn test_init_from_value() {
        let module = StixRegistryModule::new();
        module
            .init_from_value(Some(&json!({ "default_spec_version": "2.0" })))
            .unwrap();
        assert_eq!(module.client().unwrap().default_version(), SpecVersion::V2_0);

        let module = StixRegistryModule::new();
        module.init_from_value(None).unwrap();
        assert_eq!(module.client().unwrap().default_version(), SpecVersion::V2_1);

        let module = StixRegistryModule::new();
        assert!(
            module
                .init_from_value(Some(&json!({ "unknown": true })))
                .is_err()
        );
        assert!(!module.is_initialized());
    }

    #[test]
    fn test_clients_share_catalogs() {
        let module = StixRegistryModule::new();
        module.init(&StixRegistryConfig::default()).unwrap();

        module
            .client()
            .unwrap()
            .register_observable(TypeDefinition::new("x-acme-socket"), None)
            .unwrap();

        let other = module.client().unwrap();
        assert!(
            other
                .get(RegistryCategory::Observable, "x-acme-socket", None)
                .is_ok()
        );
    }
}
