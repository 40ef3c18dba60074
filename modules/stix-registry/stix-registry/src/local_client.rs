//! Local client implementing the `StixRegistryApi` trait.

use std::sync::Arc;

use stix_registry_sdk::{
    RegistryCategory, SpecVersion, StixRegistryApi, StixRegistryError, TypeDefinition,
};

use crate::domain::service::StixRegistryService;

/// Local client for the STIX Registry module.
///
/// Implements `StixRegistryApi` by delegating to the domain service and
/// converting domain errors into SDK errors.
pub struct StixRegistryLocalClient {
    service: Arc<StixRegistryService>,
}

impl StixRegistryLocalClient {
    /// Creates a new local client with the given service.
    #[must_use]
    pub fn new(service: Arc<StixRegistryService>) -> Self {
        Self { service }
    }
}

impl StixRegistryApi for StixRegistryLocalClient {
    fn register_object(
        &self,
        definition: TypeDefinition,
        version: Option<SpecVersion>,
    ) -> Result<Arc<TypeDefinition>, StixRegistryError> {
        self.service
            .register_object(definition, version)
            .map_err(StixRegistryError::from)
    }

    fn register_marking(
        &self,
        definition: TypeDefinition,
        version: Option<SpecVersion>,
    ) -> Result<Arc<TypeDefinition>, StixRegistryError> {
        self.service
            .register_marking(definition, version)
            .map_err(StixRegistryError::from)
    }

    fn register_observable(
        &self,
        definition: TypeDefinition,
        version: Option<SpecVersion>,
    ) -> Result<Arc<TypeDefinition>, StixRegistryError> {
        self.service
            .register_observable(definition, version)
            .map_err(StixRegistryError::from)
    }

    fn register_extension(
        &self,
        definition: TypeDefinition,
        version: Option<SpecVersion>,
    ) -> Result<Arc<TypeDefinition>, StixRegistryError> {
        self.service
            .register_extension(definition, version)
            .map_err(StixRegistryError::from)
    }

    fn get(
        &self,
        category: RegistryCategory,
        type_name: &str,
        version: Option<SpecVersion>,
    ) -> Result<Arc<TypeDefinition>, StixRegistryError> {
        self.service
            .get(category, type_name, version)
            .map_err(StixRegistryError::from)
    }

    fn contains(
        &self,
        category: RegistryCategory,
        type_name: &str,
        version: Option<SpecVersion>,
    ) -> bool {
        self.service.contains(category, type_name, version)
    }

    fn list(
        &self,
        category: RegistryCategory,
        version: Option<SpecVersion>,
    ) -> Vec<Arc<TypeDefinition>> {
        self.service.list(category, version)
    }

    fn default_version(&self) -> SpecVersion {
        self.service.default_version()
    }

    fn set_default_version(&self, version: SpecVersion) {
        self.service.set_default_version(version);
    }
}
