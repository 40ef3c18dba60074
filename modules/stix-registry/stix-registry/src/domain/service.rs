//! Domain service for the STIX Registry module.

use std::sync::Arc;

use arc_swap::ArcSwap;
use stix_registry_sdk::{RegistryCategory, SpecVersion, TypeDefinition};
use tracing::{debug, info, warn};

use super::error::{ConformanceError, DomainError};
use super::repo::CatalogRepository;
use super::validation::{validate_extension_type_name, validate_properties, validate_type_name};
use crate::config::StixRegistryConfig;

/// Domain service for custom type registration.
///
/// Every registration validates the candidate completely before handing it
/// to the repository, so a rejected candidate never reaches a catalog.
pub struct StixRegistryService {
    repo: Arc<dyn CatalogRepository>,
    default_version: ArcSwap<SpecVersion>,
}

impl StixRegistryService {
    /// Creates a new `StixRegistryService` with the given repository and config.
    #[must_use]
    pub fn new(repo: Arc<dyn CatalogRepository>, config: &StixRegistryConfig) -> Self {
        Self {
            repo,
            default_version: ArcSwap::from_pointee(config.default_spec_version.clone()),
        }
    }

    /// The version used when a caller passes `None`.
    #[must_use]
    pub fn default_version(&self) -> SpecVersion {
        SpecVersion::clone(&self.default_version.load())
    }

    /// Replaces the default version for subsequent calls.
    pub fn set_default_version(&self, version: SpecVersion) {
        info!(%version, "Changing default STIX spec version");
        self.default_version.store(Arc::new(version));
    }

    fn resolve(&self, version: Option<SpecVersion>) -> SpecVersion {
        version.unwrap_or_else(|| self.default_version())
    }

    /// Registers a custom STIX domain object type.
    ///
    /// # Errors
    ///
    /// - `Declaration` if the definition was not created with
    ///   [`TypeDefinition::declare_object`]; checked before anything else
    /// - `Conformance` if the properties do not conform to the version
    /// - `DuplicateRegistration` if the type name is taken
    pub fn register_object(
        &self,
        definition: TypeDefinition,
        version: Option<SpecVersion>,
    ) -> Result<Arc<TypeDefinition>, DomainError> {
        let version = self.resolve(version);
        let result = self.register_object_internal(definition, &version);
        log_outcome(RegistryCategory::Object, &version, result)
    }

    fn register_object_internal(
        &self,
        definition: TypeDefinition,
        version: &SpecVersion,
    ) -> Result<Arc<TypeDefinition>, DomainError> {
        if !definition.is_declared_object() {
            return Err(DomainError::declaration(definition.type_name()));
        }
        validate_properties(definition.properties(), version)?;
        self.repo.insert(version, RegistryCategory::Object, definition)
    }

    /// Registers a custom marking definition type.
    ///
    /// # Errors
    ///
    /// - `InvalidIdentifier` if the type name has an invalid shape
    /// - `Conformance` if the properties do not conform to the version
    /// - `DuplicateRegistration` if the type name is taken
    pub fn register_marking(
        &self,
        definition: TypeDefinition,
        version: Option<SpecVersion>,
    ) -> Result<Arc<TypeDefinition>, DomainError> {
        let version = self.resolve(version);
        let result = self.register_marking_internal(definition, &version);
        log_outcome(RegistryCategory::Marking, &version, result)
    }

    fn register_marking_internal(
        &self,
        definition: TypeDefinition,
        version: &SpecVersion,
    ) -> Result<Arc<TypeDefinition>, DomainError> {
        validate_type_name(definition.type_name(), version)?;
        validate_properties(definition.properties(), version)?;
        self.repo.insert(version, RegistryCategory::Marking, definition)
    }

    /// Registers a custom cyber observable type.
    ///
    /// # Errors
    ///
    /// - `Conformance` if the properties do not conform to the version
    /// - `DuplicateRegistration` if the type name is taken
    pub fn register_observable(
        &self,
        definition: TypeDefinition,
        version: Option<SpecVersion>,
    ) -> Result<Arc<TypeDefinition>, DomainError> {
        let version = self.resolve(version);
        let result = validate_properties(definition.properties(), &version)
            .map_err(DomainError::from)
            .and_then(|()| {
                self.repo
                    .insert(&version, RegistryCategory::Observable, definition)
            });
        log_outcome(RegistryCategory::Observable, &version, result)
    }

    /// Registers a custom extension type.
    ///
    /// Own and top-level properties are merged before validation; on a name
    /// collision the top-level definition wins.
    ///
    /// # Errors
    ///
    /// - `InvalidIdentifier` if the type name has an invalid shape
    /// - `Conformance` if the name breaks the extension naming convention of
    ///   the version, if no property is defined, or if the merged properties
    ///   do not conform
    /// - `DuplicateRegistration` if the type name is taken
    pub fn register_extension(
        &self,
        definition: TypeDefinition,
        version: Option<SpecVersion>,
    ) -> Result<Arc<TypeDefinition>, DomainError> {
        let version = self.resolve(version);
        let result = self.register_extension_internal(definition, &version);
        log_outcome(RegistryCategory::Extension, &version, result)
    }

    fn register_extension_internal(
        &self,
        definition: TypeDefinition,
        version: &SpecVersion,
    ) -> Result<Arc<TypeDefinition>, DomainError> {
        let type_name = definition.type_name();
        validate_type_name(type_name, version)?;
        validate_extension_type_name(type_name, version)?;

        let merged = definition.merged_properties();
        if merged.is_empty() {
            return Err(ConformanceError::EmptyExtension {
                type_name: type_name.to_owned(),
            }
            .into());
        }
        validate_properties(&merged, version)?;

        self.repo
            .insert(version, RegistryCategory::Extension, definition)
    }

    /// Retrieves a registered type.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if nothing is registered under the name.
    pub fn get(
        &self,
        category: RegistryCategory,
        type_name: &str,
        version: Option<SpecVersion>,
    ) -> Result<Arc<TypeDefinition>, DomainError> {
        self.repo.get(&self.resolve(version), category, type_name)
    }

    /// Checks if a type is registered.
    #[must_use]
    pub fn contains(
        &self,
        category: RegistryCategory,
        type_name: &str,
        version: Option<SpecVersion>,
    ) -> bool {
        self.repo.contains(&self.resolve(version), category, type_name)
    }

    /// Lists registered types of one namespace, sorted by type name.
    #[must_use]
    pub fn list(
        &self,
        category: RegistryCategory,
        version: Option<SpecVersion>,
    ) -> Vec<Arc<TypeDefinition>> {
        self.repo.list(&self.resolve(version), category)
    }

    /// Versions that currently have a catalog.
    #[must_use]
    pub fn versions(&self) -> Vec<SpecVersion> {
        self.repo.versions()
    }
}

fn log_outcome(
    category: RegistryCategory,
    version: &SpecVersion,
    result: Result<Arc<TypeDefinition>, DomainError>,
) -> Result<Arc<TypeDefinition>, DomainError> {
    match &result {
        Ok(definition) => debug!(
            type_name = definition.type_name(),
            %category,
            %version,
            "Registered custom type"
        ),
        Err(e) => warn!(%category, %version, error = %e, "Custom type registration rejected"),
    }
    result
}
