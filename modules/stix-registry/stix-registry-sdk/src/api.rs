//! `StixRegistryApi` trait definition.
//!
//! This trait defines the public API for the `stix-registry` module.

use std::sync::Arc;

use crate::error::StixRegistryError;
use crate::models::{RegistryCategory, TypeDefinition};
use crate::version::SpecVersion;

/// Public API trait for the `stix-registry` module.
///
/// Every operation takes an optional [`SpecVersion`]; `None` means the
/// registry's current default version.
///
/// All operations are synchronous and complete without blocking on I/O.
pub trait StixRegistryApi: Send + Sync {
    /// Register a custom STIX domain object type.
    ///
    /// # Errors
    ///
    /// * `Declaration` - If the definition was not created with
    ///   [`TypeDefinition::declare_object`]
    /// * `Conformance` - If the property set does not conform to the version
    /// * `DuplicateRegistration` - If the type is already registered
    fn register_object(
        &self,
        definition: TypeDefinition,
        version: Option<SpecVersion>,
    ) -> Result<Arc<TypeDefinition>, StixRegistryError>;

    /// Register a custom marking definition type.
    ///
    /// # Errors
    ///
    /// * `InvalidIdentifier` - If the type name has an invalid shape
    /// * `Conformance` - If the property set does not conform to the version
    /// * `DuplicateRegistration` - If the type is already registered
    fn register_marking(
        &self,
        definition: TypeDefinition,
        version: Option<SpecVersion>,
    ) -> Result<Arc<TypeDefinition>, StixRegistryError>;

    /// Register a custom cyber observable type.
    ///
    /// # Errors
    ///
    /// * `Conformance` - If the property set does not conform to the version
    /// * `DuplicateRegistration` - If the type is already registered
    fn register_observable(
        &self,
        definition: TypeDefinition,
        version: Option<SpecVersion>,
    ) -> Result<Arc<TypeDefinition>, StixRegistryError>;

    /// Register a custom extension type.
    ///
    /// # Errors
    ///
    /// * `InvalidIdentifier` - If the type name has an invalid shape
    /// * `Conformance` - If the extension name, or the merged property set,
    ///   does not conform to the version, or if it defines no property
    /// * `DuplicateRegistration` - If the type is already registered
    fn register_extension(
        &self,
        definition: TypeDefinition,
        version: Option<SpecVersion>,
    ) -> Result<Arc<TypeDefinition>, StixRegistryError>;

    /// Resolve a registered type by name.
    ///
    /// # Errors
    ///
    /// * `NotFound` - If no such type is registered in that namespace and version
    fn get(
        &self,
        category: RegistryCategory,
        type_name: &str,
        version: Option<SpecVersion>,
    ) -> Result<Arc<TypeDefinition>, StixRegistryError>;

    /// Check whether a type is registered in one namespace.
    fn contains(
        &self,
        category: RegistryCategory,
        type_name: &str,
        version: Option<SpecVersion>,
    ) -> bool;

    /// List the types registered in one namespace, sorted by type name.
    fn list(
        &self,
        category: RegistryCategory,
        version: Option<SpecVersion>,
    ) -> Vec<Arc<TypeDefinition>>;

    /// The version used when callers pass `None`.
    fn default_version(&self) -> SpecVersion;

    /// Replace the default version for subsequent calls.
    fn set_default_version(&self, version: SpecVersion);
}
