//! Repository trait for catalog storage.

use std::sync::Arc;

use stix_registry_sdk::{RegistryCategory, SpecVersion, TypeDefinition};

use super::error::DomainError;

/// Storage interface for the per-version catalogs.
///
/// Implementations must make the duplicate check and the insert of
/// [`CatalogRepository::insert`] a single atomic step.
pub trait CatalogRepository: Send + Sync {
    /// Inserts a definition under its type name.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateRegistration` if the type name is already present in
    /// that namespace and version. The catalog is left unchanged.
    fn insert(
        &self,
        version: &SpecVersion,
        category: RegistryCategory,
        definition: TypeDefinition,
    ) -> Result<Arc<TypeDefinition>, DomainError>;

    /// Retrieves a definition by type name.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if nothing is registered under the name.
    fn get(
        &self,
        version: &SpecVersion,
        category: RegistryCategory,
        type_name: &str,
    ) -> Result<Arc<TypeDefinition>, DomainError>;

    /// Checks if a type name is registered.
    fn contains(&self, version: &SpecVersion, category: RegistryCategory, type_name: &str) -> bool;

    /// Lists all definitions of a namespace, sorted by type name.
    fn list(&self, version: &SpecVersion, category: RegistryCategory) -> Vec<Arc<TypeDefinition>>;

    /// Versions that currently have a catalog.
    fn versions(&self) -> Vec<SpecVersion>;
}
