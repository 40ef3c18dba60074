//! In-memory catalog repository.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::Arc;

use parking_lot::RwLock;
use stix_registry_sdk::{RegistryCategory, SpecVersion, TypeDefinition};

use crate::domain::error::DomainError;
use crate::domain::repo::CatalogRepository;

type Namespace = RwLock<HashMap<String, Arc<TypeDefinition>>>;

/// The four namespaces of one spec version.
#[derive(Default)]
struct Catalog {
    objects: Namespace,
    markings: Namespace,
    observables: Namespace,
    extensions: Namespace,
}

impl Catalog {
    const fn namespace(&self, category: RegistryCategory) -> &Namespace {
        match category {
            RegistryCategory::Object => &self.objects,
            RegistryCategory::Marking => &self.markings,
            RegistryCategory::Observable => &self.observables,
            RegistryCategory::Extension => &self.extensions,
        }
    }
}

/// In-memory repository holding one catalog per spec version.
///
/// Catalogs for the baseline versions exist from construction; a catalog
/// for any other version is created by the first insert into it. Each
/// namespace has its own lock, so registrations into different namespaces
/// never contend.
pub struct InMemoryCatalogRepository {
    catalogs: RwLock<HashMap<SpecVersion, Arc<Catalog>>>,
}

impl Default for InMemoryCatalogRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryCatalogRepository {
    /// Creates a repository with empty catalogs for the known versions.
    #[must_use]
    pub fn new() -> Self {
        let catalogs = SpecVersion::KNOWN
            .into_iter()
            .map(|version| (version, Arc::new(Catalog::default())))
            .collect();
        Self {
            catalogs: RwLock::new(catalogs),
        }
    }

    fn catalog(&self, version: &SpecVersion) -> Option<Arc<Catalog>> {
        self.catalogs.read().get(version).cloned()
    }

    fn catalog_or_create(&self, version: &SpecVersion) -> Arc<Catalog> {
        if let Some(catalog) = self.catalog(version) {
            return catalog;
        }
        let mut catalogs = self.catalogs.write();
        Arc::clone(catalogs.entry(version.clone()).or_default())
    }
}

impl CatalogRepository for InMemoryCatalogRepository {
    fn insert(
        &self,
        version: &SpecVersion,
        category: RegistryCategory,
        definition: TypeDefinition,
    ) -> Result<Arc<TypeDefinition>, DomainError> {
        let catalog = self.catalog_or_create(version);
        let mut namespace = catalog.namespace(category).write();

        match namespace.entry(definition.type_name().to_owned()) {
            Entry::Occupied(entry) => Err(DomainError::duplicate(category, entry.key().clone())),
            Entry::Vacant(entry) => Ok(Arc::clone(entry.insert(Arc::new(definition)))),
        }
    }

    fn get(
        &self,
        version: &SpecVersion,
        category: RegistryCategory,
        type_name: &str,
    ) -> Result<Arc<TypeDefinition>, DomainError> {
        self.catalog(version)
            .and_then(|catalog| {
                let namespace = catalog.namespace(category).read();
                namespace.get(type_name).cloned()
            })
            .ok_or_else(|| DomainError::not_found(category, type_name, version))
    }

    fn contains(&self, version: &SpecVersion, category: RegistryCategory, type_name: &str) -> bool {
        self.catalog(version).is_some_and(|catalog| {
            let namespace = catalog.namespace(category).read();
            namespace.contains_key(type_name)
        })
    }

    fn list(&self, version: &SpecVersion, category: RegistryCategory) -> Vec<Arc<TypeDefinition>> {
        let Some(catalog) = self.catalog(version) else {
            return Vec::new();
        };
        let mut results: Vec<Arc<TypeDefinition>> = {
            let namespace = catalog.namespace(category).read();
            namespace.values().cloned().collect()
        };
        results.sort_by(|a, b| a.type_name().cmp(b.type_name()));
        results
    }

    fn versions(&self) -> Vec<SpecVersion> {
        let mut versions: Vec<SpecVersion> = self.catalogs.read().keys().cloned().collect();
        versions.sort();
        versions
    }
}
