//! Public models for the `stix-registry` module.
//!
//! These are the candidate types handed to the registry and the namespaces
//! they are registered into.

use std::fmt;
use std::sync::Arc;

use crate::property::{Property, PropertySet};

/// One of the four independent namespaces of a version's catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RegistryCategory {
    /// Custom STIX domain objects.
    Object,
    /// Custom marking definitions.
    Marking,
    /// Custom cyber observables.
    Observable,
    /// Custom extensions.
    Extension,
}

impl RegistryCategory {
    /// Every namespace, in declaration order.
    pub const ALL: [Self; 4] = [Self::Object, Self::Marking, Self::Observable, Self::Extension];

    /// Human-readable label used in error messages.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Object => "STIX Object",
            Self::Marking => "STIX Marking",
            Self::Observable => "Cyber Observable",
            Self::Extension => "Extension",
        }
    }
}

impl fmt::Display for RegistryCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A candidate custom type.
///
/// Domain objects must be created with [`TypeDefinition::declare_object`];
/// the registry refuses object definitions built any other way.
#[derive(Debug, Clone)]
pub struct TypeDefinition {
    type_name: String,
    properties: PropertySet,
    toplevel_properties: Option<PropertySet>,
    declared_object: bool,
}

impl TypeDefinition {
    /// Creates a marking, observable, or extension definition.
    #[must_use]
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            properties: PropertySet::new(),
            toplevel_properties: None,
            declared_object: false,
        }
    }

    /// Declares a custom domain object type.
    #[must_use]
    pub fn declare_object(type_name: impl Into<String>) -> Self {
        Self {
            declared_object: true,
            ..Self::new(type_name)
        }
    }

    /// Adds a property. A later property with the same name replaces the earlier one.
    #[must_use]
    pub fn with_property(mut self, name: impl Into<String>, property: impl Property + 'static) -> Self {
        self.properties.insert(name.into(), Arc::new(property));
        self
    }

    /// Replaces the whole property set.
    #[must_use]
    pub fn with_properties(mut self, properties: PropertySet) -> Self {
        self.properties = properties;
        self
    }

    /// Adds a top-level property (extensions only).
    ///
    /// Top-level properties are placed on the extended object itself rather
    /// than inside the extension body.
    #[must_use]
    pub fn with_toplevel_property(
        mut self,
        name: impl Into<String>,
        property: impl Property + 'static,
    ) -> Self {
        self.toplevel_properties
            .get_or_insert_with(PropertySet::new)
            .insert(name.into(), Arc::new(property));
        self
    }

    #[must_use]
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    #[must_use]
    pub const fn properties(&self) -> &PropertySet {
        &self.properties
    }

    #[must_use]
    pub const fn toplevel_properties(&self) -> Option<&PropertySet> {
        self.toplevel_properties.as_ref()
    }

    /// Returns `true` if created through [`TypeDefinition::declare_object`].
    #[must_use]
    pub const fn is_declared_object(&self) -> bool {
        self.declared_object
    }

    /// Own properties merged with top-level properties.
    ///
    /// On a name collision the top-level definition wins.
    #[must_use]
    pub fn merged_properties(&self) -> PropertySet {
        let mut merged = self.properties.clone();
        if let Some(toplevel) = &self.toplevel_properties {
            merged.extend(
                toplevel
                    .iter()
                    .map(|(name, prop)| (name.clone(), Arc::clone(prop))),
            );
        }
        merged
    }
}
