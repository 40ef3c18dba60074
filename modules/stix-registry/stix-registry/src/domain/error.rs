//! Domain error types for the STIX Registry module.

use stix_registry_sdk::{PropertyShape, RegistryCategory, SpecVersion, StixRegistryError};
use thiserror::Error;

fn shape_list(shapes: &[PropertyShape]) -> String {
    shapes
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// A property set, or an extension definition, that breaks the rules of a spec version.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConformanceError {
    /// Property names must begin with an alpha character (STIX 2.1+).
    #[error("Property name '{property}' must begin with an alpha character (spec version {version})")]
    PropertyName {
        property: String,
        version: SpecVersion,
    },

    /// A `*_ref` property whose definition is not a reference.
    #[error(
        "'{property}' is named like a reference property but is not any of [{}] (spec version {version})",
        shape_list(.accepted)
    )]
    ReferenceProperty {
        property: String,
        version: SpecVersion,
        accepted: Vec<PropertyShape>,
    },

    /// A `*_refs` property that is not a list of references.
    #[error(
        "'{property}' is named like a reference list property but is not a ListProperty containing any of [{}] (spec version {version})",
        shape_list(.accepted)
    )]
    ReferenceListProperty {
        property: String,
        version: SpecVersion,
        accepted: Vec<PropertyShape>,
    },

    /// An extension type name without the required suffix or prefix.
    #[error(
        "Invalid extension type name '{type_name}': must end with '-ext' or start with 'extension-definition--<UUID>' (spec version {version})"
    )]
    ExtensionName {
        type_name: String,
        version: SpecVersion,
    },

    /// An extension with neither own nor top-level properties.
    #[error("Invalid extension: must define at least one property: {type_name}")]
    EmptyExtension { type_name: String },
}

impl ConformanceError {
    /// Name of the offending property, if the violation is about one.
    #[must_use]
    pub fn property(&self) -> Option<&str> {
        match self {
            Self::PropertyName { property, .. }
            | Self::ReferenceProperty { property, .. }
            | Self::ReferenceListProperty { property, .. } => Some(property),
            Self::ExtensionName { .. } | Self::EmptyExtension { .. } => None,
        }
    }
}

/// Domain-level errors for the STIX Registry module.
#[derive(Error, Debug)]
pub enum DomainError {
    /// The object definition did not come from the custom object declaration path.
    #[error("'{type_name}' must be created with the custom object declaration")]
    Declaration { type_name: String },

    /// The definition does not conform to the spec version.
    #[error(transparent)]
    Conformance(#[from] ConformanceError),

    /// The type name is already taken in the target namespace and version.
    #[error("A(n) {category} with type '{type_name}' has already been registered")]
    DuplicateRegistration {
        category: RegistryCategory,
        type_name: String,
    },

    /// The type name does not have a valid shape for the spec version.
    #[error("Invalid type name '{type_name}': {reason}")]
    InvalidIdentifier {
        type_name: String,
        version: SpecVersion,
        reason: String,
    },

    /// Nothing is registered under the type name.
    #[error("No {category} with type '{type_name}' is registered for spec version {version}")]
    NotFound {
        category: RegistryCategory,
        type_name: String,
        version: SpecVersion,
    },

    /// An internal error occurred.
    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl DomainError {
    /// Creates a `Declaration` error.
    #[must_use]
    pub fn declaration(type_name: impl Into<String>) -> Self {
        Self::Declaration {
            type_name: type_name.into(),
        }
    }

    /// Creates a `DuplicateRegistration` error.
    #[must_use]
    pub fn duplicate(category: RegistryCategory, type_name: impl Into<String>) -> Self {
        Self::DuplicateRegistration {
            category,
            type_name: type_name.into(),
        }
    }

    /// Creates an `InvalidIdentifier` error.
    #[must_use]
    pub fn invalid_identifier(
        type_name: impl Into<String>,
        version: &SpecVersion,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidIdentifier {
            type_name: type_name.into(),
            version: version.clone(),
            reason: reason.into(),
        }
    }

    /// Creates a `NotFound` error.
    #[must_use]
    pub fn not_found(
        category: RegistryCategory,
        type_name: impl Into<String>,
        version: &SpecVersion,
    ) -> Self {
        Self::NotFound {
            category,
            type_name: type_name.into(),
            version: version.clone(),
        }
    }

    /// Returns the conformance violation if this is a `Conformance` error.
    #[must_use]
    pub const fn conformance(&self) -> Option<&ConformanceError> {
        match self {
            Self::Conformance(e) => Some(e),
            _ => None,
        }
    }
}

impl From<DomainError> for StixRegistryError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::Declaration { type_name } => StixRegistryError::declaration(type_name),
            DomainError::Conformance(err) => StixRegistryError::conformance(err.to_string()),
            DomainError::DuplicateRegistration {
                category,
                type_name,
            } => StixRegistryError::duplicate_registration(category.label(), type_name),
            err @ DomainError::InvalidIdentifier { .. } => {
                StixRegistryError::invalid_identifier(err.to_string())
            }
            err @ DomainError::NotFound { .. } => StixRegistryError::not_found(err.to_string()),
            DomainError::Internal(e) => StixRegistryError::internal(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_constructors() {
        let err = DomainError::declaration("x-acme-widget");
        assert!(matches!(err, DomainError::Declaration { .. }));

        let err = DomainError::duplicate(RegistryCategory::Marking, "x-acme-tlp");
        assert!(matches!(err, DomainError::DuplicateRegistration { .. }));

        let err = DomainError::invalid_identifier("X", &SpecVersion::V2_1, "too short");
        assert!(matches!(err, DomainError::InvalidIdentifier { .. }));

        let err = DomainError::not_found(RegistryCategory::Object, "x-nope", &SpecVersion::V2_0);
        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[test]
    fn test_domain_to_sdk_error_conversion() {
        let sdk_err: StixRegistryError = DomainError::declaration("x-acme-widget").into();
        assert!(sdk_err.is_declaration());

        let sdk_err: StixRegistryError =
            DomainError::duplicate(RegistryCategory::Extension, "x-acme-ext").into();
        assert_eq!(
            sdk_err,
            StixRegistryError::duplicate_registration("Extension", "x-acme-ext")
        );

        let sdk_err: StixRegistryError = DomainError::from(ConformanceError::EmptyExtension {
            type_name: "x-acme-ext".to_owned(),
        })
        .into();
        assert!(sdk_err.is_conformance());

        let sdk_err: StixRegistryError =
            DomainError::invalid_identifier("AB", &SpecVersion::V2_1, "too short").into();
        assert!(sdk_err.is_invalid_identifier());

        let sdk_err: StixRegistryError =
            DomainError::not_found(RegistryCategory::Observable, "x-nope", &SpecVersion::V2_1)
                .into();
        assert!(sdk_err.is_not_found());

        let sdk_err: StixRegistryError = DomainError::Internal(anyhow::anyhow!("boom")).into();
        assert!(matches!(sdk_err, StixRegistryError::Internal(_)));
    }

    #[test]
    fn test_error_display() {
        let err = ConformanceError::PropertyName {
            property: "1bad".to_owned(),
            version: SpecVersion::V2_1,
        };
        assert_eq!(
            err.to_string(),
            "Property name '1bad' must begin with an alpha character (spec version 2.1)"
        );

        let err = ConformanceError::ReferenceProperty {
            property: "owner_ref".to_owned(),
            version: SpecVersion::V2_0,
            accepted: vec![PropertyShape::ObjectReference, PropertyShape::Reference],
        };
        assert_eq!(
            err.to_string(),
            "'owner_ref' is named like a reference property but is not any of \
             [ObjectReferenceProperty, ReferenceProperty] (spec version 2.0)"
        );

        let err = DomainError::duplicate(RegistryCategory::Object, "x-acme-widget");
        assert_eq!(
            err.to_string(),
            "A(n) STIX Object with type 'x-acme-widget' has already been registered"
        );
    }

    #[test]
    fn test_conformance_property_accessor() {
        let err = ConformanceError::ReferenceListProperty {
            property: "owner_refs".to_owned(),
            version: SpecVersion::V2_1,
            accepted: vec![PropertyShape::Reference],
        };
        assert_eq!(err.property(), Some("owner_refs"));

        let err = ConformanceError::EmptyExtension {
            type_name: "x-acme-ext".to_owned(),
        };
        assert_eq!(err.property(), None);
    }
}
