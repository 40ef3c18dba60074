//! Public error types for the `stix-registry` module.
//!
//! These errors are safe to expose to other modules and consumers.

use thiserror::Error;

/// Errors that can be returned by the `StixRegistryApi`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StixRegistryError {
    /// A domain object was not created through the custom object declaration path.
    #[error("'{0}' must be created with the custom object declaration")]
    Declaration(String),

    /// The property set or naming does not conform to the spec version.
    #[error("Conformance error: {0}")]
    Conformance(String),

    /// The type name is already registered in the target namespace and version.
    #[error("A(n) {category} with type '{type_name}' has already been registered")]
    DuplicateRegistration {
        category: String,
        type_name: String,
    },

    /// The type name does not have a valid shape.
    #[error("Invalid type name: {0}")]
    InvalidIdentifier(String),

    /// No type with that name is registered.
    #[error("Type not found: {0}")]
    NotFound(String),

    /// An internal error occurred.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl StixRegistryError {
    /// Creates a `Declaration` error.
    #[must_use]
    pub fn declaration(type_name: impl Into<String>) -> Self {
        Self::Declaration(type_name.into())
    }

    /// Creates a `Conformance` error.
    #[must_use]
    pub fn conformance(message: impl Into<String>) -> Self {
        Self::Conformance(message.into())
    }

    /// Creates a `DuplicateRegistration` error.
    #[must_use]
    pub fn duplicate_registration(
        category: impl Into<String>,
        type_name: impl Into<String>,
    ) -> Self {
        Self::DuplicateRegistration {
            category: category.into(),
            type_name: type_name.into(),
        }
    }

    /// Creates an `InvalidIdentifier` error.
    #[must_use]
    pub fn invalid_identifier(message: impl Into<String>) -> Self {
        Self::InvalidIdentifier(message.into())
    }

    /// Creates a `NotFound` error.
    #[must_use]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    /// Creates an `Internal` error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    #[must_use]
    pub const fn is_declaration(&self) -> bool {
        matches!(self, Self::Declaration(_))
    }

    #[must_use]
    pub const fn is_conformance(&self) -> bool {
        matches!(self, Self::Conformance(_))
    }

    #[must_use]
    pub const fn is_duplicate_registration(&self) -> bool {
        matches!(self, Self::DuplicateRegistration { .. })
    }

    #[must_use]
    pub const fn is_invalid_identifier(&self) -> bool {
        matches!(self, Self::InvalidIdentifier(_))
    }

    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_constructors() {
        assert!(StixRegistryError::declaration("x-foo").is_declaration());
        assert!(StixRegistryError::conformance("bad name").is_conformance());
        assert!(StixRegistryError::duplicate_registration("Extension", "x-foo-ext")
            .is_duplicate_registration());
        assert!(StixRegistryError::invalid_identifier("X").is_invalid_identifier());
        assert!(StixRegistryError::not_found("x-foo").is_not_found());
        assert!(matches!(
            StixRegistryError::internal("boom"),
            StixRegistryError::Internal(_)
        ));
    }

    #[test]
    fn test_error_display() {
        let err = StixRegistryError::duplicate_registration("STIX Object", "x-acme-widget");
        assert_eq!(
            err.to_string(),
            "A(n) STIX Object with type 'x-acme-widget' has already been registered"
        );

        let err = StixRegistryError::declaration("x-acme-widget");
        assert_eq!(
            err.to_string(),
            "'x-acme-widget' must be created with the custom object declaration"
        );
    }
}
