//! Conformance checks for custom type definitions.
//!
//! All checks are pure: they inspect a property set or a type name against
//! a spec version and report the first violation found.

use std::sync::LazyLock;

use regex::Regex;
use stix_registry_sdk::{Property, PropertySet, PropertyShape, SpecVersion};
use uuid::Uuid;

use super::error::{ConformanceError, DomainError};
use super::policy::{TYPE_NAME_MAX_LEN, TYPE_NAME_MIN_LEN, TypeNameGrammar, VersionPolicy};

#[allow(clippy::expect_used)] // good regex, it doesn't panic
static LEGACY_TYPE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^-?[a-z0-9]+(-[a-z0-9]+)*-?$").expect("static regex should not panic")
});
#[allow(clippy::expect_used)] // good regex, it doesn't panic
static LETTER_FIRST_TYPE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([a-z][a-z0-9]*)+([a-z0-9-]+)*-?$").expect("static regex should not panic")
});

const EXTENSION_SUFFIX: &str = "-ext";
const EXTENSION_DEFINITION_PREFIX: &str = "extension-definition--";
const HYPHENATED_UUID_LEN: usize = 36;

/// Validates that a property set conforms to `version`.
///
/// # Errors
///
/// Returns the first naming or reference-typing violation.
pub fn validate_properties(
    properties: &PropertySet,
    version: &SpecVersion,
) -> Result<(), ConformanceError> {
    let policy = VersionPolicy::for_version(version);

    if policy.property_prefix_rule
        && let Some(name) = properties
            .keys()
            .find(|name| !name.starts_with(|c: char| c.is_ascii_alphabetic()))
    {
        return Err(ConformanceError::PropertyName {
            property: name.clone(),
            version: version.clone(),
        });
    }

    validate_reference_properties(properties, version)
}

/// Validates that properties named like references are backed by reference shapes.
///
/// Only the part of the name after the final `_` is considered: `owner_ref`
/// must be a reference, `owner_refs` a list of references, `ref_count` is
/// left alone.
///
/// # Errors
///
/// Returns the first `*_ref` / `*_refs` property with the wrong shape.
pub fn validate_reference_properties(
    properties: &PropertySet,
    version: &SpecVersion,
) -> Result<(), ConformanceError> {
    let policy = VersionPolicy::for_version(version);

    for (name, property) in properties {
        let tail = name.rsplit('_').next().unwrap_or(name);
        match tail {
            "ref" if !policy.accepts_reference(property.shape()) => {
                return Err(ConformanceError::ReferenceProperty {
                    property: name.clone(),
                    version: version.clone(),
                    accepted: policy.reference_shapes.to_vec(),
                });
            }
            "refs" if !is_reference_list(property.as_ref(), policy) => {
                return Err(ConformanceError::ReferenceListProperty {
                    property: name.clone(),
                    version: version.clone(),
                    accepted: policy.reference_shapes.to_vec(),
                });
            }
            _ => {}
        }
    }

    Ok(())
}

fn is_reference_list(property: &dyn Property, policy: &VersionPolicy) -> bool {
    property.shape() == PropertyShape::List
        && property
            .contained()
            .is_some_and(|inner| policy.accepts_reference(inner.shape()))
}

/// Validates the shape of a type name for `version`.
///
/// # Errors
///
/// Returns `InvalidIdentifier` if the name uses characters outside the
/// version's grammar or is not between 3 and 250 characters long.
pub fn validate_type_name(type_name: &str, version: &SpecVersion) -> Result<(), DomainError> {
    let policy = VersionPolicy::for_version(version);

    match policy.type_name_grammar {
        TypeNameGrammar::Legacy if !LEGACY_TYPE_REGEX.is_match(type_name) => {
            return Err(DomainError::invalid_identifier(
                type_name,
                version,
                "must only contain the characters a-z (lowercase ASCII), 0-9, and hyphen (-)",
            ));
        }
        TypeNameGrammar::LetterFirst if !LETTER_FIRST_TYPE_REGEX.is_match(type_name) => {
            return Err(DomainError::invalid_identifier(
                type_name,
                version,
                "must only contain the characters a-z (lowercase ASCII), 0-9, and hyphen (-) \
                 and must begin with an a-z character",
            ));
        }
        _ => {}
    }

    if !(TYPE_NAME_MIN_LEN..=TYPE_NAME_MAX_LEN).contains(&type_name.len()) {
        return Err(DomainError::invalid_identifier(
            type_name,
            version,
            format!("must be between {TYPE_NAME_MIN_LEN} and {TYPE_NAME_MAX_LEN} characters"),
        ));
    }

    Ok(())
}

/// Validates the extension naming convention, where `version` has one.
///
/// # Errors
///
/// Returns `ExtensionName` if the name neither ends with `-ext` nor is
/// `extension-definition--` followed by a hyphenated UUID.
pub fn validate_extension_type_name(
    type_name: &str,
    version: &SpecVersion,
) -> Result<(), ConformanceError> {
    if !VersionPolicy::for_version(version).extension_naming_rule {
        return Ok(());
    }

    let is_definition = type_name
        .strip_prefix(EXTENSION_DEFINITION_PREFIX)
        .is_some_and(|id| id.len() == HYPHENATED_UUID_LEN && Uuid::try_parse(id).is_ok());

    if type_name.ends_with(EXTENSION_SUFFIX) || is_definition {
        Ok(())
    } else {
        Err(ConformanceError::ExtensionName {
            type_name: type_name.to_owned(),
            version: version.clone(),
        })
    }
}
