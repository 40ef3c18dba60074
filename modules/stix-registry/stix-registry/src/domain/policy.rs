//! Per-version conformance rules.

use stix_registry_sdk::{PropertyShape, SpecVersion};

/// Grammar a type name must follow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeNameGrammar {
    /// Lowercase alphanumerics and hyphens, may start with a digit or hyphen.
    Legacy,
    /// Like `Legacy`, but must start with a lowercase letter.
    LetterFirst,
}

/// The rule set applied for one spec version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionPolicy {
    /// Shapes accepted for `*_ref` properties and `*_refs` list elements.
    pub reference_shapes: &'static [PropertyShape],
    /// Property names must begin with an alpha character.
    pub property_prefix_rule: bool,
    /// Extension type names must end with `-ext` or be `extension-definition--<UUID>`.
    pub extension_naming_rule: bool,
    pub type_name_grammar: TypeNameGrammar,
}

pub const TYPE_NAME_MIN_LEN: usize = 3;
pub const TYPE_NAME_MAX_LEN: usize = 250;

const STIX_20: VersionPolicy = VersionPolicy {
    reference_shapes: &[PropertyShape::ObjectReference, PropertyShape::Reference],
    property_prefix_rule: false,
    extension_naming_rule: false,
    type_name_grammar: TypeNameGrammar::Legacy,
};

const STIX_21: VersionPolicy = VersionPolicy {
    reference_shapes: &[PropertyShape::Reference],
    property_prefix_rule: true,
    extension_naming_rule: true,
    type_name_grammar: TypeNameGrammar::LetterFirst,
};

// Unknown versions are presumed newer than 2.1.
const FUTURE: VersionPolicy = VersionPolicy {
    extension_naming_rule: false,
    ..STIX_21
};

impl VersionPolicy {
    /// Looks up the policy for `version`.
    #[must_use]
    pub fn for_version(version: &SpecVersion) -> &'static Self {
        match version {
            SpecVersion::V2_0 => &STIX_20,
            SpecVersion::V2_1 => &STIX_21,
            SpecVersion::Other(_) => &FUTURE,
        }
    }

    #[must_use]
    pub fn accepts_reference(&self, shape: PropertyShape) -> bool {
        self.reference_shapes.contains(&shape)
    }
}
