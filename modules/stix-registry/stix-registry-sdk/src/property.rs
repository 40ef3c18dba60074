//! Property contract consumed by the registry.
//!
//! The registry never looks at property values. It only needs to know what
//! kind of property a definition is, and for lists, what they contain.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// The concrete kind of a property definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum PropertyShape {
    String,
    Integer,
    Float,
    Boolean,
    Timestamp,
    Hex,
    Binary,
    Hashes,
    Enum,
    OpenVocab,
    Id,
    Type,
    Dictionary,
    Embedded,
    Extension,
    Pattern,
    SelectorList,
    /// Refers to another object by identifier (STIX 2.0 style).
    ObjectReference,
    /// Refers to another object by identifier.
    Reference,
    List,
}

impl fmt::Display for PropertyShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::String => "StringProperty",
            Self::Integer => "IntegerProperty",
            Self::Float => "FloatProperty",
            Self::Boolean => "BooleanProperty",
            Self::Timestamp => "TimestampProperty",
            Self::Hex => "HexProperty",
            Self::Binary => "BinaryProperty",
            Self::Hashes => "HashesProperty",
            Self::Enum => "EnumProperty",
            Self::OpenVocab => "OpenVocabProperty",
            Self::Id => "IDProperty",
            Self::Type => "TypeProperty",
            Self::Dictionary => "DictionaryProperty",
            Self::Embedded => "EmbeddedObjectProperty",
            Self::Extension => "ExtensionsProperty",
            Self::Pattern => "PatternProperty",
            Self::SelectorList => "SelectorProperty",
            Self::ObjectReference => "ObjectReferenceProperty",
            Self::Reference => "ReferenceProperty",
            Self::List => "ListProperty",
        };
        f.write_str(name)
    }
}

/// A property definition as seen by the registry.
pub trait Property: fmt::Debug + Send + Sync {
    /// The kind of this property.
    fn shape(&self) -> PropertyShape;

    /// For list properties, the definition of the contained elements.
    fn contained(&self) -> Option<&dyn Property> {
        None
    }
}

/// Property name → definition. Ordering carries no meaning for validation.
pub type PropertySet = BTreeMap<String, Arc<dyn Property>>;

/// Concrete [`Property`] implementation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyDefinition {
    shape: PropertyShape,
    contained: Option<Box<PropertyDefinition>>,
}

impl PropertyDefinition {
    /// Creates a property of the given shape.
    ///
    /// Use [`PropertyDefinition::list`] for lists so that the contained
    /// definition is recorded.
    #[must_use]
    pub const fn new(shape: PropertyShape) -> Self {
        Self {
            shape,
            contained: None,
        }
    }

    #[must_use]
    pub const fn string() -> Self {
        Self::new(PropertyShape::String)
    }

    #[must_use]
    pub const fn integer() -> Self {
        Self::new(PropertyShape::Integer)
    }

    #[must_use]
    pub const fn timestamp() -> Self {
        Self::new(PropertyShape::Timestamp)
    }

    #[must_use]
    pub const fn reference() -> Self {
        Self::new(PropertyShape::Reference)
    }

    #[must_use]
    pub const fn object_reference() -> Self {
        Self::new(PropertyShape::ObjectReference)
    }

    /// A list property holding elements described by `contained`.
    #[must_use]
    pub fn list(contained: Self) -> Self {
        Self {
            shape: PropertyShape::List,
            contained: Some(Box::new(contained)),
        }
    }
}

impl Property for PropertyDefinition {
    fn shape(&self) -> PropertyShape {
        self.shape
    }

    fn contained(&self) -> Option<&dyn Property> {
        self.contained.as_deref().map(|p| p as &dyn Property)
    }
}
