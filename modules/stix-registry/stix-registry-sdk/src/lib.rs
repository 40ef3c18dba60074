//! STIX Registry SDK
//!
//! This crate provides the public contract of the `stix-registry` module:
//! - `StixRegistryApi` trait for registering and resolving custom types
//! - `SpecVersion` identifying which rule set applies
//! - `Property` / `PropertyDefinition` describing a type's properties
//! - `TypeDefinition` candidate types and `RegistryCategory` namespaces
//! - `StixRegistryError` for error handling
//!
//! ## Usage
//!
//! ```ignore
//! use stix_registry_sdk::{PropertyDefinition, StixRegistryApi, TypeDefinition};
//!
//! let definition = TypeDefinition::declare_object("x-acme-widget")
//!     .with_property("name", PropertyDefinition::string())
//!     .with_property("owner_ref", PropertyDefinition::reference());
//!
//! client.register_object(definition, None)?;
//! ```

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

pub mod api;
pub mod error;
pub mod models;
pub mod property;
pub mod version;

// Re-export main types at crate root for convenience
pub use api::StixRegistryApi;
pub use error::StixRegistryError;
pub use models::{RegistryCategory, TypeDefinition};
pub use property::{Property, PropertyDefinition, PropertySet, PropertyShape};
pub use version::{FutureVersion, SpecVersion};
