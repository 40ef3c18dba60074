//! STIX Registry Module Implementation
//!
//! This module provides registration, conformance validation, and lookup of
//! custom STIX types. The public API is defined in `stix-registry-sdk` and
//! re-exported here.
//!
//! ## Architecture
//!
//! - **One catalog per spec version**: each split into objects, markings,
//!   observables, and extensions namespaces
//! - **Validation before mutation**: a rejected registration never touches a catalog
//! - **Append-only**: a type name is registered at most once per namespace and version

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

// === PUBLIC API (from SDK) ===
pub use stix_registry_sdk::{
    Property, PropertyDefinition, PropertySet, PropertyShape, RegistryCategory, SpecVersion,
    StixRegistryApi, StixRegistryError, TypeDefinition,
};

// === MODULE DEFINITION ===
pub mod global;
pub mod module;
pub use module::StixRegistryModule;

// === CONFIGURATION ===
pub mod config;

// === INTERNAL MODULES ===
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
pub mod local_client;
