//! Infrastructure layer for the STIX Registry module.
//!
//! Contains storage implementations.

pub mod storage;

pub use storage::InMemoryCatalogRepository;
