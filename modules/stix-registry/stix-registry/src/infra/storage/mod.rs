//! Storage implementations for the STIX Registry module.

mod in_memory_repo;

pub use in_memory_repo::InMemoryCatalogRepository;
