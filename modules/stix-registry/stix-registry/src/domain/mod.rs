//! Domain layer for the STIX Registry module.
//!
//! Contains version policy, the conformance validator, error types, the
//! repository trait, and the registration service.

pub mod error;
pub mod policy;
pub mod repo;
pub mod service;
pub mod validation;

pub use error::{ConformanceError, DomainError};
pub use repo::CatalogRepository;
pub use service::StixRegistryService;
