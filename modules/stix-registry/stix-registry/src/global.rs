//! Process-wide registry instance.
//!
//! Code that cannot thread a [`StixRegistryModule`] through explicitly can
//! initialize one for the whole process here and fetch it anywhere.

use std::sync::OnceLock;

use crate::config::StixRegistryConfig;
use crate::module::StixRegistryModule;

static REGISTRY: OnceLock<StixRegistryModule> = OnceLock::new();

/// Initializes the process-wide registry.
///
/// # Errors
///
/// Fails if the process-wide registry was already initialized.
pub fn init(cfg: &StixRegistryConfig) -> anyhow::Result<&'static StixRegistryModule> {
    let module = REGISTRY.get_or_init(StixRegistryModule::new);
    module.init(cfg)?;
    Ok(module)
}

/// Returns the process-wide registry, if initialized.
#[must_use]
pub fn get() -> Option<&'static StixRegistryModule> {
    REGISTRY.get().filter(|module| module.is_initialized())
}
