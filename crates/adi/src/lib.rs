//! Facade crate for attribute-driven decorator metadata.
//! Re-exports domain/kernel primitives and the declaration macros, and wires the startup
//! sequence: resolve the active feature set, then fill the decorator table.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! - Declare decorators with [`decorator`] (generated code refers to `::adi_kernel`, so
//!   depend on `adi-kernel` as well).
//! - Call [`bootstrap`] once at startup and hand the result to the registration engine.

pub use adi_derive::{adi_error, decorator};
pub use adi_domain as domain;
pub use adi_kernel as kernel;
pub use adi_logger as logger;

use adi_kernel::config::{ConfigError, load_features};
use adi_kernel::domain::features::FeatureFlag;
use adi_kernel::registry::{DecoratorEntry, DecoratorRegistry, RegistryError};
use std::borrow::Cow;
use std::path::Path;

pub mod prelude {
    pub use adi_derive::decorator;
    pub use adi_kernel::prelude::*;
}

#[adi_derive::adi_error]
pub enum BootstrapError {
    #[error("Bootstrap config error{}: {source}", format_context(.context))]
    Config { source: ConfigError, context: Option<Cow<'static, str>> },
    #[error("Bootstrap registry error{}: {source}", format_context(.context))]
    Registry { source: RegistryError, context: Option<Cow<'static, str>> },
}

/// The resolved feature set together with the filled decorator table.
#[derive(Debug)]
pub struct Bootstrap<F: FeatureFlag> {
    pub active: F,
    pub registry: DecoratorRegistry<F>,
}

impl<F: FeatureFlag> Bootstrap<F> {
    /// Decorators enabled under the resolved feature set, innermost first.
    #[must_use]
    pub fn enabled(&self) -> Vec<&DecoratorEntry<F>> {
        self.registry.enabled(self.active)
    }
}

/// Loads the active feature set from `config_path` and runs the explicit registrations.
///
/// # Errors
/// Returns [`BootstrapError::Config`] if the configuration cannot be loaded and
/// [`BootstrapError::Registry`] if `register` reports a registration failure.
pub fn bootstrap<F, R>(
    config_path: Option<impl AsRef<Path>>,
    register: R,
) -> Result<Bootstrap<F>, BootstrapError>
where
    F: FeatureFlag,
    R: FnOnce(&mut DecoratorRegistry<F>) -> Result<(), RegistryError>,
{
    let active = load_features::<F>(config_path).context("Loading feature flags")?;

    let mut registry = DecoratorRegistry::new();
    register(&mut registry).context("Registering decorators")?;

    tracing::info!(
        registered = registry.len(),
        enabled = registry.enabled(active).len(),
        "Decorator table ready"
    );

    Ok(Bootstrap { active, registry })
}
