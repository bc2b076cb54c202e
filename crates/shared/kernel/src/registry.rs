//! Startup decorator table.
//!
//! The host registration engine fills the table once with explicit `register` calls,
//! then reads feature-filtered, order-sorted chains while building its container.

use adi_domain::decorator::{Decorator, ServiceType};
use adi_domain::features::{FeatureFlag, NoFeatures};
use adi_domain::registry::Decorates;
use fxhash::FxHashMap;
use std::borrow::Cow;
use tracing::{debug, trace};

#[adi_derive::adi_error]
pub enum RegistryError {
    #[error("Duplicate decorator registration{}: {message}", format_context(.context))]
    Duplicate { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

/// A registered implementation together with its declared metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecoratorEntry<F: FeatureFlag = NoFeatures> {
    implementation: ServiceType,
    decorator: Decorator<F>,
}

impl<F: FeatureFlag> DecoratorEntry<F> {
    #[must_use]
    pub const fn implementation(&self) -> ServiceType {
        self.implementation
    }

    #[must_use]
    pub const fn decorator(&self) -> &Decorator<F> {
        &self.decorator
    }
}

#[derive(Debug)]
pub struct DecoratorRegistry<F: FeatureFlag = NoFeatures> {
    entries: Vec<DecoratorEntry<F>>,
    index: FxHashMap<ServiceType, usize>,
}

impl<F: FeatureFlag> Default for DecoratorRegistry<F> {
    fn default() -> Self {
        Self { entries: Vec::new(), index: FxHashMap::default() }
    }
}

impl<F: FeatureFlag> DecoratorRegistry<F> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an implementation declared with `#[decorator(...)]`.
    ///
    /// # Errors
    /// Returns [`RegistryError::Duplicate`] if `T` is already registered.
    pub fn register<T: Decorates<F>>(&mut self) -> Result<(), RegistryError> {
        self.register_descriptor(T::implementation(), T::decorator())
    }

    /// Registers metadata for an implementation type without going through [`Decorates`].
    ///
    /// # Errors
    /// Returns [`RegistryError::Duplicate`] if `implementation` is already registered.
    pub fn register_descriptor(
        &mut self,
        implementation: ServiceType,
        decorator: Decorator<F>,
    ) -> Result<(), RegistryError> {
        if self.index.contains_key(&implementation) {
            return Err(RegistryError::Duplicate {
                message: implementation.name().into(),
                context: None,
            });
        }

        debug!(
            implementation = %implementation,
            service = decorator.service().map_or("<unresolved>", |s| s.name()),
            order = decorator.decoration_order(),
            key = decorator.key(),
            "Decorator registered"
        );

        self.index.insert(implementation, self.entries.len());
        self.entries.push(DecoratorEntry { implementation, decorator });
        Ok(())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &DecoratorEntry<F>> {
        self.entries.iter()
    }

    #[must_use]
    pub fn get(&self, implementation: ServiceType) -> Option<&DecoratorEntry<F>> {
        self.index.get(&implementation).map(|&i| &self.entries[i])
    }

    /// Entries enabled for `active`, innermost (lowest order) first.
    ///
    /// Equal orders keep their registration order.
    #[must_use]
    pub fn enabled(&self, active: F) -> Vec<&DecoratorEntry<F>> {
        let mut enabled: Vec<_> = self.entries.iter().filter(|e| e.is_enabled_for(active)).collect();
        enabled.sort_by_key(|e| e.decorator.decoration_order());
        enabled
    }

    /// The enabled decoration chain for one service slot, innermost first.
    ///
    /// Only entries with an explicit service are matched; keys must be equal
    /// (`None` only matches `None`).
    #[must_use]
    pub fn chain_for(
        &self,
        service: ServiceType,
        key: Option<&str>,
        active: F,
    ) -> Vec<&DecoratorEntry<F>> {
        let mut chain = self.enabled(active);
        chain.retain(|e| e.decorator.service() == Some(service) && e.decorator.key() == key);
        chain
    }

    /// Entries whose service is left for the registration engine to resolve.
    pub fn unresolved(&self) -> impl Iterator<Item = &DecoratorEntry<F>> {
        self.entries.iter().filter(|e| e.decorator.service().is_none())
    }
}

impl<F: FeatureFlag> DecoratorEntry<F> {
    fn is_enabled_for(&self, active: F) -> bool {
        let enabled = self.decorator.is_enabled(active);
        if !enabled {
            trace!(implementation = %self.implementation, "Decorator skipped, feature inactive");
        }
        enabled
    }
}
