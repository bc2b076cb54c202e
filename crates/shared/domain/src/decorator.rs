//! Decoration metadata attached to an implementation type.

use crate::features::{FeatureFlag, NoFeatures, is_feature_enabled};
use std::any::{TypeId, type_name};
use std::borrow::Cow;
use std::fmt::{self, Display};
use std::hash::{Hash, Hasher};

const MIN_DECORATION_ORDER: i32 = 1;

/// A service type reference (works for `dyn Trait` as well as concrete types).
///
/// Equality and hashing only look at the [`TypeId`]; the name is kept for diagnostics.
#[derive(Debug, Clone, Copy)]
pub struct ServiceType {
    id: TypeId,
    name: &'static str,
}

impl ServiceType {
    #[must_use]
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self { id: TypeId::of::<T>(), name: type_name::<T>() }
    }

    #[must_use]
    pub const fn id(&self) -> TypeId {
        self.id
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }
}

impl PartialEq for ServiceType {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ServiceType {}

impl Hash for ServiceType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl Display for ServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Marks an implementation as a decorator for an existing service registration.
///
/// Values are built once at startup and only read afterwards. The open-generic wildcard
/// is the one field that stays adjustable after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decorator<F: FeatureFlag = NoFeatures> {
    service: Option<ServiceType>,
    decoration_order: i32,
    key: Option<Cow<'static, str>>,
    feature: Option<F>,
    treat_open_generics_as_wildcard: bool,
}

impl<F: FeatureFlag> Decorator<F> {
    /// Creates a descriptor gated by a caller-defined flag type.
    ///
    /// # Arguments
    /// * `service` - Target service. `None` leaves resolution to the registration engine
    ///   (first implemented interface).
    /// * `decoration_order` - Position in the chain. Lower values sit closer to the original
    ///   implementation, the highest runs last. Anything below 1 is raised to 1.
    /// * `key` - Keyed-service slot the decorator applies to.
    /// * `feature` - Feature gate. `None` means always active.
    /// * `treat_open_generics_as_wildcard` - Apply an open-generic decorator to every closed
    ///   registration of the open type, regardless of type-argument constraints.
    #[must_use]
    pub fn new(
        service: Option<ServiceType>,
        decoration_order: i32,
        key: Option<Cow<'static, str>>,
        feature: Option<F>,
        treat_open_generics_as_wildcard: bool,
    ) -> Self {
        Self {
            service,
            decoration_order: decoration_order.max(MIN_DECORATION_ORDER),
            key,
            feature,
            treat_open_generics_as_wildcard,
        }
    }

    #[must_use]
    pub fn builder() -> DecoratorBuilder<F> {
        DecoratorBuilder::default()
    }

    #[must_use]
    pub const fn service(&self) -> Option<ServiceType> {
        self.service
    }

    #[must_use]
    pub const fn decoration_order(&self) -> i32 {
        self.decoration_order
    }

    #[must_use]
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    #[must_use]
    pub const fn feature(&self) -> Option<F> {
        self.feature
    }

    #[must_use]
    pub const fn treat_open_generics_as_wildcard(&self) -> bool {
        self.treat_open_generics_as_wildcard
    }

    pub const fn set_treat_open_generics_as_wildcard(&mut self, enabled: bool) {
        self.treat_open_generics_as_wildcard = enabled;
    }

    /// Whether the decorator should be applied for the given active feature set.
    #[must_use]
    pub fn is_enabled(&self, active: F) -> bool {
        self.feature.is_none_or(|feature| is_feature_enabled(active, feature))
    }
}

impl Decorator<NoFeatures> {
    /// Convenience form for decorators that never use feature gating.
    #[must_use]
    pub fn plain(
        service: Option<ServiceType>,
        decoration_order: i32,
        key: Option<Cow<'static, str>>,
        treat_open_generics_as_wildcard: bool,
    ) -> Self {
        Self::new(service, decoration_order, key, None, treat_open_generics_as_wildcard)
    }
}

impl<F: FeatureFlag> Default for Decorator<F> {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Builder mirroring the defaults of [`Decorator::new`].
#[derive(Debug)]
pub struct DecoratorBuilder<F: FeatureFlag = NoFeatures> {
    service: Option<ServiceType>,
    decoration_order: i32,
    key: Option<Cow<'static, str>>,
    feature: Option<F>,
    treat_open_generics_as_wildcard: bool,
}

impl<F: FeatureFlag> Default for DecoratorBuilder<F> {
    fn default() -> Self {
        Self {
            service: None,
            decoration_order: MIN_DECORATION_ORDER,
            key: None,
            feature: None,
            treat_open_generics_as_wildcard: false,
        }
    }
}

impl<F: FeatureFlag> DecoratorBuilder<F> {
    #[must_use]
    pub fn service<T: ?Sized + 'static>(mut self) -> Self {
        self.service = Some(ServiceType::of::<T>());
        self
    }

    #[must_use]
    pub const fn service_type(mut self, service: ServiceType) -> Self {
        self.service = Some(service);
        self
    }

    #[must_use]
    pub const fn order(mut self, decoration_order: i32) -> Self {
        self.decoration_order = decoration_order;
        self
    }

    #[must_use]
    pub fn key(mut self, key: impl Into<Cow<'static, str>>) -> Self {
        self.key = Some(key.into());
        self
    }

    #[must_use]
    pub fn feature(mut self, feature: F) -> Self {
        self.feature = Some(feature);
        self
    }

    #[must_use]
    pub const fn open_generics_wildcard(mut self, enabled: bool) -> Self {
        self.treat_open_generics_as_wildcard = enabled;
        self
    }

    #[must_use]
    pub fn build(self) -> Decorator<F> {
        Decorator::new(
            self.service,
            self.decoration_order,
            self.key,
            self.feature,
            self.treat_open_generics_as_wildcard,
        )
    }
}
