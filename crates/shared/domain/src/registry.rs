//! Compile-time declaration of decorator metadata.
//! Implementations are normally generated by the `#[decorator(...)]` attribute macro.

use crate::decorator::{Decorator, ServiceType};
use crate::features::{FeatureFlag, NoFeatures};

/// An implementation type that decorates an existing service registration.
pub trait Decorates<F: FeatureFlag = NoFeatures>: 'static {
    /// The metadata declared for this implementation.
    fn decorator() -> Decorator<F>;

    /// The implementation type itself.
    #[must_use]
    fn implementation() -> ServiceType {
        ServiceType::of::<Self>()
    }
}
