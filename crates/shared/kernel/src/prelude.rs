//! Common imports for decorator declarations and the startup table.

pub use crate::registry::{DecoratorEntry, DecoratorRegistry, RegistryError, RegistryErrorExt};
pub use adi_domain::config::FeatureConfig;
pub use adi_domain::decorator::{Decorator, ServiceType};
pub use adi_domain::features::{FeatureFlag, NoFeatures, is_feature_enabled};
pub use adi_domain::registry::Decorates;
