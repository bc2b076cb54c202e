//! Kernel utilities shared by decorator consumers.
//! Keep this crate lightweight: it holds the startup decorator table and configuration
//! loading, and re-exports the domain models.
//!
//! ## Decorator table
//! ```rust
//! use adi_kernel::domain::decorator::{Decorator, ServiceType};
//! use adi_kernel::domain::features::NoFeatures;
//! use adi_kernel::registry::DecoratorRegistry;
//!
//! trait Greeter {}
//! struct LoudGreeter;
//!
//! let mut registry = DecoratorRegistry::<NoFeatures>::new();
//! registry
//!     .register_descriptor(
//!         ServiceType::of::<LoudGreeter>(),
//!         Decorator::plain(Some(ServiceType::of::<dyn Greeter>()), 2, None, false),
//!     )
//!     .unwrap();
//!
//! let chain = registry.chain_for(ServiceType::of::<dyn Greeter>(), None, NoFeatures::empty());
//! assert_eq!(chain.len(), 1);
//! ```
//!
//! ## Config loading (non-wasm)
//! ```rust,ignore
//! use adi_kernel::config::load_features;
//! let active: MyFlags = load_features(Some("config/adi.toml")).unwrap_or_default();
//! ```
#[cfg(not(target_arch = "wasm32"))]
pub mod config;
pub mod prelude;
pub mod registry;

pub use adi_domain as domain;
