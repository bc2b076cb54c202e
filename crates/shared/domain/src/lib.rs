//! # Domain Models
//!
//! Decorator metadata and feature-flag gating for attribute-driven DI registration.
//! This crate contains pure types with minimal dependencies (`serde`, `bitflags`).
//! Keep it lean: no I/O, no scanning, no container wiring. The host registration
//! engine reads these values at startup.
//!
//! ## Example
//!
//! ```rust
//! use adi_domain::decorator::Decorator;
//! use adi_domain::features::{FeatureFlag, is_feature_enabled};
//!
//! bitflags::bitflags! {
//!     #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
//!     pub struct Flags: u32 {
//!         const LOGGING = 1 << 0;
//!         const METRICS = 1 << 1;
//!     }
//! }
//! impl FeatureFlag for Flags {}
//!
//! let decorator = Decorator::<Flags>::builder().order(0).key("primary").feature(Flags::LOGGING).build();
//! assert_eq!(decorator.decoration_order(), 1);
//! assert!(decorator.is_enabled(Flags::LOGGING | Flags::METRICS));
//! assert!(!is_feature_enabled(Flags::METRICS, Flags::LOGGING));
//! ```

pub mod config;
pub mod decorator;
pub mod features;
pub mod registry;
