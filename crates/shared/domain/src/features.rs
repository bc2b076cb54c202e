use bitflags::{Flags, bitflags};
use std::fmt::Debug;

/// Marker for bitflags types usable as feature gates.
///
/// Opt in with an empty impl: `impl FeatureFlag for MyFlags {}`.
/// Only [`NoFeatures`] overrides [`FeatureFlag::NOOP`].
pub trait FeatureFlag: Flags + Copy + Debug + Send + Sync {
    /// `true` for the sentinel type that disables gating entirely.
    const NOOP: bool = false;
}

bitflags! {
    /// Sentinel flag set for decorators that are never gated.
    #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct NoFeatures: u32 {}
}

impl FeatureFlag for NoFeatures {
    const NOOP: bool = true;
}

/// Checks whether `feature` is active in `active`.
///
/// Any shared bit is enough: a composite target `A | B` is enabled when either `A` or `B`
/// is active. An empty target is never enabled, except for [`NoFeatures`], which always is.
///
/// Bits are intersected in the flag type's own width, so types backed by `u64` or `u128`
/// are handled without truncation.
#[must_use]
pub fn is_feature_enabled<F: FeatureFlag>(active: F, feature: F) -> bool {
    if F::NOOP {
        return true;
    }

    active.intersects(feature)
}
