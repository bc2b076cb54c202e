use bitflags::Flags;
use serde::Deserialize;

/// Wildcard names selecting every declared flag.
pub const ALL_FEATURES: &[&str] = &["all", "*"];

/// Active feature names, as read from configuration.
#[derive(Default, Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FeatureConfig {
    pub active: Vec<String>,
}

impl FeatureConfig {
    /// Resolves the configured names into a flag set.
    ///
    /// Names match the flag constants as declared (`LOGGING`, `METRICS`, ...).
    /// Unknown names are skipped; see [`FeatureConfig::unknown`].
    #[must_use]
    pub fn resolve<F: Flags>(&self) -> F {
        self.active.iter().fold(F::empty(), |mut flags, name| {
            if let Some(flag) = parse_feature::<F>(name) {
                flags.insert(flag);
            }
            flags
        })
    }

    /// Names that do not match any flag of `F`.
    pub fn unknown<F: Flags>(&self) -> impl Iterator<Item = &str> {
        self.active
            .iter()
            .map(String::as_str)
            .filter(|name| parse_feature::<F>(name).is_none())
    }
}

fn parse_feature<F: Flags>(name: &str) -> Option<F> {
    let name = name.trim();
    if ALL_FEATURES.contains(&name) {
        return Some(F::all());
    }
    F::from_name(name)
}

/// Top-level configuration layout (`[features]` section).
#[derive(Default, Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AdiConfig {
    pub features: FeatureConfig,
}
