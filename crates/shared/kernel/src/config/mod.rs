use adi_domain::config::{AdiConfig, FeatureConfig};
use bitflags::Flags;
use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

const DEFAULT_CONFIG_PATH: &str = "adi";

/// Custom error type for config loading.
#[adi_derive::adi_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Environment overrides: variables prefixed with `ADI__`, nested keys split on `__`.
///
/// `ADI__FEATURES__ACTIVE=LOGGING,METRICS` maps to `features.active`, split on commas.
#[must_use]
pub fn environment() -> Environment {
    Environment::with_prefix("ADI")
        .separator("__")
        .list_separator(",")
        .with_list_parse_key("features.active")
        .try_parsing(true)
}

/// A reusable configuration loader that combines file-based settings with environment overrides.
///
/// 1. **Base File**: Loads settings from a file (e.g., `adi.toml`). If no path is provided, it
///    defaults to `"adi"` in the current working directory (any supported extension).
/// 2. **Environment Overrides**: Overlays the process environment as described in
///    [`environment`].
///
/// # Errors
/// This function will return an error if:
/// * The specified (or default) configuration file cannot be found.
/// * The content of the file does not match the structure of type `T`.
///
/// # Example
/// ```rust
/// use adi_kernel::config::load_config;
/// use adi_kernel::domain::config::AdiConfig;
///
/// let cfg: AdiConfig = load_config(Some("config/local")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    load_config_with(path, environment())
}

/// Same as [`load_config`], with an explicit environment layer.
///
/// Pass `environment().source(Some(map))` to overlay a fixed set of variables instead of the
/// process environment.
///
/// # Errors
/// Returns [`ConfigError`] under the same conditions as [`load_config`].
pub fn load_config_with<T>(
    path: Option<impl AsRef<Path>>,
    environment: Environment,
) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let effective_path =
        path.map_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH), |p| p.as_ref().to_path_buf());

    let builder = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(true))
        .add_source(environment);

    info!("Loading config from {}", effective_path.display());

    let config = builder
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}

/// Resolves configured feature names into a flag set, warning about names `F` does not declare.
#[must_use]
pub fn resolve_features<F: Flags>(config: &FeatureConfig) -> F {
    for name in config.unknown::<F>() {
        warn!(feature = name, "Unknown feature flag in configuration, ignoring");
    }

    let active = config.resolve::<F>();
    info!(active = ?config.active, "Feature flags resolved");
    active
}

/// Loads [`AdiConfig`] and resolves its `[features]` section.
///
/// # Errors
/// Returns [`ConfigError`] under the same conditions as [`load_config`].
pub fn load_features<F: Flags>(path: Option<impl AsRef<Path>>) -> Result<F, ConfigError> {
    load_features_with(path, environment())
}

/// Same as [`load_features`], with an explicit environment layer.
///
/// # Errors
/// Returns [`ConfigError`] under the same conditions as [`load_config`].
pub fn load_features_with<F: Flags>(
    path: Option<impl AsRef<Path>>,
    environment: Environment,
) -> Result<F, ConfigError> {
    let config = load_config_with::<AdiConfig>(path, environment)?;
    Ok(resolve_features(&config.features))
}
