use adi_kernel::config::{
    ConfigError, environment, load_config, load_features, load_features_with, resolve_features,
};
use adi_kernel::domain::config::{AdiConfig, FeatureConfig};
use bitflags::bitflags;
use std::fs;
use tempfile::tempdir;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct Flags: u32 {
        const LOGGING = 1 << 0;
        const METRICS = 1 << 1;
    }
}

#[test]
fn loads_features_from_toml() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("adi.toml");
    fs::write(&path, "[features]\nactive = [\"LOGGING\", \"UNKNOWN\"]\n").expect("write config");

    let active: Flags = load_features(Some(&path)).expect("load features");
    assert_eq!(active, Flags::LOGGING);

    let cfg: AdiConfig = load_config(Some(&path)).expect("load config");
    assert_eq!(cfg.features.active, vec!["LOGGING".to_owned(), "UNKNOWN".to_owned()]);
}

#[test]
fn empty_file_means_no_features() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("empty.toml");
    fs::write(&path, "").expect("write config");

    let active: Flags = load_features(Some(&path)).expect("load features");
    assert_eq!(active, Flags::empty());
}

#[test]
fn missing_file_is_a_config_error() {
    let dir = tempdir().expect("temp dir");
    let err = load_features::<Flags>(Some(dir.path().join("absent.toml")))
        .expect_err("missing file should fail");

    assert!(matches!(err, ConfigError::Config { context: Some(_), .. }));
}

#[test]
fn resolve_accepts_wildcard() {
    let cfg = FeatureConfig { active: vec!["*".to_owned()] };
    assert_eq!(resolve_features::<Flags>(&cfg), Flags::all());
}

#[test]
fn environment_overrides_file_features() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("adi.toml");
    fs::write(&path, "[features]\nactive = []\n").expect("write config");

    let vars = |value: &str| {
        Some([("ADI__FEATURES__ACTIVE".to_owned(), value.to_owned())].into_iter().collect())
    };

    let active: Flags =
        load_features_with(Some(&path), environment().source(vars("LOGGING,METRICS")))
            .expect("load features");
    assert_eq!(active, Flags::LOGGING | Flags::METRICS);

    let active: Flags = load_features_with(Some(&path), environment().source(vars("METRICS")))
        .expect("load features");
    assert_eq!(active, Flags::METRICS);
}

#[test]
fn empty_environment_keeps_file_features() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("adi.toml");
    fs::write(&path, "[features]\nactive = [\"METRICS\"]\n").expect("write config");

    let empty = environment().source(Some(Default::default()));
    let active: Flags = load_features_with(Some(&path), empty).expect("load features");
    assert_eq!(active, Flags::METRICS);
}
