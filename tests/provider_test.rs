//! Integration tests for the environment config provider.
//!
//! These tests drive the public API with a scripted reader instead of
//! mutating the process-global environment.

use std::collections::HashMap;
use std::path::PathBuf;

use konan_env::{AppError, EnvironmentConfigProvider, EnvironmentReader};

// =============================================================================
// Scripted reader
// =============================================================================

/// Reader serving a fixed set of variables
struct ScriptedEnvironment {
    vars: HashMap<String, String>,
}

impl ScriptedEnvironment {
    fn new(vars: &[(&str, &str)]) -> Self {
        Self {
            vars: vars
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }
}

impl EnvironmentReader for ScriptedEnvironment {
    fn var(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }
}

fn xcode_environment() -> ScriptedEnvironment {
    ScriptedEnvironment::new(&[
        ("CONFIGURATION_BUILD_DIR", "/tmp/Build/Products/Release"),
        ("DEBUGGING_SYMBOLS", "YES"),
        ("KONAN_ENABLE_OPTIMIZATIONS", "yes"),
    ])
}

// =============================================================================
// Disabled variant
// =============================================================================

#[test]
fn disabled_provider_returns_empty_config() {
    let provider = EnvironmentConfigProvider::<ScriptedEnvironment>::Disabled;
    let config = provider.snapshot().unwrap();

    assert_eq!(config.build_output_dir, None);
    assert!(!config.debug_symbols_enabled);
    assert!(!config.optimizations_enabled);
}

#[test]
fn opted_out_run_never_sees_environment_contents() {
    // The variant is chosen purely by the flag; with the flag off even a
    // fully populated Xcode environment resolves to the baseline.
    let provider = EnvironmentConfigProvider::from_opt_in(false);
    let config = provider.snapshot().unwrap();

    assert_eq!(config.build_output_dir, None);
    assert!(!config.debug_symbols_enabled);
    assert!(!config.optimizations_enabled);
}

// =============================================================================
// Enabled variant
// =============================================================================

#[test]
fn enabled_provider_resolves_full_environment() {
    let provider = EnvironmentConfigProvider::Enabled(xcode_environment());
    let config = provider.snapshot().unwrap();

    assert_eq!(
        config.build_output_dir,
        Some(PathBuf::from("/tmp/Build/Products/Release"))
    );
    assert!(config.debug_symbols_enabled);
    assert!(config.optimizations_enabled);
}

#[test]
fn enabled_provider_defaults_on_empty_environment() {
    let provider = EnvironmentConfigProvider::Enabled(ScriptedEnvironment::new(&[]));
    let config = provider.snapshot().unwrap();

    assert_eq!(config.build_output_dir, None);
    assert!(!config.debug_symbols_enabled);
    assert!(!config.optimizations_enabled);
}

#[test]
fn non_yes_flag_values_read_as_disabled() {
    let provider = EnvironmentConfigProvider::Enabled(ScriptedEnvironment::new(&[
        ("DEBUGGING_SYMBOLS", "1"),
        ("KONAN_ENABLE_OPTIMIZATIONS", "no"),
    ]));
    let config = provider.snapshot().unwrap();

    assert!(!config.debug_symbols_enabled);
    assert!(!config.optimizations_enabled);
}

#[test]
fn relative_build_dir_fails_the_snapshot() {
    let provider = EnvironmentConfigProvider::Enabled(ScriptedEnvironment::new(&[(
        "CONFIGURATION_BUILD_DIR",
        "DerivedData/Products",
    )]));

    let err = provider.snapshot().unwrap_err();
    assert!(matches!(
        err,
        AppError::InvalidConfiguration { var, .. } if var == "CONFIGURATION_BUILD_DIR"
    ));
}

#[test]
fn repeated_reads_are_stable() {
    let provider = EnvironmentConfigProvider::Enabled(xcode_environment());

    assert_eq!(provider.snapshot().unwrap(), provider.snapshot().unwrap());
}

// =============================================================================
// Serialization
// =============================================================================

#[test]
fn snapshot_serializes_with_stable_field_names() {
    let provider = EnvironmentConfigProvider::Enabled(xcode_environment());
    let config = provider.snapshot().unwrap();

    let json = serde_json::to_value(&config).unwrap();
    assert_eq!(
        json["build_output_dir"],
        serde_json::json!("/tmp/Build/Products/Release")
    );
    assert_eq!(json["debug_symbols_enabled"], serde_json::json!(true));
    assert_eq!(json["optimizations_enabled"], serde_json::json!(true));
}
