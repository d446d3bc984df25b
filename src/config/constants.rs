//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Xcode build environment
// =============================================================================

/// Destination directory for build products, as exported by Xcode
pub const ENV_CONFIGURATION_BUILD_DIR: &str = "CONFIGURATION_BUILD_DIR";

/// Whether the current Xcode configuration generates debug symbols
pub const ENV_DEBUGGING_SYMBOLS: &str = "DEBUGGING_SYMBOLS";

/// Whether compiler optimizations are requested for the Kotlin/Native build
pub const ENV_KONAN_ENABLE_OPTIMIZATIONS: &str = "KONAN_ENABLE_OPTIMIZATIONS";

/// The single value Xcode uses for an enabled boolean setting
pub const FLAG_ENABLED_VALUE: &str = "YES";

// =============================================================================
// Project properties
// =============================================================================

/// Name of the external project property supplying the opt-in flag
pub const PROP_USE_ENVIRONMENT_VARIABLES: &str = "konan.useEnvironmentVariables";
