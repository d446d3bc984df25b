//! Environment-backed build settings.
//!
//! Xcode exports the effective build settings into the environment of
//! every build phase. When the `konan.useEnvironmentVariables` project
//! property opts in, those settings drive the Kotlin/Native compilation;
//! otherwise they are ignored wholesale.

use std::path::PathBuf;

use serde::Serialize;

use super::constants::{
    ENV_CONFIGURATION_BUILD_DIR, ENV_DEBUGGING_SYMBOLS, ENV_KONAN_ENABLE_OPTIMIZATIONS,
    FLAG_ENABLED_VALUE,
};
use super::environment::{EnvironmentReader, SystemEnvironment};
use crate::errors::{AppError, AppResult};

/// Snapshot of the Xcode-supplied build settings.
///
/// Constructed once per build invocation and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnvironmentConfig {
    /// Destination directory for build products (absolute), if exported
    pub build_output_dir: Option<PathBuf>,
    /// Whether debug symbols are requested
    pub debug_symbols_enabled: bool,
    /// Whether compiler optimizations are requested
    pub optimizations_enabled: bool,
}

/// Accessor for the Xcode build environment.
///
/// The `Disabled` variant never consults the environment: every accessor
/// returns the unset/false baseline regardless of what the process
/// environment holds. The `Enabled` variant reads the variables at access
/// time, so a value is never stale within a build invocation.
#[derive(Debug)]
pub enum EnvironmentConfigProvider<E = SystemEnvironment> {
    Disabled,
    Enabled(E),
}

impl EnvironmentConfigProvider<SystemEnvironment> {
    /// Select the variant from the externally supplied opt-in flag.
    pub fn from_opt_in(use_environment_variables: bool) -> Self {
        if use_environment_variables {
            Self::Enabled(SystemEnvironment)
        } else {
            Self::Disabled
        }
    }
}

impl<E: EnvironmentReader> EnvironmentConfigProvider<E> {
    /// Destination directory for build products.
    ///
    /// Fails when `CONFIGURATION_BUILD_DIR` is set but not an absolute
    /// path; the caller is expected to abort the build.
    pub fn build_output_dir(&self) -> AppResult<Option<PathBuf>> {
        let env = match self {
            Self::Disabled => return Ok(None),
            Self::Enabled(env) => env,
        };
        match env.var(ENV_CONFIGURATION_BUILD_DIR) {
            None => Ok(None),
            Some(raw) => {
                let path = PathBuf::from(&raw);
                if path.is_absolute() {
                    Ok(Some(path))
                } else {
                    Err(AppError::invalid_configuration(
                        ENV_CONFIGURATION_BUILD_DIR,
                        raw,
                    ))
                }
            }
        }
    }

    /// Whether the current configuration generates debug symbols.
    pub fn debug_symbols_enabled(&self) -> bool {
        self.flag_enabled(ENV_DEBUGGING_SYMBOLS)
    }

    /// Whether compiler optimizations are requested.
    pub fn optimizations_enabled(&self) -> bool {
        self.flag_enabled(ENV_KONAN_ENABLE_OPTIMIZATIONS)
    }

    /// Materialize all three settings into a read-only snapshot.
    pub fn snapshot(&self) -> AppResult<EnvironmentConfig> {
        Ok(EnvironmentConfig {
            build_output_dir: self.build_output_dir()?,
            debug_symbols_enabled: self.debug_symbols_enabled(),
            optimizations_enabled: self.optimizations_enabled(),
        })
    }

    // Xcode spells enabled booleans as "YES" in any case; everything
    // else, including unset, reads as disabled.
    fn flag_enabled(&self, name: &str) -> bool {
        match self {
            Self::Disabled => false,
            Self::Enabled(env) => env
                .var(name)
                .is_some_and(|v| v.eq_ignore_ascii_case(FLAG_ENABLED_VALUE)),
        }
    }
}
