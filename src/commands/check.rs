//! Check command - Validates the build environment.

use crate::config::{EnvironmentConfigProvider, EnvironmentReader};
use crate::errors::AppResult;

/// Execute the check command
///
/// A failed snapshot propagates to main, which logs the error and exits
/// with status 1.
pub fn execute<E: EnvironmentReader>(provider: &EnvironmentConfigProvider<E>) -> AppResult<()> {
    let config = provider.snapshot()?;

    tracing::info!(
        build_output_dir = ?config.build_output_dir,
        debug_symbols_enabled = config.debug_symbols_enabled,
        optimizations_enabled = config.optimizations_enabled,
        "Environment validated"
    );
    println!("Environment configuration OK");

    Ok(())
}
