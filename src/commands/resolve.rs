//! Resolve command - Prints the effective build settings.

use crate::cli::args::{OutputFormat, ResolveArgs};
use crate::config::{EnvironmentConfigProvider, EnvironmentReader};
use crate::errors::AppResult;

/// Execute the resolve command
pub fn execute<E: EnvironmentReader>(
    args: ResolveArgs,
    provider: &EnvironmentConfigProvider<E>,
) -> AppResult<()> {
    tracing::debug!("Resolving build settings");
    let config = provider.snapshot()?;

    match args.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        OutputFormat::Plain => {
            match &config.build_output_dir {
                Some(dir) => println!("build_output_dir = {}", dir.display()),
                None => println!("build_output_dir = (unset)"),
            }
            println!("debug_symbols_enabled = {}", config.debug_symbols_enabled);
            println!("optimizations_enabled = {}", config.optimizations_enabled);
        }
    }

    Ok(())
}
