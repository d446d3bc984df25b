//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing.

use clap::{Parser, Subcommand, ValueEnum};

/// konan-env - Xcode build environment bridge for Kotlin/Native builds
#[derive(Parser, Debug)]
#[command(name = "konan-env")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Honor the Xcode-provided environment. Mirrors the
    /// `konan.useEnvironmentVariables` project property; the invoking
    /// build script passes the property value through.
    #[arg(long, global = true, env = "KONAN_USE_ENVIRONMENT_VARIABLES")]
    pub use_environment_variables: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the effective build settings
    Resolve(ResolveArgs),

    /// Validate the environment, exiting non-zero when it is unusable
    Check,
}

/// Arguments for the resolve command
#[derive(Parser, Debug)]
pub struct ResolveArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Plain)]
    pub format: OutputFormat,
}

/// Supported output formats
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum OutputFormat {
    /// One `key = value` line per setting
    Plain,
    /// Pretty-printed JSON for consumption by other tooling
    Json,
}
