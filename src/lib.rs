//! konan-env - Xcode build environment bridge for Kotlin/Native builds
//!
//! Exposes the build settings Xcode hands to a build phase (output
//! directory, debug symbols, optimizations) as typed configuration
//! values, gated by the `konan.useEnvironmentVariables` opt-in flag.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Environment reader seam, provider, and constants
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Print the effective build settings
//! cargo run -- --use-environment-variables resolve
//!
//! # Validate the environment
//! cargo run -- --use-environment-variables check
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod errors;

// Re-export commonly used types at crate root
pub use config::{
    EnvironmentConfig, EnvironmentConfigProvider, EnvironmentReader, SystemEnvironment,
};
pub use errors::{AppError, AppResult};
