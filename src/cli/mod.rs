//! CLI module - Command-line interface for the application.
//!
//! Provides commands for:
//! - `resolve` - Print the effective build settings
//! - `check` - Validate the environment

pub mod args;

pub use args::{Cli, Commands};
