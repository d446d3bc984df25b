//! Build-settings configuration module
//!
//! Handles the Xcode-provided environment variables and the constants
//! naming them.

mod constants;
mod environment;
mod provider;

pub use constants::*;
pub use environment::{EnvironmentReader, SystemEnvironment};
pub use provider::{EnvironmentConfig, EnvironmentConfigProvider};
