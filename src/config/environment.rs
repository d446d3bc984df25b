//! Process-environment access seam.

/// Read access to named environment variables.
///
/// Lets the provider be unit tested without mutating process-global
/// environment state.
#[cfg_attr(test, mockall::automock)]
pub trait EnvironmentReader: Send + Sync {
    /// Value of `name`, or `None` when unset.
    fn var(&self, name: &str) -> Option<String>;
}

/// Reader backed by the real process environment.
#[derive(Debug, Clone, Default)]
pub struct SystemEnvironment;

impl EnvironmentReader for SystemEnvironment {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}
