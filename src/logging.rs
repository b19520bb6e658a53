//! Diagnostic logging to stderr.
//!
//! Filter precedence: `TAB_RECAP_LOG`, then `TAB_RECAP_DEBUG=1`, then
//! `RUST_LOG`, then [`DEFAULT_FILTER`].

use tracing_subscriber::EnvFilter;

use crate::config::EnvConfig;

pub const DEFAULT_FILTER: &str = "warn";

/// Directive that overrides `RUST_LOG`, if the config asks for one.
#[must_use]
pub fn override_directive(config: &EnvConfig) -> Option<String> {
    if let Some(filter) = &config.log_filter {
        return Some(filter.clone());
    }
    config.debug.then(|| "debug".to_string())
}

#[must_use]
pub fn env_filter(config: &EnvConfig) -> EnvFilter {
    let fallback = || EnvFilter::new(DEFAULT_FILTER);
    match override_directive(config) {
        Some(directive) => EnvFilter::try_new(directive).unwrap_or_else(|_| fallback()),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| fallback()),
    }
}

/// Installs the global subscriber. A second call is a no-op.
pub fn init(config: &EnvConfig) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init();
}
