//! # Logging
//!
//! Installs the global `tracing` subscriber. Diagnostics go to stderr so
//! stdout carries nothing but canonical names.

use config::constants::DEFAULT_LOG_FILTER;
use tracing_subscriber::filter::{EnvFilter, ParseError};
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Filter from `RUST_LOG`, falling back to [`DEFAULT_LOG_FILTER`].
pub fn env_filter() -> Result<EnvFilter, ParseError> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(DEFAULT_LOG_FILTER),
    }
}

/// Install the stderr subscriber.
///
/// ## Errors
///
/// Fails when a global subscriber is already installed.
pub fn init() -> anyhow::Result<()> {
    let filter = env_filter()?;
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_parses() {
        assert!(EnvFilter::try_new(DEFAULT_LOG_FILTER).is_ok());
    }

    #[test]
    fn test_second_init_fails() {
        let _ = init();
        assert!(init().is_err());
    }
}
