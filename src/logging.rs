//! Logging setup for hosts that do not install their own subscriber.

use tracing::Level;

use crate::error::{InputError, Result};

/// Install a `tracing-subscriber` fmt subscriber.
///
/// Filters come from `RUST_LOG`, with `default_level` added as a directive.
///
/// # Errors
///
/// Returns [`InputError::Logging`] if a global subscriber is already set.
///
/// # Examples
///
/// ```no_run
/// use tracing::Level;
///
/// input_signals::logging::init(Level::INFO)?;
/// # Ok::<(), input_signals::error::InputError>(())
/// ```
pub fn init(default_level: Level) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .try_init()
        .map_err(|e| InputError::Logging(e.to_string()))
}
