//! Global subscriber installation

use crate::LoggingError;
use crate::level::LogLevel;
use crate::reload::ReloadHandle;
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, reload};

/// Optional directive-based filter, e.g. `POLYGEN_LOG=polygen_core=debug`.
pub const LOG_ENV: &str = "POLYGEN_LOG";

/// Install the global subscriber.
///
/// Events go to stderr. The base level can be changed later through
/// [`ReloadHandle::global`]; directives in [`LOG_ENV`] narrow it further.
pub fn init_logging(level: LogLevel) -> Result<(), LoggingError> {
    let (level_filter, handle) = reload::Layer::new(level.to_filter());
    let env_filter = EnvFilter::try_from_env(LOG_ENV).ok();

    let subscriber = tracing_subscriber::registry()
        .with(level_filter)
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        );

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|_| LoggingError::AlreadyInitialized)?;

    ReloadHandle::global().set_handle(handle, level);
    tracing::debug!(%level, "logging initialized");
    Ok(())
}

#[cfg(test)]
#[path = "init/init_tests.rs"]
mod init_tests;
