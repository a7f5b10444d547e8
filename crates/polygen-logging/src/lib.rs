//! polygen-logging - Tracing subscriber setup
//!
//! This crate provides:
//! - [`LogLevel`] parsed from configuration and the command line
//! - [`init_logging`] installing a stderr subscriber with a reloadable level
//! - [`ReloadHandle`] for changing the level after initialization

mod init;
mod level;
mod reload;

use thiserror::Error;

pub use init::{LOG_ENV, init_logging};
pub use level::{LogLevel, ParseLevelError};
pub use reload::ReloadHandle;

/// Error type for logging setup
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoggingError {
    /// A global subscriber is already installed
    #[error("a global tracing subscriber is already installed")]
    AlreadyInitialized,

    /// The level was reloaded before [`init_logging`] ran
    #[error("reload handle not initialized")]
    NotInitialized,

    /// The subscriber dropped the reloadable layer
    #[error("failed to reload filter: {0}")]
    Reload(String),
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{LogLevel, ReloadHandle, init_logging};
}
