//! Dynamic log level reloading support

use crate::LoggingError;
use crate::level::LogLevel;
use once_cell::sync::OnceCell;
use parking_lot::Mutex;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::reload;

type FilterHandle = reload::Handle<LevelFilter, tracing_subscriber::Registry>;

/// Handle for dynamically reloading the log level filter
pub struct ReloadHandle {
    handle: Mutex<Option<FilterHandle>>,
    level: Mutex<LogLevel>,
}

impl ReloadHandle {
    /// Create a new reload handle
    pub fn new() -> Self {
        Self {
            handle: Mutex::new(None),
            level: Mutex::new(LogLevel::default()),
        }
    }

    /// Get the global reload handle
    pub fn global() -> &'static ReloadHandle {
        static INSTANCE: OnceCell<ReloadHandle> = OnceCell::new();
        INSTANCE.get_or_init(ReloadHandle::new)
    }

    /// Set the reload handle (called during initialization)
    pub fn set_handle(&self, handle: FilterHandle, level: LogLevel) {
        *self.handle.lock() = Some(handle);
        *self.level.lock() = level;
    }

    pub fn is_initialized(&self) -> bool {
        self.handle.lock().is_some()
    }

    /// The level most recently installed
    pub fn current_level(&self) -> LogLevel {
        *self.level.lock()
    }

    /// Reload the filter to use a new log level
    pub fn reload_level(&self, level: LogLevel) -> Result<(), LoggingError> {
        let guard = self.handle.lock();
        let handle = guard.as_ref().ok_or(LoggingError::NotInitialized)?;
        handle
            .reload(level.to_filter())
            .map_err(|e| LoggingError::Reload(e.to_string()))?;
        *self.level.lock() = level;
        Ok(())
    }
}

impl Default for ReloadHandle {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "reload/reload_tests.rs"]
mod reload_tests;
