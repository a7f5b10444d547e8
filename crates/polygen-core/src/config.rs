//! Generator configuration

use crate::profile::ProfileId;
use serde::{Deserialize, Serialize};

/// Options of a generation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Package or namespace of the emitted sources
    #[serde(default = "default_package")]
    pub package: String,

    /// Name of the single field of transparent wrappers
    #[serde(default = "default_wrapper_field")]
    pub wrapper_field: String,

    /// Caller-supplied grouping label below `<profile>/output/`
    #[serde(default = "default_category")]
    pub category: String,

    /// Root directory artifacts are written beneath
    #[serde(default = "default_output_root")]
    pub output_root: String,

    /// Profiles to generate for; empty means every registered profile
    #[serde(default)]
    pub profiles: Vec<ProfileId>,

    /// Log level name (`trace`..`error`, `off`)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_package() -> String {
    "com.example".to_string()
}

fn default_wrapper_field() -> String {
    "value".to_string()
}

fn default_category() -> String {
    "default".to_string()
}

fn default_output_root() -> String {
    "generated".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            package: default_package(),
            wrapper_field: default_wrapper_field(),
            category: default_category(),
            output_root: default_output_root(),
            profiles: Vec::new(),
            log_level: default_log_level(),
        }
    }
}

impl GeneratorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create configuration from JSON bytes; empty input yields the defaults
    pub fn from_json(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        if bytes.is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_slice(bytes)
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_package(mut self, package: impl Into<String>) -> Self {
        self.package = package.into();
        self
    }

    pub fn with_profiles<I, P>(mut self, profiles: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<ProfileId>,
    {
        self.profiles = profiles.into_iter().map(Into::into).collect();
        self
    }
}
