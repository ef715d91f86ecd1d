//! Configuration for staff records
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

/// Main configuration for a staff shell instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Logging Configuration
    // -------------------------------------------------------------------------
    /// File the binary writes its log events to
    pub log_file: PathBuf,

    /// Filter used when `RUST_LOG` is not set
    pub log_filter: String,

    // -------------------------------------------------------------------------
    // Shell Configuration
    // -------------------------------------------------------------------------
    /// Prompt printed before each command
    pub prompt: String,

    /// Year used for validation and tenure instead of the system clock
    pub reference_year: Option<i32>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_file: PathBuf::from("workers.log"),
            log_filter: "info,staff_records=debug".to_string(),
            prompt: ">>> ".to_string(),
            reference_year: None,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// The reference year, falling back to the local calendar year
    pub fn current_year(&self) -> i32 {
        self.reference_year.unwrap_or_else(crate::staff::current_year)
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the log file path
    pub fn log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.log_file = path.into();
        self
    }

    /// Set the default log filter directive
    pub fn log_filter(mut self, filter: impl Into<String>) -> Self {
        self.config.log_filter = filter.into();
        self
    }

    /// Set the shell prompt
    pub fn prompt(mut self, prompt: impl Into<String>) -> Self {
        self.config.prompt = prompt.into();
        self
    }

    /// Pin the reference year
    pub fn reference_year(mut self, year: i32) -> Self {
        self.config.reference_year = Some(year);
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
