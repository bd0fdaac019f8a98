//! Configuration for Innkeep
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

/// Main configuration for a Hotel instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Persistence Configuration
    // -------------------------------------------------------------------------
    /// CSV file used by save, load and the exit autosave
    pub data_file: PathBuf,

    /// Save to `data_file` when the hotel is closed
    pub autosave_on_exit: bool,

    /// Load `data_file` when the hotel is opened (missing file is not an error)
    pub load_on_start: bool,

    // -------------------------------------------------------------------------
    // Console Configuration
    // -------------------------------------------------------------------------
    /// Print the execution time of each menu command
    pub report_timing: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from("hotel_data.csv"),
            autosave_on_exit: true,
            load_on_start: false,
            report_timing: true,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the CSV data file
    pub fn data_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.data_file = path.into();
        self
    }

    /// Enable or disable the save performed on close
    pub fn autosave_on_exit(mut self, enabled: bool) -> Self {
        self.config.autosave_on_exit = enabled;
        self
    }

    /// Enable or disable loading the data file on open
    pub fn load_on_start(mut self, enabled: bool) -> Self {
        self.config.load_on_start = enabled;
        self
    }

    /// Enable or disable per-command timing output
    pub fn report_timing(mut self, enabled: bool) -> Self {
        self.config.report_timing = enabled;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
