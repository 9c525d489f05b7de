use crate::error::{Error, Result};
use std::path::PathBuf;

/// Configuration for loading a legislation dataset
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the delimited input file
    pub data_path: PathBuf,
    /// Maximum number of records to load
    pub limit: Option<usize>,
}

impl Config {
    /// Create a new default configuration
    pub fn new(data_path: impl Into<PathBuf>) -> Self {
        Self {
            data_path: data_path.into(),
            limit: None,
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if !self.data_path.exists() {
            return Err(Error::Config(format!(
                "Data file does not exist: {}",
                self.data_path.display()
            )));
        }

        if !self.data_path.is_file() {
            return Err(Error::Config(format!(
                "Data path is not a file: {}",
                self.data_path.display()
            )));
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new("data.csv")
    }
}

/// Builder for creating configurations
#[derive(Debug, Clone)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Create a new builder with default settings
    pub fn new(data_path: impl Into<PathBuf>) -> Self {
        Self {
            config: Config::new(data_path),
        }
    }

    /// Set the data file path
    pub fn data_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.data_path = path.into();
        self
    }

    /// Set the record limit
    pub fn limit(mut self, limit: usize) -> Self {
        self.config.limit = Some(limit);
        self
    }

    /// Clear the record limit
    pub fn no_limit(mut self) -> Self {
        self.config.limit = None;
        self
    }

    /// Build the final configuration
    pub fn build(self) -> Result<Config> {
        self.config.validate()?;
        Ok(self.config)
    }
}
