//! Configuration management for the task runner
//!
//! Centralizes configuration options and provides validation.

use crate::{cli::Args, error::TaskError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Enable debug logging
    pub debug: bool,
    /// Project root all tasks run against
    pub root: PathBuf,
    /// Cleanup configuration
    pub clean: CleanConfig,
}

/// Cleanup configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CleanConfig {
    /// Glob patterns resolved directly under the project root
    pub patterns: Vec<String>,
    /// Coverage database file at the project root
    pub coverage_file: String,
    /// Directory name removed recursively anywhere in the tree
    pub cache_dir_name: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            debug: false,
            root: PathBuf::from("."),
            clean: CleanConfig::default(),
        }
    }
}

impl Default for CleanConfig {
    fn default() -> Self {
        Self {
            patterns: vec![
                "build".to_string(),
                "dist".to_string(),
                "*.egg-info".to_string(),
                ".pytest_cache".to_string(),
                ".ruff_cache".to_string(),
                ".mypy_cache".to_string(),
                "htmlcov".to_string(),
            ],
            coverage_file: ".coverage".to_string(),
            cache_dir_name: "__pycache__".to_string(),
        }
    }
}

impl Config {
    /// Create configuration from command line arguments
    pub fn from_args(args: &Args) -> Result<Self, TaskError> {
        let config = Self {
            debug: args.debug,
            root: args.root.clone(),
            ..Self::default()
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), TaskError> {
        if !self.root.is_dir() {
            return Err(TaskError::config(format!(
                "Project root not found: {}",
                self.root.display()
            )));
        }

        Ok(())
    }
}
