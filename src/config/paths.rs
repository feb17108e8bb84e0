//! Path management for the cashflow CLI
//!
//! ## Path Resolution Order
//!
//! 1. `CASHFLOW_DATA_DIR` environment variable (if set)
//! 2. The platform config directory from `directories`
//!    (`~/.config/cashflow` on Linux, `%APPDATA%\cashflow\config` on Windows)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::CashflowError;

/// Manages all paths used by the cashflow CLI
#[derive(Debug, Clone)]
pub struct CashflowPaths {
    base_dir: PathBuf,
}

impl CashflowPaths {
    /// Resolve the base directory
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, CashflowError> {
        let base_dir = if let Ok(custom) = std::env::var("CASHFLOW_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            ProjectDirs::from("", "", "cashflow")
                .map(|dirs| dirs.config_dir().to_path_buf())
                .ok_or_else(|| {
                    CashflowError::Config("Could not determine a config directory".into())
                })?
        };

        Ok(Self { base_dir })
    }

    /// Create paths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Profile used when a command is not given one explicitly
    pub fn default_profile(&self) -> PathBuf {
        self.base_dir.join("profile.json")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), CashflowError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| CashflowError::Io(format!("Failed to create base directory: {}", e)))?;
        Ok(())
    }
}
