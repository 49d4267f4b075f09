//! Path management for the wedding planner
//!
//! ## Path Resolution Order
//!
//! 1. `WEDDING_PLANNER_DATA_DIR` environment variable (if set)
//! 2. The platform config directory from `directories`
//!    (e.g. `~/.config/wedding-planner` on Linux)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::PlannerError;

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "WEDDING_PLANNER_DATA_DIR";

/// Manages all paths used by the planner
#[derive(Debug, Clone)]
pub struct PlannerPaths {
    base_dir: PathBuf,
}

impl PlannerPaths {
    /// Resolve paths from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, PlannerError> {
        let base_dir = if let Ok(custom) = std::env::var(DATA_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            ProjectDirs::from("", "", "wedding-planner")
                .map(|dirs| dirs.config_dir().to_path_buf())
                .ok_or_else(|| {
                    PlannerError::Config("Could not determine a home directory".into())
                })?
        };

        Ok(Self { base_dir })
    }

    /// Create paths rooted at a custom directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Directory holding one JSON file per document collection
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), PlannerError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| PlannerError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| PlannerError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }

    /// Check if the planner has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}
