//! Path management for Planshare
//!
//! Provides XDG-compliant path resolution for configuration, data, and the audit log.
//!
//! ## Path Resolution Order
//!
//! 1. `PLANSHARE_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/planshare` or `~/.config/planshare`
//! 3. Windows: `%APPDATA%\planshare`

use std::path::PathBuf;

use crate::error::PlanshareError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "PLANSHARE_DATA_DIR";

/// Manages all paths used by Planshare
#[derive(Debug, Clone)]
pub struct PlansharePaths {
    base_dir: PathBuf,
}

impl PlansharePaths {
    /// Create a new PlansharePaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if neither the override nor a home directory can be determined.
    pub fn new() -> Result<Self, PlanshareError> {
        let base_dir = if let Ok(custom) = std::env::var(DATA_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create PlansharePaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/planshare/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (~/.config/planshare/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Get the path to members.json
    pub fn members_file(&self) -> PathBuf {
        self.data_dir().join("members.json")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), PlanshareError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| PlanshareError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| PlanshareError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }
}

#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, PlanshareError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) => PathBuf::from(xdg),
        Err(_) => {
            let home = std::env::var("HOME").map_err(|_| {
                PlanshareError::Config("Could not determine HOME directory".into())
            })?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("planshare"))
}

#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, PlanshareError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| PlanshareError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("planshare"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PlansharePaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.data_dir(), temp_dir.path().join("data"));
        assert_eq!(paths.audit_log(), temp_dir.path().join("audit.log"));
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PlansharePaths::with_base_dir(temp_dir.path().join("nested"));

        paths.ensure_directories().unwrap();

        assert!(paths.base_dir().exists());
        assert!(paths.data_dir().exists());
    }

    #[test]
    fn test_file_paths() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PlansharePaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(
            paths.members_file(),
            temp_dir.path().join("data").join("members.json")
        );
    }
}
