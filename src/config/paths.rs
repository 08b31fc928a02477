//! Path management for the Skyclerk CLI
//!
//! Resolves where the config file lives.
//!
//! ## Path Resolution Order
//!
//! 1. `SKYCLERK_CONFIG_DIR` environment variable (if set)
//! 2. `~/.config/skyclerk` on every platform

use std::path::{Path, PathBuf};

use directories::BaseDirs;

use crate::error::SkyclerkError;

/// Environment variable that overrides the config directory
pub const CONFIG_DIR_ENV: &str = "SKYCLERK_CONFIG_DIR";

/// Name of the config file inside the config directory
pub const CONFIG_FILE: &str = "config.json";

/// Manages all paths used by the Skyclerk CLI
#[derive(Debug, Clone)]
pub struct ConfigPaths {
    base_dir: PathBuf,
}

impl ConfigPaths {
    /// Create a new ConfigPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, SkyclerkError> {
        let base_dir = if let Ok(custom) = std::env::var(CONFIG_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create ConfigPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/skyclerk/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the config file
    pub fn config_file(&self) -> PathBuf {
        self.base_dir.join(CONFIG_FILE)
    }

    /// Ensure the config directory exists, owner-only on Unix
    pub fn ensure_directories(&self) -> Result<(), SkyclerkError> {
        std::fs::create_dir_all(&self.base_dir).map_err(|e| {
            SkyclerkError::Config(format!("unable to create config directory: {}", e))
        })?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(&self.base_dir, std::fs::Permissions::from_mode(0o700))
                .map_err(|e| {
                    SkyclerkError::Config(format!("unable to create config directory: {}", e))
                })?;
        }

        Ok(())
    }

    /// Check if a config file has been written
    pub fn is_initialized(&self) -> bool {
        self.config_file().exists()
    }
}

fn resolve_default_path() -> Result<PathBuf, SkyclerkError> {
    let dirs = BaseDirs::new()
        .ok_or_else(|| SkyclerkError::Config("unable to find home directory".into()))?;
    Ok(config_dir_under(dirs.home_dir()))
}

// XDG_CONFIG_HOME and the platform config dir are not consulted.
fn config_dir_under(home: &Path) -> PathBuf {
    home.join(".config").join("skyclerk")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ConfigPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.config_file(), temp_dir.path().join("config.json"));
        assert!(!paths.is_initialized());
    }

    #[test]
    fn test_env_var_override() {
        let temp_dir = TempDir::new().unwrap();
        let custom_path = temp_dir.path().to_str().unwrap();

        env::set_var(CONFIG_DIR_ENV, custom_path);
        let paths = ConfigPaths::new().unwrap();
        env::remove_var(CONFIG_DIR_ENV);

        assert_eq!(paths.base_dir(), temp_dir.path());
    }

    #[test]
    fn test_default_dir_is_under_home() {
        assert_eq!(
            config_dir_under(Path::new("/home/ada")),
            PathBuf::from("/home/ada/.config/skyclerk")
        );
    }

    #[test]
    fn test_default_dir_ignores_xdg_config_home() {
        let temp_dir = TempDir::new().unwrap();
        let home = BaseDirs::new().unwrap().home_dir().to_path_buf();

        env::set_var("XDG_CONFIG_HOME", temp_dir.path());
        let resolved = resolve_default_path();
        env::remove_var("XDG_CONFIG_HOME");

        assert_eq!(resolved.unwrap(), home.join(".config").join("skyclerk"));
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ConfigPaths::with_base_dir(temp_dir.path().join("nested").join("skyclerk"));

        paths.ensure_directories().unwrap();

        assert!(paths.base_dir().exists());
    }
}
