//! Persisted CLI configuration
//!
//! Holds the access token, the authenticated user, the default account and the
//! API location. Written by `login` / `config init` / `accounts use`, removed
//! by `logout`.

use std::fs::{self, File};
use std::io::{BufWriter, Write};

use serde::{Deserialize, Serialize};

use super::paths::ConfigPaths;
use crate::error::SkyclerkError;

/// Production API used when the config does not name one
pub const DEFAULT_API_URL: &str = "https://app.skyclerk.com";

/// CLI configuration including auth credentials and defaults
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub access_token: String,

    #[serde(default)]
    pub user_id: u64,

    #[serde(default)]
    pub default_account_id: u64,

    #[serde(default)]
    pub api_url: String,

    #[serde(default)]
    pub client_id: String,
}

impl Config {
    /// The configured API URL, or the production URL when unset
    pub fn api_url_or_default(&self) -> &str {
        if self.api_url.is_empty() {
            DEFAULT_API_URL
        } else {
            &self.api_url
        }
    }

    /// Load the config from disk
    ///
    /// A missing file means the user never logged in.
    pub fn load(paths: &ConfigPaths) -> Result<Self, SkyclerkError> {
        let path = paths.config_file();

        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(SkyclerkError::NotLoggedIn)
            }
            Err(e) => {
                return Err(SkyclerkError::Config(format!(
                    "unable to read config file: {}",
                    e
                )))
            }
        };

        let config: Config = serde_json::from_str(&contents)
            .map_err(|e| SkyclerkError::Config(format!("unable to parse config file: {}", e)))?;

        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Save the config to disk
    ///
    /// Writes a temp file next to the target and renames it into place so a
    /// failed write never leaves a truncated config behind.
    pub fn save(&self, paths: &ConfigPaths) -> Result<(), SkyclerkError> {
        paths.ensure_directories()?;

        let path = paths.config_file();
        let temp_path = path.with_extension("json.tmp");

        let file = File::create(&temp_path)
            .map_err(|e| SkyclerkError::Config(format!("unable to write config file: {}", e)))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            file.set_permissions(fs::Permissions::from_mode(0o600))
                .map_err(|e| SkyclerkError::Config(format!("unable to write config file: {}", e)))?;
        }

        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, self)
            .map_err(|e| SkyclerkError::Config(format!("unable to marshal config: {}", e)))?;
        writer
            .flush()
            .map_err(|e| SkyclerkError::Config(format!("unable to write config file: {}", e)))?;

        fs::rename(&temp_path, &path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            SkyclerkError::Config(format!("unable to write config file: {}", e))
        })?;

        tracing::debug!(path = %path.display(), "saved config");
        Ok(())
    }

    /// Remove the config file; a file that is already gone is not an error
    pub fn delete(paths: &ConfigPaths) -> Result<(), SkyclerkError> {
        match fs::remove_file(paths.config_file()) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(SkyclerkError::Config(format!(
                "unable to delete config file: {}",
                e
            ))),
        }
    }
}

/// Mask a secret, keeping only the first and last four characters
///
/// Anything of eight characters or fewer is fully hidden.
pub fn mask_string(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    if chars.len() <= 8 {
        return "****".to_string();
    }

    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}****{}", head, tail)
}
