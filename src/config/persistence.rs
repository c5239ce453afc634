//! Config persistence and path resolution for `Config`.
//!
//! Covers:
//! - `load` / `load_from_path` (YAML file I/O with per-field default fallback)
//! - `save` / `save_to_path` (atomic write via temp file + rename)
//! - XDG-compliant path helpers (`config_path`, `config_dir`)
//! - Symlink-containment check for the resolved config path

use super::config_struct::Config;
use crate::error::ConfigError;
use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};

impl Config {
    /// Load configuration from the default location or create it.
    ///
    /// If the config file does not exist yet, the default configuration is
    /// written there and returned. Settings missing from the file fall back
    /// to their defaults individually, so a file containing only overrides
    /// is valid.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();
        log::info!("Config path: {:?}", config_path);

        if config_path.exists() {
            // Validate that the config file has not been redirected (e.g. via
            // a symlink) to a location outside the expected config directory.
            let config_dir = Self::config_dir();
            if let Err(e) = Self::validate_config_path(&config_path, &config_dir) {
                log::error!("Config path validation failed: {e}");
                return Err(e.into());
            }

            log::info!("Loading existing config from {:?}", config_path);
            Self::warn_insecure_permissions(&config_path);
            Self::load_from_path(&config_path)
        } else {
            log::info!(
                "Config file not found, creating default at {:?}",
                config_path
            );
            let config = Self::default();
            if let Err(e) = config.save() {
                log::error!("Failed to save default config: {e}");
                return Err(e);
            }
            log::info!("Default config created successfully");
            Ok(config)
        }
    }

    /// Load configuration from an explicit path.
    ///
    /// Used by tests and `--config`-style overrides; performs no location
    /// validation beyond reading and parsing the file.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
        let config: Config = serde_yaml_ng::from_str(&contents).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to the default location.
    pub fn save(&self) -> Result<()> {
        self.save_to_path(&Self::config_path())
    }

    /// Save configuration to an explicit path.
    ///
    /// Writes to a temp file in the same directory and renames it into
    /// place, so a crash mid-write never leaves a truncated config.
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let yaml = serde_yaml_ng::to_string(self).map_err(ConfigError::Parse)?;

        let temp_path = path.with_extension("yaml.tmp");
        fs::write(&temp_path, &yaml)?;
        fs::rename(&temp_path, path)?;

        Ok(())
    }

    /// Get the configuration file path (using XDG convention)
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.yaml")
    }

    /// Get the configuration directory path (using XDG convention)
    pub fn config_dir() -> PathBuf {
        #[cfg(target_os = "windows")]
        {
            if let Some(config_dir) = dirs::config_dir() {
                config_dir.join("veloterm")
            } else {
                PathBuf::from(".")
            }
        }
        #[cfg(not(target_os = "windows"))]
        {
            // XDG convention on all platforms: ~/.config/veloterm
            if let Some(home_dir) = dirs::home_dir() {
                home_dir.join(".config").join("veloterm")
            } else {
                PathBuf::from(".")
            }
        }
    }

    /// Validate that `path` (which must already exist on disk) resolves —
    /// via `canonicalize` — to a location inside `expected_base`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::PathTraversal` when the canonical path does not
    /// start with the canonical `expected_base`, and `ConfigError::Io` if
    /// the path cannot be canonicalized.
    pub fn validate_config_path(path: &Path, expected_base: &Path) -> Result<PathBuf, ConfigError> {
        let canonical = fs::canonicalize(path).map_err(|e| {
            std::io::Error::new(
                e.kind(),
                format!("cannot canonicalize {}: {e}", path.display()),
            )
        })?;

        let canonical_base = fs::canonicalize(expected_base).unwrap_or_else(|_| {
            // If the base doesn't exist yet (first run), use the un-resolved path.
            expected_base.to_path_buf()
        });

        if !canonical.starts_with(&canonical_base) {
            return Err(ConfigError::PathTraversal(format!(
                "path '{}' resolves to '{}' which is outside the expected directory '{}'",
                path.display(),
                canonical.display(),
                canonical_base.display(),
            )));
        }

        Ok(canonical)
    }

    /// Warn if the config file is readable by group or others.
    ///
    /// The config may carry sensitive values (environment variable overlays,
    /// shell invocations) that should not be exposed on a shared system.
    #[cfg(unix)]
    fn warn_insecure_permissions(path: &Path) {
        use std::os::unix::fs::PermissionsExt;
        if let Ok(metadata) = fs::metadata(path) {
            let mode = metadata.permissions().mode();
            // Check group-readable (0o040) or world-readable (0o004) bits.
            if mode & 0o044 != 0 {
                log::warn!(
                    "Config file {:?} has insecure permissions (mode {:04o}). \
                     It is readable by group or others. Run: chmod 600 {:?}",
                    path,
                    mode & 0o777,
                    path,
                );
            }
        }
    }

    #[cfg(not(unix))]
    fn warn_insecure_permissions(_path: &Path) {}
}
