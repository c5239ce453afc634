//! Derived-value helpers: shell resolution, working directory, validation.

use super::config_struct::Config;
use crate::error::ConfigError;
use crate::palette::ColorPalette;
use crate::types::{detect_shell_path, is_valid_color, ShellType};
use std::path::PathBuf;

impl Config {
    /// Resolve the shell executable to launch.
    ///
    /// An empty `shell` setting means auto-detect: `$SHELL`, then the
    /// `/etc/passwd` entry (unix), then the platform fallback. A non-empty
    /// setting is returned as configured.
    pub fn resolve_shell(&self) -> String {
        if !self.shell.is_empty() {
            return self.shell.clone();
        }

        if let Some(detected) = detect_shell_path() {
            return detected;
        }

        if cfg!(windows) {
            "cmd.exe".to_string()
        } else {
            "/bin/sh".to_string()
        }
    }

    /// The resolved shell executable plus configured arguments.
    pub fn shell_command(&self) -> (String, Vec<String>) {
        (self.resolve_shell(), self.shell_args.clone())
    }

    /// Classify the resolved shell for shell-integration purposes.
    pub fn shell_type(&self) -> ShellType {
        ShellType::from_path(&self.resolve_shell())
    }

    /// Get the effective startup working directory.
    ///
    /// An empty `workingDirectory` means the user's home directory. `~/` is
    /// expanded. A configured directory that does not exist logs a warning
    /// and falls back to home.
    pub fn effective_working_directory(&self) -> Option<PathBuf> {
        if !self.working_directory.is_empty() {
            let expanded = expand_home_dir(&self.working_directory);
            if expanded.exists() {
                return Some(expanded);
            }
            log::warn!(
                "Configured workingDirectory '{}' does not exist, using home",
                self.working_directory
            );
        }
        dirs::home_dir()
    }

    /// Validate field values that serde's type checks cannot cover.
    ///
    /// Checks that every color-valued setting and every palette slot is a
    /// recognized color string. The first failure is reported with the
    /// offending wire field name.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let color_fields = [
            ("cursorColor", self.cursor_color.as_str()),
            ("cursorAccentColor", self.cursor_accent_color.as_str()),
            ("foregroundColor", self.foreground_color.as_str()),
            ("backgroundColor", self.background_color.as_str()),
            ("selectionColor", self.selection_color.as_str()),
            ("borderColor", self.border_color.as_str()),
        ];
        for (name, value) in color_fields {
            if !is_valid_color(value) {
                return Err(ConfigError::Validation(format!(
                    "{name}: '{value}' is not a valid hex or rgba color"
                )));
            }
        }

        for (slot, value) in self.colors.iter() {
            if !is_valid_color(value) {
                return Err(ConfigError::Validation(format!(
                    "colors.{slot}: '{value}' is not a valid hex or rgba color"
                )));
            }
        }

        // Written as a negated comparison so NaN fails the check too.
        if !(self.font_size.is_finite() && self.font_size > 0.0) {
            return Err(ConfigError::Validation(format!(
                "fontSize: {} must be a positive finite number",
                self.font_size
            )));
        }

        if !(self.line_height.is_finite() && self.line_height > 0.0) {
            return Err(ConfigError::Validation(format!(
                "lineHeight: {} must be a positive finite number",
                self.line_height
            )));
        }

        Ok(())
    }
}

// ColorPalette validation lives with Config because the invariant (all 16
// standard slots parseable) is what terminal rendering depends on.
impl ColorPalette {
    /// Whether every standard and extension slot parses as a color.
    pub fn is_valid(&self) -> bool {
        self.iter().all(|(_, value)| is_valid_color(value))
    }
}

/// Expand `~/` to the user's home directory in a path string.
fn expand_home_dir(path: &str) -> PathBuf {
    if let Some(suffix) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(suffix);
        }
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configured_shell_passes_through() {
        let config = Config {
            shell: "/usr/local/bin/fish".to_string(),
            ..Config::default()
        };
        assert_eq!(config.resolve_shell(), "/usr/local/bin/fish");
        assert_eq!(config.shell_type(), ShellType::Fish);
    }

    #[test]
    fn test_empty_shell_auto_detects_something() {
        let config = Config::default();
        // Whatever the environment, auto-detection never returns empty.
        assert!(!config.resolve_shell().is_empty());
    }

    #[test]
    fn test_shell_command_includes_args() {
        let config = Config::default();
        let (_, args) = config.shell_command();
        assert_eq!(args, vec!["--login".to_string()]);
    }

    #[test]
    fn test_empty_working_directory_means_home() {
        let config = Config::default();
        assert_eq!(config.effective_working_directory(), dirs::home_dir());
    }

    #[test]
    fn test_missing_working_directory_falls_back_to_home() {
        let config = Config {
            working_directory: "/definitely/not/a/real/path".to_string(),
            ..Config::default()
        };
        assert_eq!(config.effective_working_directory(), dirs::home_dir());
    }

    #[test]
    fn test_tilde_expansion() {
        let config = Config {
            working_directory: "~/".to_string(),
            ..Config::default()
        };
        if let Some(home) = dirs::home_dir() {
            assert_eq!(config.effective_working_directory(), Some(home));
        }
    }

    #[test]
    fn test_default_config_validates() {
        assert!(Config::default().validate().is_ok());
        assert!(ColorPalette::default().is_valid());
    }

    #[test]
    fn test_validate_names_bad_palette_slot() {
        let mut config = Config::default();
        config.colors.light_magenta = "fuchsia".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("colors.lightMagenta"));
    }

    #[test]
    fn test_validate_rejects_nonpositive_font_size() {
        let config = Config {
            font_size: 0.0,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_non_finite_numbers() {
        let config = Config {
            font_size: f32::NAN,
            ..Config::default()
        };
        assert!(config.validate().is_err());

        let config = Config {
            line_height: f32::INFINITY,
            ..Config::default()
        };
        assert!(config.validate().is_err());

        // YAML's .nan literal arrives through deserialization too
        let config: Config = serde_yaml_ng::from_str("fontSize: .nan\n").unwrap();
        assert!(config.validate().is_err());
    }
}
