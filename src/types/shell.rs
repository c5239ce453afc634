//! Shell detection types.

use serde::{Deserialize, Serialize};

/// Detected shell type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ShellType {
    Bash,
    Zsh,
    Fish,
    #[default]
    Unknown,
}

impl ShellType {
    /// Classify a shell path string into a `ShellType`.
    pub fn from_path(path: &str) -> Self {
        if path.contains("zsh") {
            Self::Zsh
        } else if path.contains("bash") {
            Self::Bash
        } else if path.contains("fish") {
            Self::Fish
        } else {
            Self::Unknown
        }
    }

    /// Detect the user's login shell type.
    ///
    /// 1. `$SHELL` environment variable (works in terminals).
    /// 2. `/etc/passwd` entry for the current user (unix).
    pub fn detect() -> Self {
        if let Some(path) = detect_shell_path() {
            Self::from_path(&path)
        } else {
            Self::Unknown
        }
    }

    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Bash => "Bash",
            Self::Zsh => "Zsh",
            Self::Fish => "Fish",
            Self::Unknown => "Unknown",
        }
    }
}

/// Find the user's login shell path.
///
/// Checks `$SHELL` first, then the `/etc/passwd` entry for the current user
/// on unix. Returns `None` when neither strategy yields a path.
pub fn detect_shell_path() -> Option<String> {
    if let Ok(shell) = std::env::var("SHELL") {
        if !shell.is_empty() {
            return Some(shell);
        }
    }

    #[cfg(unix)]
    {
        if let Some(path) = shell_from_passwd() {
            return Some(path);
        }
    }

    None
}

/// Unix: parse `/etc/passwd` for the current user's configured shell.
#[cfg(unix)]
fn shell_from_passwd() -> Option<String> {
    let user = std::env::var("USER")
        .or_else(|_| std::env::var("LOGNAME"))
        .ok()?;
    let contents = std::fs::read_to_string("/etc/passwd").ok()?;
    for line in contents.lines() {
        let parts: Vec<&str> = line.splitn(7, ':').collect();
        if parts.len() == 7 && parts[0] == user && !parts[6].is_empty() {
            return Some(parts[6].to_string());
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path_classification() {
        assert_eq!(ShellType::from_path("/bin/zsh"), ShellType::Zsh);
        assert_eq!(ShellType::from_path("/usr/bin/bash"), ShellType::Bash);
        assert_eq!(ShellType::from_path("/opt/homebrew/bin/fish"), ShellType::Fish);
        assert_eq!(ShellType::from_path("/bin/tcsh"), ShellType::Unknown);
    }

    #[test]
    fn test_wire_form_is_lowercase() {
        assert_eq!(serde_json::to_string(&ShellType::Zsh).unwrap(), "\"zsh\"");
        assert_eq!(
            serde_json::from_str::<ShellType>("\"fish\"").unwrap(),
            ShellType::Fish
        );
    }
}
