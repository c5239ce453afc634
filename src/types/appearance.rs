//! Appearance-related enum settings: cursor, fonts, updates, option key.

use serde::{Deserialize, Serialize};

/// Release channel for application updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UpdateChannel {
    /// Stable releases only (default)
    #[default]
    Stable,
    /// Pre-release builds
    Canary,
}

impl UpdateChannel {
    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Stable => "Stable",
            Self::Canary => "Canary",
        }
    }
}

/// Cursor shape in the terminal.
///
/// Serialized in uppercase (`BLOCK`, `BEAM`, `UNDERLINE`) for config-file
/// compatibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum CursorShape {
    /// Filled rectangle covering the whole cell (default)
    #[default]
    Block,
    /// Thin vertical bar at the left cell edge
    Beam,
    /// Thin horizontal bar at the cell baseline
    Underline,
}

impl CursorShape {
    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Block => "Block",
            Self::Beam => "Beam",
            Self::Underline => "Underline",
        }
    }

    /// All available shapes for UI iteration
    pub fn all() -> &'static [CursorShape] {
        &[CursorShape::Block, CursorShape::Beam, CursorShape::Underline]
    }
}

/// CSS-style font weight keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    /// Regular weight (default for body text)
    #[default]
    Normal,
    /// Bold weight (default for bold text)
    Bold,
    /// One step heavier than the inherited weight
    Bolder,
    /// One step lighter than the inherited weight
    Lighter,
}

impl FontWeight {
    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::Bold => "Bold",
            Self::Bolder => "Bolder",
            Self::Lighter => "Lighter",
        }
    }
}

/// How Option+click selection behaves on macOS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OptionSelectionMode {
    /// Option+click selects a rectangular block (default)
    #[default]
    Vertical,
    /// Option+click always forces plain linear selection
    Force,
}

impl OptionSelectionMode {
    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Vertical => "Vertical block selection",
            Self::Force => "Force linear selection",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_shape_wire_form_is_uppercase() {
        assert_eq!(
            serde_json::to_string(&CursorShape::Block).unwrap(),
            "\"BLOCK\""
        );
        assert_eq!(
            serde_json::from_str::<CursorShape>("\"UNDERLINE\"").unwrap(),
            CursorShape::Underline
        );
    }

    #[test]
    fn test_update_channel_wire_form_is_lowercase() {
        assert_eq!(
            serde_json::to_string(&UpdateChannel::Stable).unwrap(),
            "\"stable\""
        );
        assert_eq!(
            serde_json::from_str::<UpdateChannel>("\"canary\"").unwrap(),
            UpdateChannel::Canary
        );
    }

    #[test]
    fn test_option_selection_mode_wire_form() {
        assert_eq!(
            serde_json::to_string(&OptionSelectionMode::Vertical).unwrap(),
            "\"vertical\""
        );
        assert_eq!(
            serde_json::from_str::<OptionSelectionMode>("\"force\"").unwrap(),
            OptionSelectionMode::Force
        );
    }

    #[test]
    fn test_font_weight_defaults() {
        assert_eq!(FontWeight::default(), FontWeight::Normal);
        assert_eq!(
            serde_json::to_string(&FontWeight::Bold).unwrap(),
            "\"bold\""
        );
    }
}
