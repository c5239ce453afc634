//! Terminal color palette: the 16 standard ANSI slots plus extension slots.

use serde::{Deserialize, Serialize};

/// The terminal color palette.
///
/// Holds the 16 standard ANSI color slots (indices 0-15) that terminal
/// content rendering depends on, plus two non-standard extension slots
/// (`limeGreen`, `lightCoral`) consumed by plugins. All values are color
/// strings in hex or `rgba()` syntax.
///
/// Every standard slot is always present; a user config can override
/// individual slots and the rest keep their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ColorPalette {
    pub black: String,
    pub red: String,
    pub green: String,
    pub yellow: String,
    pub blue: String,
    pub magenta: String,
    pub cyan: String,
    pub white: String,
    pub light_black: String,
    pub light_red: String,
    pub light_green: String,
    pub light_yellow: String,
    pub light_blue: String,
    pub light_magenta: String,
    pub light_cyan: String,
    pub light_white: String,

    // Non-standard extension slots
    pub lime_green: String,
    pub light_coral: String,
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self {
            black: "#000000".to_string(),
            red: "#C51E14".to_string(),
            green: "#1DC121".to_string(),
            yellow: "#C7C329".to_string(),
            blue: "#0A2FC4".to_string(),
            magenta: "#C839C5".to_string(),
            cyan: "#20C5C6".to_string(),
            white: "#C7C7C7".to_string(),
            light_black: "#686868".to_string(),
            light_red: "#FD6F6B".to_string(),
            light_green: "#67F86F".to_string(),
            light_yellow: "#FFFA72".to_string(),
            light_blue: "#6A76FB".to_string(),
            light_magenta: "#FD7CFC".to_string(),
            light_cyan: "#68FDFE".to_string(),
            light_white: "#FFFFFF".to_string(),
            lime_green: "#32CD32".to_string(),
            light_coral: "#F08080".to_string(),
        }
    }
}

impl ColorPalette {
    /// Get a standard ANSI color by index (0-15).
    ///
    /// Indices 0-7 are the normal colors, 8-15 the bright variants.
    /// Out-of-range indices fall back to white.
    pub fn ansi_color(&self, index: u8) -> &str {
        match index {
            0 => &self.black,
            1 => &self.red,
            2 => &self.green,
            3 => &self.yellow,
            4 => &self.blue,
            5 => &self.magenta,
            6 => &self.cyan,
            7 => &self.white,
            8 => &self.light_black,
            9 => &self.light_red,
            10 => &self.light_green,
            11 => &self.light_yellow,
            12 => &self.light_blue,
            13 => &self.light_magenta,
            14 => &self.light_cyan,
            15 => &self.light_white,
            _ => &self.white,
        }
    }

    /// Iterate over (slot name, color string) pairs for the 16 standard
    /// slots followed by the extension slots. Wire names are used, so the
    /// bright variants are `lightBlack` etc.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        [
            ("black", self.black.as_str()),
            ("red", self.red.as_str()),
            ("green", self.green.as_str()),
            ("yellow", self.yellow.as_str()),
            ("blue", self.blue.as_str()),
            ("magenta", self.magenta.as_str()),
            ("cyan", self.cyan.as_str()),
            ("white", self.white.as_str()),
            ("lightBlack", self.light_black.as_str()),
            ("lightRed", self.light_red.as_str()),
            ("lightGreen", self.light_green.as_str()),
            ("lightYellow", self.light_yellow.as_str()),
            ("lightBlue", self.light_blue.as_str()),
            ("lightMagenta", self.light_magenta.as_str()),
            ("lightCyan", self.light_cyan.as_str()),
            ("lightWhite", self.light_white.as_str()),
            ("limeGreen", self.lime_green.as_str()),
            ("lightCoral", self.light_coral.as_str()),
        ]
        .into_iter()
    }

    /// Names of the 16 standard ANSI slots, in index order.
    pub fn standard_slot_names() -> &'static [&'static str] {
        &[
            "black",
            "red",
            "green",
            "yellow",
            "blue",
            "magenta",
            "cyan",
            "white",
            "lightBlack",
            "lightRed",
            "lightGreen",
            "lightYellow",
            "lightBlue",
            "lightMagenta",
            "lightCyan",
            "lightWhite",
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Rgba;

    #[test]
    fn test_all_standard_slots_are_valid_colors() {
        let palette = ColorPalette::default();
        for index in 0..16u8 {
            let value = palette.ansi_color(index);
            assert!(
                Rgba::parse(value).is_some(),
                "ANSI slot {} has unparseable color {:?}",
                index,
                value
            );
        }
    }

    #[test]
    fn test_extension_slots_are_valid_colors() {
        let palette = ColorPalette::default();
        assert!(Rgba::parse(&palette.lime_green).is_some());
        assert!(Rgba::parse(&palette.light_coral).is_some());
    }

    #[test]
    fn test_ansi_color_index_mapping() {
        let palette = ColorPalette::default();
        assert_eq!(palette.ansi_color(0), "#000000");
        assert_eq!(palette.ansi_color(7), "#C7C7C7");
        assert_eq!(palette.ansi_color(8), "#686868");
        assert_eq!(palette.ansi_color(15), "#FFFFFF");
        // Out of range falls back to white
        assert_eq!(palette.ansi_color(200), "#C7C7C7");
    }

    #[test]
    fn test_iter_covers_all_slots_in_order() {
        let palette = ColorPalette::default();
        let names: Vec<&str> = palette.iter().map(|(name, _)| name).collect();
        assert_eq!(names.len(), 18);
        assert_eq!(&names[..16], ColorPalette::standard_slot_names());
        assert_eq!(names[16], "limeGreen");
        assert_eq!(names[17], "lightCoral");
    }

    #[test]
    fn test_serializes_with_camel_case_slot_names() {
        let yaml = serde_yaml_ng::to_string(&ColorPalette::default()).unwrap();
        assert!(yaml.contains("lightBlack:"));
        assert!(yaml.contains("limeGreen:"));
        assert!(!yaml.contains("light_black"));
    }
}
