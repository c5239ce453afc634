//! Overlay merge: user-supplied partial documents over the defaults.
//!
//! The serde `default` attributes already give per-field fallback when a
//! whole file is deserialized. The overlay path here additionally lets a
//! host re-merge a partial document over an *existing* configuration (e.g.
//! on hot reload), recursing into mappings so a palette overlay touching two
//! slots leaves the other sixteen alone.

use super::config_struct::Config;
use crate::error::ConfigError;
use anyhow::Result;
use serde_json::Value;

impl Config {
    /// Merge a partial YAML document over this configuration, returning the
    /// merged result.
    ///
    /// Merge policy: mappings merge recursively, everything else (scalars
    /// and sequences) replaces the current value wholesale. Unknown keys in
    /// the overlay are ignored.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` when the overlay is not valid YAML, and
    /// `ConfigError::Validation` when a merged value is out of range for its
    /// field (e.g. a malformed color).
    pub fn merged_with(&self, overlay_yaml: &str) -> Result<Self> {
        let overlay: Value = serde_yaml_ng::from_str(overlay_yaml).map_err(ConfigError::Parse)?;

        // An empty document parses as null; nothing to merge.
        if overlay.is_null() {
            return Ok(self.clone());
        }

        let mut base = serde_json::to_value(self)
            .map_err(|e| ConfigError::Validation(format!("cannot serialize config: {e}")))?;
        merge_value(&mut base, overlay);

        let merged: Config = serde_json::from_value(base)
            .map_err(|e| ConfigError::Validation(e.to_string()))?;
        merged.validate()?;
        Ok(merged)
    }

    /// Merge a partial YAML document over this configuration in place.
    pub fn apply_overlay(&mut self, overlay_yaml: &str) -> Result<()> {
        *self = self.merged_with(overlay_yaml)?;
        Ok(())
    }
}

/// Deep-merge `overlay` into `base`.
///
/// Objects merge key-by-key; any other value type replaces the base value.
fn merge_value(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Object(base_map), Value::Object(overlay_map)) => {
            for (key, overlay_value) in overlay_map {
                match base_map.get_mut(&key) {
                    Some(base_value) => merge_value(base_value, overlay_value),
                    // Unknown keys are carried through; deserialization
                    // ignores them, matching file-load behavior.
                    None => {
                        base_map.insert(key, overlay_value);
                    }
                }
            }
        }
        (base_slot, overlay_value) => *base_slot = overlay_value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BellMode, CursorShape};

    #[test]
    fn test_scalar_overlay_keeps_other_defaults() {
        let merged = Config::default()
            .merged_with("fontSize: 16\ncursorShape: BEAM\n")
            .expect("merge failed");
        assert_eq!(merged.font_size, 16.0);
        assert_eq!(merged.cursor_shape, CursorShape::Beam);
        // Everything else untouched
        assert_eq!(merged.cursor_color, "rgba(248,28,229,0.8)");
        assert!(merged.web_gl_renderer);
    }

    #[test]
    fn test_palette_overlay_merges_per_slot() {
        let merged = Config::default()
            .merged_with("colors:\n  red: \"#ff0000\"\n  lightBlue: \"#add8e6\"\n")
            .expect("merge failed");
        assert_eq!(merged.colors.red, "#ff0000");
        assert_eq!(merged.colors.light_blue, "#add8e6");
        // Slots the overlay never named keep their defaults
        assert_eq!(merged.colors.green, "#1DC121");
        assert_eq!(merged.colors.light_white, "#FFFFFF");
    }

    #[test]
    fn test_sequence_overlay_replaces_wholesale() {
        let base = Config::default()
            .merged_with("plugins:\n  - veloterm-one\n  - veloterm-two\n")
            .expect("merge failed");
        assert_eq!(base.plugins, vec!["veloterm-one", "veloterm-two"]);

        // A second overlay replaces, not appends
        let merged = base
            .merged_with("plugins:\n  - veloterm-three\nshellArgs: []\n")
            .expect("merge failed");
        assert_eq!(merged.plugins, vec!["veloterm-three"]);
        assert!(merged.shell_args.is_empty());
    }

    #[test]
    fn test_keymaps_overlay_merges_entries() {
        let base = Config::default()
            .merged_with("keymaps:\n  \"window:new\": cmd+n\n")
            .expect("merge failed");
        let merged = base
            .merged_with("keymaps:\n  \"tab:new\": cmd+t\n")
            .expect("merge failed");
        assert_eq!(merged.keymaps.get("window:new").map(String::as_str), Some("cmd+n"));
        assert_eq!(merged.keymaps.get("tab:new").map(String::as_str), Some("cmd+t"));
    }

    #[test]
    fn test_bell_overlay_accepts_false() {
        let merged = Config::default()
            .merged_with("bell: false\n")
            .expect("merge failed");
        assert_eq!(merged.bell, BellMode::None);
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let merged = Config::default()
            .merged_with("someFutureSetting: 42\n")
            .expect("merge failed");
        assert_eq!(merged, Config::default());
    }

    #[test]
    fn test_empty_overlay_is_identity() {
        let merged = Config::default().merged_with("").expect("merge failed");
        assert_eq!(merged, Config::default());
    }

    #[test]
    fn test_overlay_rejects_invalid_color() {
        let result = Config::default().merged_with("backgroundColor: nope\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_apply_overlay_mutates_in_place() {
        let mut config = Config::default();
        config
            .apply_overlay("copyOnSelect: true\n")
            .expect("merge failed");
        assert!(config.copy_on_select);
    }
}
