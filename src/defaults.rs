//! Default value functions for configuration.
//!
//! Each free function backs a `#[serde(default = "crate::defaults::...")]`
//! attribute on a [`Config`](crate::Config) field, so that any field missing
//! from a user's config file independently falls back to its default. The
//! explicit `Default` impl for `Config` is built from the same functions.

use crate::palette::ColorPalette;
use crate::types::{BellMode, CursorShape, FontWeight, OptionSelectionMode, UpdateChannel};

// ── Updates ────────────────────────────────────────────────────────────────

pub fn update_channel() -> UpdateChannel {
    UpdateChannel::Stable
}

// ── Typography ─────────────────────────────────────────────────────────────

pub fn font_size() -> f32 {
    12.0
}

pub fn font_family() -> String {
    "Menlo, \"DejaVu Sans Mono\", Consolas, \"Lucida Console\", monospace".to_string()
}

pub fn font_weight() -> FontWeight {
    FontWeight::Normal
}

pub fn font_weight_bold() -> FontWeight {
    FontWeight::Bold
}

pub fn line_height() -> f32 {
    1.0
}

pub fn letter_spacing() -> f32 {
    0.0
}

// ── Cursor ─────────────────────────────────────────────────────────────────

pub fn cursor_color() -> String {
    "rgba(248,28,229,0.8)".to_string()
}

pub fn cursor_accent_color() -> String {
    "#000".to_string()
}

pub fn cursor_shape() -> CursorShape {
    CursorShape::Block
}

// ── Core colors ────────────────────────────────────────────────────────────

pub fn foreground_color() -> String {
    "#fff".to_string()
}

pub fn background_color() -> String {
    "#000".to_string()
}

pub fn selection_color() -> String {
    "rgba(248,28,229,0.3)".to_string()
}

pub fn border_color() -> String {
    "#333".to_string()
}

// ── Styling ────────────────────────────────────────────────────────────────

pub fn padding() -> String {
    "12px 14px".to_string()
}

// ── Palette ────────────────────────────────────────────────────────────────

pub fn colors() -> ColorPalette {
    ColorPalette::default()
}

// ── Shell ──────────────────────────────────────────────────────────────────

pub fn shell_args() -> Vec<String> {
    vec!["--login".to_string()]
}

// ── Behavior ───────────────────────────────────────────────────────────────

pub fn bell() -> BellMode {
    BellMode::Sound
}

pub fn option_selection_mode() -> OptionSelectionMode {
    OptionSelectionMode::Vertical
}

// ── Generic helpers ────────────────────────────────────────────────────────

pub fn bool_true() -> bool {
    true
}

pub fn bool_false() -> bool {
    false
}
