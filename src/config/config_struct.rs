//! Core `Config` struct definition.
//!
//! The configuration record is a flat map of independent settings. Wire
//! field names are camelCase with a handful of historical irregulars
//! (`termCSS`, `defaultSSHApp`, `preserveCWD`, `webGLRenderer`) that are
//! pinned with explicit renames — host compatibility depends on the exact
//! names, so changing them is a breaking config-format change.
//!
//! Every field carries a `#[serde(default = ...)]` attribute pointing at a
//! function in [`crate::defaults`], so a user file only has to mention the
//! settings it overrides; everything else falls back per-field.

use crate::palette::ColorPalette;
use crate::types::{BellMode, CursorShape, FontWeight, OptionSelectionMode, UpdateChannel};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Configuration for the terminal emulator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    // ========================================================================
    // Updates
    // ========================================================================
    /// Release channel to follow for application updates
    #[serde(default = "crate::defaults::update_channel")]
    pub update_channel: UpdateChannel,

    // ========================================================================
    // Typography
    // ========================================================================
    /// Font size in points
    #[serde(default = "crate::defaults::font_size")]
    pub font_size: f32,

    /// Font family stack, CSS-style (first available family wins)
    #[serde(default = "crate::defaults::font_family")]
    pub font_family: String,

    /// Weight used for regular text
    #[serde(default = "crate::defaults::font_weight")]
    pub font_weight: FontWeight,

    /// Weight used for bold text
    #[serde(default = "crate::defaults::font_weight_bold")]
    pub font_weight_bold: FontWeight,

    /// Line height multiplier (1.0 = font-native spacing)
    #[serde(default = "crate::defaults::line_height")]
    pub line_height: f32,

    /// Additional spacing between characters, in pixels
    #[serde(default = "crate::defaults::letter_spacing")]
    pub letter_spacing: f32,

    // ========================================================================
    // Cursor
    // ========================================================================
    /// Cursor color (hex or rgba string)
    #[serde(default = "crate::defaults::cursor_color")]
    pub cursor_color: String,

    /// Color of text under a block cursor
    #[serde(default = "crate::defaults::cursor_accent_color")]
    pub cursor_accent_color: String,

    /// Cursor shape: BLOCK, BEAM, or UNDERLINE
    #[serde(default = "crate::defaults::cursor_shape")]
    pub cursor_shape: CursorShape,

    /// Whether the cursor blinks
    #[serde(default = "crate::defaults::bool_false")]
    pub cursor_blink: bool,

    // ========================================================================
    // Core colors
    // ========================================================================
    /// Default text color
    #[serde(default = "crate::defaults::foreground_color")]
    pub foreground_color: String,

    /// Terminal background color
    #[serde(default = "crate::defaults::background_color")]
    pub background_color: String,

    /// Selection highlight color
    #[serde(default = "crate::defaults::selection_color")]
    pub selection_color: String,

    /// Window border / in-app divider color
    #[serde(default = "crate::defaults::border_color")]
    pub border_color: String,

    // ========================================================================
    // Styling overrides
    // ========================================================================
    /// Free-form style-sheet overrides for the application UI
    #[serde(default)]
    pub css: String,

    /// Free-form style-sheet overrides for terminal content
    #[serde(default, rename = "termCSS")]
    pub term_css: String,

    /// Padding around terminal content, CSS shorthand (e.g. "12px 14px")
    #[serde(default = "crate::defaults::padding")]
    pub padding: String,

    // ========================================================================
    // Window
    // ========================================================================
    /// Initial working directory; empty means the platform default
    #[serde(default)]
    pub working_directory: String,

    /// Hamburger-menu visibility; empty string means platform default
    #[serde(default)]
    pub show_hamburger_menu: String,

    /// Window-controls visibility; empty string means platform default
    #[serde(default)]
    pub show_window_controls: String,

    // ========================================================================
    // Color palette
    // ========================================================================
    /// The 16 standard ANSI slots plus extension slots
    #[serde(default = "crate::defaults::colors")]
    pub colors: ColorPalette,

    // ========================================================================
    // Shell
    // ========================================================================
    /// Shell executable path; empty means auto-detect the login shell
    #[serde(default)]
    pub shell: String,

    /// Arguments passed to the shell on launch
    #[serde(default = "crate::defaults::shell_args")]
    pub shell_args: Vec<String>,

    /// Environment variable overlay applied to the shell process
    #[serde(default)]
    pub env: BTreeMap<String, String>,

    // ========================================================================
    // Behavior
    // ========================================================================
    /// Terminal bell: "SOUND" or false
    #[serde(default = "crate::defaults::bell")]
    pub bell: BellMode,

    /// Copy selected text to the clipboard as soon as it is selected
    #[serde(default = "crate::defaults::bool_false")]
    pub copy_on_select: bool,

    /// Register as the system's default ssh:// protocol handler
    #[serde(default = "crate::defaults::bool_true", rename = "defaultSSHApp")]
    pub default_ssh_app: bool,

    /// Windows-style quick edit: right-click pastes, selection auto-copies
    #[serde(default = "crate::defaults::bool_false")]
    pub quick_edit: bool,

    /// New tabs and panes inherit the working directory of the active session
    #[serde(default = "crate::defaults::bool_true", rename = "preserveCWD")]
    pub preserve_cwd: bool,

    // ========================================================================
    // Rendering
    // ========================================================================
    /// Use the GPU-accelerated renderer
    #[serde(default = "crate::defaults::bool_true", rename = "webGLRenderer")]
    pub web_gl_renderer: bool,

    /// Disable font ligatures even when the font provides them
    #[serde(default = "crate::defaults::bool_true")]
    pub disable_ligatures: bool,

    /// Option+click selection behavior on macOS
    #[serde(default = "crate::defaults::option_selection_mode")]
    pub mac_option_selection_mode: OptionSelectionMode,

    /// Modifier key required to activate links on click; empty means none
    #[serde(default)]
    pub web_links_activation_key: String,

    // ========================================================================
    // Features
    // ========================================================================
    /// Never check for or install application updates
    #[serde(default = "crate::defaults::bool_false")]
    pub disable_auto_updates: bool,

    /// Announce terminal content through the platform screen reader
    #[serde(default = "crate::defaults::bool_false")]
    pub screen_reader_mode: bool,

    // ========================================================================
    // Extension points
    // ========================================================================
    /// Plugin package identifiers to install and load, in order
    #[serde(default)]
    pub plugins: Vec<String>,

    /// Plugins loaded from a local development path, in order
    #[serde(default)]
    pub local_plugins: Vec<String>,

    /// Action-name → key-binding overrides
    #[serde(default)]
    pub keymaps: BTreeMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            update_channel: crate::defaults::update_channel(),
            font_size: crate::defaults::font_size(),
            font_family: crate::defaults::font_family(),
            font_weight: crate::defaults::font_weight(),
            font_weight_bold: crate::defaults::font_weight_bold(),
            line_height: crate::defaults::line_height(),
            letter_spacing: crate::defaults::letter_spacing(),
            cursor_color: crate::defaults::cursor_color(),
            cursor_accent_color: crate::defaults::cursor_accent_color(),
            cursor_shape: crate::defaults::cursor_shape(),
            cursor_blink: false,
            foreground_color: crate::defaults::foreground_color(),
            background_color: crate::defaults::background_color(),
            selection_color: crate::defaults::selection_color(),
            border_color: crate::defaults::border_color(),
            css: String::new(),
            term_css: String::new(),
            padding: crate::defaults::padding(),
            working_directory: String::new(),
            show_hamburger_menu: String::new(),
            show_window_controls: String::new(),
            colors: ColorPalette::default(),
            shell: String::new(),
            shell_args: crate::defaults::shell_args(),
            env: BTreeMap::new(),
            bell: crate::defaults::bell(),
            copy_on_select: false,
            default_ssh_app: true,
            quick_edit: false,
            preserve_cwd: true,
            web_gl_renderer: true,
            disable_ligatures: true,
            mac_option_selection_mode: crate::defaults::option_selection_mode(),
            web_links_activation_key: String::new(),
            disable_auto_updates: false,
            screen_reader_mode: false,
            plugins: Vec::new(),
            local_plugins: Vec::new(),
            keymaps: BTreeMap::new(),
        }
    }
}
