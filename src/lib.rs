//! Configuration system for the veloterm terminal emulator.
//!
//! This crate defines the default-settings record the application ships
//! with, and the loading, saving, and merging around it. It includes:
//!
//! - The flat [`Config`] record with its built-in defaults
//! - The ANSI [`ColorPalette`] and color-string parsing
//! - YAML persistence with per-field fallback to defaults
//! - Overlay merging of partial user documents
//! - Shell and working-directory resolution helpers
//! - Configuration file watching for hot reload
//!
//! [`Config::default()`] is the canonical defaults provider: pure,
//! infallible, and identical on every call. Hosts merge user overrides on
//! top of it via [`Config::load`] or [`Config::merged_with`].

pub mod config;
pub mod defaults;
pub mod error;
pub mod palette;
pub mod types;
#[cfg(feature = "watcher")]
pub mod watcher;

// Re-export main types for convenience
pub use config::Config;
pub use error::ConfigError;
pub use palette::ColorPalette;

// Re-export config value types
pub use types::{
    is_valid_color, BellMode, CursorShape, FontWeight, OptionSelectionMode, Rgba, ShellType,
    UpdateChannel,
};

#[cfg(feature = "watcher")]
pub use watcher::{ConfigReloadEvent, ConfigWatcher};
