//! Typed error variants for the veloterm-config crate.
//!
//! These are produced by `Config::load` / `Config::save` and the validation
//! helpers, and exposed for library consumers who want to match on specific
//! failure modes instead of opaque `anyhow` strings. The public load/save
//! surface returns `anyhow::Result`; `ConfigError` values coerce into it
//! automatically and can be recovered with `downcast_ref`.

use thiserror::Error;

/// Errors that can occur when loading, saving, or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An I/O error occurred reading or writing the config file.
    #[error("I/O error reading config: {0}")]
    Io(#[from] std::io::Error),

    /// The config file contained invalid YAML that could not be parsed.
    #[error("YAML parse error in config: {0}")]
    Parse(#[from] serde_yaml_ng::Error),

    /// A field value failed semantic validation.
    ///
    /// The inner string describes which field is invalid and why.
    #[error("config validation error: {0}")]
    Validation(String),

    /// A path resolved outside the expected configuration directory,
    /// indicating a potential directory traversal attempt.
    ///
    /// The inner string includes the offending path and the expected base.
    #[error("path traversal detected: {0}")]
    PathTraversal(String),
}
