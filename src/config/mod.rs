//! Terminal configuration management.
//!
//! This module provides the configuration record, its default values, and
//! loading, saving, and overlay merging.
//!
//! # Sub-modules
//!
//! - [`config_struct`] — Core `Config` struct and its `Default` impl
//! - [`persistence`] — `impl Config` methods for load/save/path-resolution
//! - [`overlay`] — `impl Config` methods for merging partial user documents
//! - [`runtime`] — `impl Config` derived-value helpers and validation

pub mod config_struct;
mod overlay;
mod persistence;
mod runtime;

pub use config_struct::Config;
