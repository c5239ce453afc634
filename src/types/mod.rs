//! Configuration value types.
//!
//! Enum settings, color parsing, and shell classification used by the
//! [`Config`](crate::Config) record.

mod appearance;
mod behavior;
mod color;
mod shell;

pub use appearance::{CursorShape, FontWeight, OptionSelectionMode, UpdateChannel};
pub use behavior::BellMode;
pub use color::{is_valid_color, Rgba};
pub use shell::{detect_shell_path, ShellType};
