//! CLI command handlers. Each command is in its own file.

mod checksums;
mod config;
mod icon;
mod verify;

pub use checksums::run_checksums;
pub use config::run_config;
pub use icon::{run_icon, IconOverrides};
pub use verify::run_verify;
