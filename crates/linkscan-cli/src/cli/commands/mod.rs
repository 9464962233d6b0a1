//! CLI command handlers. Each command is in its own file.

mod check;
mod completions;
mod config;
mod probe;

pub use check::run_check;
pub use completions::run_completions;
pub use config::run_config;
pub use probe::run_probe;
