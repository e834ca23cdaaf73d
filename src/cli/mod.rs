pub mod commands;
pub mod context;
pub mod help;
pub mod output;
pub mod registry;
mod shell;
pub mod system_clock;

pub use context::{CliMode, ShellContext};
pub use shell::run_cli;
