mod args;
mod commands;
mod handlers;
pub mod logging;
pub mod tui;
pub mod types;

pub use args::{Cli, Commands, ConfigCommand};
pub use commands::run;
