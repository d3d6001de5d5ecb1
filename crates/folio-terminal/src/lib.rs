//! Command interpreter for the portfolio terminal.
//!
//! The terminal is a registry-based dispatch system. Commands implement the
//! `Command` trait and are registered by name. The interpreter parses input
//! lines, resolves the command name, and dispatches `execute()`. Every
//! handler is synchronous: one submitted line, one resolved output.

pub mod clock;
mod commands;
mod complete;
mod content_commands;
mod fun_commands;
mod interpreter;
mod site;
mod system_commands;

/// Wall-clock service trait and the default implementation.
pub use clock::{Clock, SystemClock, WallTime};
/// Register all built-in commands (navigation, content, system, fun).
pub use commands::register_builtins;
/// The tab-completion engine.
pub use complete::complete;
/// Register the portfolio/content listing commands into a registry.
pub use content_commands::register_content_commands;
/// Register the decorative commands (ascii, matrix, cowsay, fortune).
pub use fun_commands::register_fun_commands;
/// A single executable command trait.
pub use interpreter::Command;
/// Output produced by a command (text, lines, signals).
pub use interpreter::CommandOutput;
/// Registry of available commands with dispatch.
pub use interpreter::CommandRegistry;
/// Shared environment passed to every command.
pub use interpreter::Environment;
/// Build the fixed portfolio site filesystem.
pub use site::site_fs;
/// Register identity/utility commands (whoami, tour, date, uptime, theme).
pub use system_commands::register_system_commands;
