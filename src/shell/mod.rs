//! Subprocess execution and platform checks.

pub mod command;
pub mod platform;

pub use command::{execute, execute_in, CommandOptions, CommandOutput};
pub use platform::is_ci;
