//! pf-cli library
//!
//! Command definitions and the terminal host for the contact form, shared by
//! the `pf` binary and its tests.

pub mod cli;
pub mod commands;
pub mod contact_commands;
pub mod error;
pub mod logger;
pub mod project_commands;
pub mod terminal_view;


pub use cli::Cli;
pub use error::{CliError, Result as CliResult};
pub use terminal_view::TerminalView;
