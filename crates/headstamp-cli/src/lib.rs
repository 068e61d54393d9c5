//! Headstamp CLI library.
//!
//! The host side of the header engine: language detection, identity
//! resolution, configuration, file I/O and output formatting for the
//! `headstamp` command.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod identity;
pub mod language;
pub mod output;

pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;
