//! Distiller CLI library.
//!
//! This library provides the core functionality for the Distiller command-line interface,
//! including page sources, configuration management, command execution, and output formatting.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod source;

pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;
