//! Command-line front end for the `gri` crate.
//!
//! The binary lives in `main.rs`; the command layer is exposed here so it
//! can be driven from tests with an in-memory writer.

pub mod cli;

pub use cli::{Cli, CliError, Commands, execute};
