//! # GRI CLI
//!
//! ## Available Commands
//!
//! - `encode` - Build a GRI string from its fields
//! - `decode` - Split a GRI string into its fields
//! - `validate` - Check that a GRI decodes and round-trips
//! - `env` - Show which service implementation the configuration selects

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use thiserror::Error;

pub use commands::*;

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// Encode, decode and inspect Graph Resource Identifiers.
#[derive(Parser, Debug)]
#[command(name = "gri")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output in JSON format (for programmatic access)
    #[arg(long, global = true)]
    pub json: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build a GRI string from its fields
    Encode {
        /// Resource category (e.g. provider, user)
        #[arg(short = 't', long)]
        entity_type: String,

        /// Entity instance id; "null" is written when omitted
        #[arg(short = 'i', long)]
        entity_id: Option<String>,

        /// Facet of the entity (e.g. instance)
        #[arg(short, long)]
        aspect: String,

        /// Further qualifies the aspect
        #[arg(long)]
        aspect_id: Option<String>,

        /// Access scope (private, protected, public, auth)
        #[arg(short, long)]
        scope: Option<String>,

        /// Reject fields containing separator characters
        #[arg(long)]
        strict: bool,
    },

    /// Split a GRI string into its fields
    Decode {
        /// The GRI to decode
        gri: String,
    },

    /// Check that a GRI decodes and round-trips unchanged
    Validate {
        /// The GRI to validate
        gri: String,
    },

    /// Show which implementation the environment selects
    Env {
        /// TOML configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

/// Errors surfaced by CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Decode(#[from] gri::DecodeError),

    #[error(transparent)]
    Validation(#[from] gri::ValidationError),

    #[error(transparent)]
    Build(#[from] gri::BuildError),

    #[error(transparent)]
    Config(#[from] gri::ConfigError),

    #[error("failed to serialize output: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

// =============================================================================
// COMMAND EXECUTION
// =============================================================================

/// Execute the CLI with parsed arguments, writing results to `out`.
pub fn execute(cli: Cli, out: &mut impl std::io::Write) -> Result<(), CliError> {
    let json = cli.json;

    match cli.command {
        Commands::Encode {
            entity_type,
            entity_id,
            aspect,
            aspect_id,
            scope,
            strict,
        } => cmd_encode(
            out,
            json,
            EncodeArgs {
                entity_type,
                entity_id,
                aspect,
                aspect_id,
                scope,
                strict,
            },
        ),
        Commands::Decode { gri } => cmd_decode(out, json, &gri),
        Commands::Validate { gri } => cmd_validate(out, json, &gri),
        Commands::Env { config } => cmd_env(out, json, config.as_deref()),
    }
}
