//! # CLI Command Implementations

use std::io::Write;
use std::path::Path;

use gri::{
    ENVIRONMENT_VAR, Environment, EnvironmentConfig, Gri, GriBuilder, decode,
    select_implementation, validate_gri,
};
use serde::Serialize;

use super::CliError;

/// Fields for the `encode` command.
#[derive(Debug, Clone, Default)]
pub struct EncodeArgs {
    pub entity_type: String,
    pub entity_id: Option<String>,
    pub aspect: String,
    pub aspect_id: Option<String>,
    pub scope: Option<String>,
    pub strict: bool,
}

/// JSON shape of `encode` output.
#[derive(Debug, Serialize)]
struct EncodeOutput<'a> {
    gri: String,
    #[serde(flatten)]
    fields: &'a Gri,
}

/// JSON shape of `validate` output.
#[derive(Debug, Serialize)]
struct ValidateOutput<'a> {
    valid: bool,
    gri: &'a str,
}

/// JSON shape of `env` output.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvReport {
    pub environment: Environment,
    pub mock_backend: bool,
    pub selected: String,
    pub source: String,
}

const PRODUCTION_BACKEND: &str = "live graph backend";
const DEVELOPMENT_BACKEND: &str = "mock graph backend";

// =============================================================================
// COMMANDS
// =============================================================================

/// Encode fields into a GRI.
pub fn cmd_encode(out: &mut impl Write, json: bool, args: EncodeArgs) -> Result<(), CliError> {
    let mut builder = GriBuilder::new()
        .entity_type(args.entity_type)
        .aspect(args.aspect);
    if let Some(entity_id) = args.entity_id {
        builder = builder.entity_id(entity_id);
    }
    if let Some(aspect_id) = args.aspect_id {
        builder = builder.aspect_id(aspect_id);
    }
    if let Some(scope) = args.scope {
        builder = builder.scope(scope);
    }
    let gri = builder.build()?;

    if args.strict {
        validate_gri(&gri)?;
    }

    let encoded = gri.to_string();
    tracing::debug!(gri = %encoded, "encoded");

    if json {
        let output = EncodeOutput {
            gri: encoded,
            fields: &gri,
        };
        writeln!(out, "{}", serde_json::to_string_pretty(&output)?)?;
    } else {
        writeln!(out, "{}", encoded)?;
    }
    Ok(())
}

/// Decode a GRI and print its fields.
pub fn cmd_decode(out: &mut impl Write, json: bool, value: &str) -> Result<(), CliError> {
    let gri = decode(value)?;

    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&gri)?)?;
        return Ok(());
    }

    writeln!(out, "entityType: {}", gri.entity_type)?;
    writeln!(out, "entityId:   {}", gri.entity_id)?;
    writeln!(out, "aspect:     {}", gri.aspect)?;
    if let Some(aspect_id) = &gri.aspect_id {
        writeln!(out, "aspectId:   {}", aspect_id)?;
    }
    if let Some(scope) = &gri.scope {
        writeln!(out, "scope:      {}", scope)?;
    }
    Ok(())
}

/// Decode and structurally validate a GRI.
pub fn cmd_validate(out: &mut impl Write, json: bool, value: &str) -> Result<(), CliError> {
    let gri = decode(value)?;
    validate_gri(&gri)?;

    if json {
        let output = ValidateOutput {
            valid: true,
            gri: value,
        };
        writeln!(out, "{}", serde_json::to_string(&output)?)?;
    } else {
        writeln!(out, "valid")?;
    }
    Ok(())
}

/// Resolve the environment and report which implementation it selects.
pub fn cmd_env(out: &mut impl Write, json: bool, config: Option<&Path>) -> Result<(), CliError> {
    let env_override = std::env::var(ENVIRONMENT_VAR).ok();
    let report = env_report(config, env_override.as_deref())?;

    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
    } else {
        writeln!(out, "environment:  {}", report.environment)?;
        writeln!(out, "mock backend: {}", if report.mock_backend { "yes" } else { "no" })?;
        writeln!(out, "selected:     {}", report.selected)?;
        writeln!(out, "source:       {}", report.source)?;
    }
    Ok(())
}

/// Loads the configuration file, applies `env_override` (the value of
/// [`ENVIRONMENT_VAR`]) on top, and runs the selector.
///
/// The source is the variable whenever it holds a recognized environment,
/// even if it names the same environment as the file.
pub fn env_report(
    config: Option<&Path>,
    env_override: Option<&str>,
) -> Result<EnvReport, CliError> {
    let (base, file_source) = match config {
        Some(path) => (EnvironmentConfig::load(path)?, path.display().to_string()),
        None => (EnvironmentConfig::default(), "default".to_string()),
    };

    let overridden = env_override.is_some_and(|v| v.parse::<Environment>().is_ok());
    let resolved = base.with_override(env_override);
    let source = if overridden {
        ENVIRONMENT_VAR.to_string()
    } else {
        file_source
    };

    let selected = select_implementation(&resolved, PRODUCTION_BACKEND, DEVELOPMENT_BACKEND);
    tracing::info!(environment = %resolved.environment, %selected, "environment resolved");

    Ok(EnvReport {
        environment: resolved.environment,
        mock_backend: resolved.mock_backend(),
        selected: selected.to_string(),
        source,
    })
}
