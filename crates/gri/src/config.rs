//! Loading [`EnvironmentConfig`] from TOML and the process environment.
//!
//! ```toml
//! environment = "development"   # or "production"
//! # mock-backend = true         # same as environment = "development"
//! ```
//!
//! An explicit `environment` key takes precedence over `mock-backend`.
//! Absent keys select production.

use std::path::Path;

use serde::Deserialize;

use crate::environment::{Environment, EnvironmentConfig};
use crate::error::ConfigError;

/// Environment variable that overrides the configured environment.
pub const ENVIRONMENT_VAR: &str = "GRI_ENVIRONMENT";

/// On-disk shape of the configuration file.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
struct RawConfig {
    environment: Option<Environment>,
    mock_backend: Option<bool>,
}

impl From<RawConfig> for EnvironmentConfig {
    fn from(raw: RawConfig) -> Self {
        let environment = match (raw.environment, raw.mock_backend) {
            (Some(environment), _) => environment,
            (None, Some(true)) => Environment::Development,
            (None, Some(false) | None) => Environment::Production,
        };
        EnvironmentConfig::new(environment)
    }
}

impl EnvironmentConfig {
    /// Parses configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let raw: RawConfig = toml::from_str(text)?;
        Ok(raw.into())
    }

    /// Reads configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(
            path = %path.display(),
            environment = %config.environment,
            "loaded environment config"
        );
        Ok(config)
    }

    /// Builds configuration from [`ENVIRONMENT_VAR`] alone.
    ///
    /// Never fails: an unset or unrecognized value selects production.
    pub fn from_env() -> Self {
        Self::default().with_override(std::env::var(ENVIRONMENT_VAR).ok().as_deref())
    }

    /// Applies [`ENVIRONMENT_VAR`] on top of this configuration, if set.
    pub fn apply_env_override(self) -> Self {
        self.with_override(std::env::var(ENVIRONMENT_VAR).ok().as_deref())
    }

    /// Applies an override value; unrecognized values are ignored with a warning.
    pub fn with_override(self, value: Option<&str>) -> Self {
        let Some(value) = value.filter(|v| !v.trim().is_empty()) else {
            return self;
        };
        match value.parse::<Environment>() {
            Ok(environment) => {
                tracing::debug!(%environment, var = ENVIRONMENT_VAR, "environment overridden");
                Self::new(environment)
            }
            Err(e) => {
                tracing::warn!(
                    var = ENVIRONMENT_VAR,
                    "{}; keeping {}",
                    e,
                    self.environment
                );
                self
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_empty_config_is_production() {
        let config = EnvironmentConfig::from_toml_str("").unwrap();
        assert_eq!(config, EnvironmentConfig::default());
        assert_eq!(config.environment, Environment::Production);
    }

    #[test]
    fn test_environment_key() {
        let config = EnvironmentConfig::from_toml_str(r#"environment = "development""#).unwrap();
        assert!(config.mock_backend());

        let config = EnvironmentConfig::from_toml_str(r#"environment = "mock""#).unwrap();
        assert_eq!(config.environment, Environment::Development);

        let config = EnvironmentConfig::from_toml_str(r#"environment = "prod""#).unwrap();
        assert_eq!(config.environment, Environment::Production);
    }

    #[test]
    fn test_mock_backend_alias() {
        let config = EnvironmentConfig::from_toml_str("mock-backend = true").unwrap();
        assert_eq!(config.environment, Environment::Development);

        let config = EnvironmentConfig::from_toml_str("mock-backend = false").unwrap();
        assert_eq!(config.environment, Environment::Production);
    }

    #[test]
    fn test_environment_key_wins_over_mock_backend() {
        let config = EnvironmentConfig::from_toml_str(
            "environment = \"production\"\nmock-backend = true",
        )
        .unwrap();
        assert_eq!(config.environment, Environment::Production);
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let config =
            EnvironmentConfig::from_toml_str("api-origin = \"https://zone.example\"").unwrap();
        assert_eq!(config.environment, Environment::Production);
    }

    #[test]
    fn test_invalid_config() {
        let err = EnvironmentConfig::from_toml_str(r#"environment = "staging""#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));

        let err = EnvironmentConfig::from_toml_str("mock-backend = \"yes\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "environment = \"development\"").unwrap();

        let config = EnvironmentConfig::load(file.path()).unwrap();
        assert_eq!(config.environment, Environment::Development);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");

        let err = EnvironmentConfig::load(&path).unwrap_err();
        match err {
            ConfigError::Io { path: p, .. } => assert_eq!(p, path),
            other => panic!("expected Io error, got {:?}", other),
        }
    }

    #[test]
    fn test_override() {
        let base = EnvironmentConfig::new(Environment::Production);
        assert_eq!(
            base.with_override(Some("development")).environment,
            Environment::Development
        );
        assert_eq!(base.with_override(Some("DEV")).environment, Environment::Development);
        assert_eq!(base.with_override(None), base);
        assert_eq!(base.with_override(Some("  ")), base);
        assert_eq!(base.with_override(Some("staging")), base);

        let dev = EnvironmentConfig::new(Environment::Development);
        assert_eq!(dev.with_override(Some("production")).environment, Environment::Production);
    }
}
