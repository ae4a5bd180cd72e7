//! Environment-conditional selection between production and mock services.
//!
//! Consumers never consult configuration themselves: a composition root
//! resolves the implementation once and hands the chosen reference to
//! whoever needs it.
//!
//! ```rust
//! use gri::{Environment, EnvironmentConfig, select_implementation};
//!
//! trait Graph {
//!     fn name(&self) -> &'static str;
//! }
//! struct Live;
//! struct Mock;
//! impl Graph for Live { fn name(&self) -> &'static str { "live" } }
//! impl Graph for Mock { fn name(&self) -> &'static str { "mock" } }
//!
//! let config = EnvironmentConfig::new(Environment::Development);
//! let graph = select_implementation::<dyn Graph>(&config, &Live, &Mock);
//! assert_eq!(graph.name(), "mock");
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Where the application's services point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Live backend.
    #[default]
    #[serde(alias = "prod")]
    Production,
    /// Standalone mode against mocked services.
    #[serde(alias = "dev", alias = "mock")]
    Development,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Production => "production",
            Environment::Development => "development",
        }
    }

    /// Returns true when services should be mocked.
    pub fn is_mock(&self) -> bool {
        matches!(self, Environment::Development)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for an unrecognized environment name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown environment: {0:?} (expected production or development)")]
pub struct UnknownEnvironment(pub String);

impl FromStr for Environment {
    type Err = UnknownEnvironment;

    /// Parses an environment name, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "production" | "prod" => Ok(Environment::Production),
            "development" | "dev" | "mock" => Ok(Environment::Development),
            _ => Err(UnknownEnvironment(s.to_string())),
        }
    }
}

/// Resolved environment configuration.
///
/// The default selects [`Environment::Production`], which is also what a
/// missing configuration means.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EnvironmentConfig {
    pub environment: Environment,
}

impl EnvironmentConfig {
    pub fn new(environment: Environment) -> Self {
        Self { environment }
    }

    /// Returns true when the mock implementation should be used.
    pub fn mock_backend(&self) -> bool {
        self.environment.is_mock()
    }
}

impl From<Environment> for EnvironmentConfig {
    fn from(environment: Environment) -> Self {
        Self::new(environment)
    }
}

/// Returns `development` in mock mode and `production` otherwise.
///
/// Both implementations are returned unchanged; nothing is cached, so the
/// same inputs always yield the same reference.
pub fn select_implementation<'a, T: ?Sized>(
    config: &EnvironmentConfig,
    production: &'a T,
    development: &'a T,
) -> &'a T {
    if config.mock_backend() {
        development
    } else {
        production
    }
}

/// Owns a production and a development implementation of one service.
///
/// This is the injectable form of [`select_implementation`]: construct it
/// where both implementations are known and pass [`resolve`](Self::resolve)'s
/// result to consumers.
#[derive(Debug, Clone, Default)]
pub struct EnvironmentExport<T> {
    production: T,
    development: T,
}

impl<T> EnvironmentExport<T> {
    pub fn new(production: T, development: T) -> Self {
        Self {
            production,
            development,
        }
    }

    /// Returns the implementation for the given configuration.
    pub fn resolve(&self, config: &EnvironmentConfig) -> &T {
        select_implementation(config, &self.production, &self.development)
    }

    pub fn production(&self) -> &T {
        &self.production
    }

    pub fn development(&self) -> &T {
        &self.development
    }

    /// Consumes the export, keeping only the implementation for `config`.
    pub fn into_resolved(self, config: &EnvironmentConfig) -> T {
        if config.mock_backend() {
            self.development
        } else {
            self.production
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    trait GraphService {
        fn describe(&self) -> String;
    }

    struct LiveGraph;
    struct MockGraph {
        fixtures: usize,
    }

    impl GraphService for LiveGraph {
        fn describe(&self) -> String {
            "live".to_string()
        }
    }

    impl GraphService for MockGraph {
        fn describe(&self) -> String {
            format!("mock with {} fixtures", self.fixtures)
        }
    }

    #[test]
    fn test_select_by_environment() {
        let live = LiveGraph;
        let mock = MockGraph { fixtures: 3 };

        let prod = EnvironmentConfig::new(Environment::Production);
        let dev = EnvironmentConfig::new(Environment::Development);

        let chosen = select_implementation::<dyn GraphService>(&prod, &live, &mock);
        assert_eq!(chosen.describe(), "live");

        let chosen = select_implementation::<dyn GraphService>(&dev, &live, &mock);
        assert_eq!(chosen.describe(), "mock with 3 fixtures");
    }

    #[test]
    fn test_default_selects_production() {
        let config = EnvironmentConfig::default();
        assert_eq!(config.environment, Environment::Production);
        assert!(!config.mock_backend());
        assert_eq!(*select_implementation(&config, &1, &2), 1);
    }

    #[test]
    fn test_select_is_idempotent() {
        let production = String::from("production");
        let development = String::from("development");

        for environment in [Environment::Production, Environment::Development] {
            let config = EnvironmentConfig::new(environment);
            let first = select_implementation(&config, &production, &development);
            let second = select_implementation(&config, &production, &development);
            assert!(std::ptr::eq(first, second));
        }
    }

    #[test]
    fn test_select_returns_unwrapped_reference() {
        let production = vec![1, 2, 3];
        let development = vec![4];
        let config = EnvironmentConfig::new(Environment::Development);
        let chosen = select_implementation(&config, production.as_slice(), development.as_slice());
        assert!(std::ptr::eq(chosen, development.as_slice()));
    }

    #[test]
    fn test_environment_export() {
        let export: EnvironmentExport<Box<dyn GraphService>> =
            EnvironmentExport::new(Box::new(LiveGraph), Box::new(MockGraph { fixtures: 0 }));

        let dev = EnvironmentConfig::new(Environment::Development);
        assert_eq!(export.resolve(&dev).describe(), "mock with 0 fixtures");
        assert_eq!(export.resolve(&EnvironmentConfig::default()).describe(), "live");
        assert!(std::ptr::eq(export.resolve(&dev), export.development()));

        let resolved = export.into_resolved(&dev);
        assert_eq!(resolved.describe(), "mock with 0 fixtures");
    }

    #[test]
    fn test_environment_from_str() {
        assert_eq!("production".parse::<Environment>(), Ok(Environment::Production));
        assert_eq!("PROD".parse::<Environment>(), Ok(Environment::Production));
        assert_eq!(" Development ".parse::<Environment>(), Ok(Environment::Development));
        assert_eq!("mock".parse::<Environment>(), Ok(Environment::Development));
        assert_eq!(
            "staging".parse::<Environment>(),
            Err(UnknownEnvironment("staging".to_string()))
        );
    }
}
