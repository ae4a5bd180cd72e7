//! GRI: Graph Resource Identifiers for a remote object-graph API.
//!
//! A GRI is the opaque string key under which the graph API addresses a
//! resource: an entity, one of its aspects, and an optional access scope.
//!
//! # Quick Start
//!
//! ```rust
//! use gri::{decode, encode, Gri, Scope};
//!
//! let value = encode("user", None, "instance", Some("protected"));
//! assert_eq!(value, "user.null.instance:protected");
//!
//! let gri = decode("provider.abcdef.instance:private").unwrap();
//! assert_eq!(gri.entity_id, "abcdef");
//! assert_eq!(gri.scope_kind(), Some(Scope::Private));
//!
//! let members = Gri::new("space", Some("s1"), "user").with_aspect_id("u1");
//! assert_eq!(members.to_string(), "space.s1.user,u1");
//! ```
//!
//! # Modules
//!
//! - [`model`]: The [`Gri`] value, [`Scope`] and [`GriBuilder`]
//! - [`codec`]: String encoding/decoding
//! - [`validate`]: Opt-in structural validation
//! - [`environment`]: Production/development implementation selection
//! - [`config`]: Loading the environment from TOML and the process environment
//! - [`error`]: Error types
//!
//! # Wire Format
//!
//! ```text
//! <entityType>.<entityId|null>.<aspect>[,<aspectId>][:<scope>]
//! ```
//!
//! Encoding does not escape separators. Fields containing `.`, `,` or `:`
//! produce strings that decode differently; see [`validate_gri`].

pub mod codec;
pub mod config;
pub mod environment;
pub mod error;
pub mod model;
pub mod validate;

// Re-export commonly used types at crate root
pub use codec::{decode, encode, encode_gri};
pub use config::ENVIRONMENT_VAR;
pub use environment::{
    Environment, EnvironmentConfig, EnvironmentExport, UnknownEnvironment, select_implementation,
};
pub use error::{BuildError, ConfigError, DecodeError, ErrorCode, Segment, ValidationError};
pub use model::{Gri, GriBuilder, NULL_ENTITY_ID, Scope, UnknownScope};
pub use validate::{validate_gri, validate_segment};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
