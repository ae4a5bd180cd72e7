//! The Graph Resource Identifier value type.
//!
//! A GRI names a resource in the remote object graph: an entity (type + id),
//! one of its aspects, and optionally an aspect id and an access scope.
//! On the wire it is a single string:
//!
//! ```text
//! <entityType>.<entityId|null>.<aspect>[,<aspectId>][:<scope>]
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::codec::{decode, encode_gri};
use crate::error::DecodeError;

/// Literal written in place of a missing entity id.
///
/// This is a real value on the wire, not an absence marker: a GRI built
/// without an entity id decodes back with `entity_id == "null"`.
pub const NULL_ENTITY_ID: &str = "null";

/// Separates entity type, entity id and aspect.
pub const ENTITY_SEPARATOR: char = '.';

/// Introduces the aspect id.
pub const ASPECT_ID_SEPARATOR: char = ',';

/// Introduces the scope.
pub const SCOPE_SEPARATOR: char = ':';

/// A decoded Graph Resource Identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Gri {
    /// Category of the resource (e.g. "provider", "user").
    pub entity_type: String,
    /// Entity instance id, or [`NULL_ENTITY_ID`].
    pub entity_id: String,
    /// Facet of the entity (e.g. "instance").
    pub aspect: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aspect_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
}

impl Gri {
    /// Creates a GRI without aspect id or scope.
    ///
    /// An absent or empty `entity_id` is replaced by [`NULL_ENTITY_ID`].
    pub fn new(
        entity_type: impl Into<String>,
        entity_id: Option<&str>,
        aspect: impl Into<String>,
    ) -> Self {
        Self {
            entity_type: entity_type.into(),
            entity_id: normalize_entity_id(entity_id).to_string(),
            aspect: aspect.into(),
            aspect_id: None,
            scope: None,
        }
    }

    /// Sets the aspect id.
    pub fn with_aspect_id(mut self, aspect_id: impl Into<String>) -> Self {
        self.aspect_id = Some(aspect_id.into());
        self
    }

    /// Sets the scope.
    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = Some(scope.into());
        self
    }

    /// Returns false when the entity id is the `"null"` sentinel.
    pub fn has_entity_id(&self) -> bool {
        self.entity_id != NULL_ENTITY_ID
    }

    /// Returns the scope as a [`Scope`] if it is one of the conventional values.
    pub fn scope_kind(&self) -> Option<Scope> {
        self.scope.as_deref().and_then(|s| s.parse().ok())
    }
}

impl fmt::Display for Gri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&encode_gri(self))
    }
}

impl FromStr for Gri {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode(s)
    }
}

/// Returns the entity id to write, substituting the sentinel when absent.
pub(crate) fn normalize_entity_id(entity_id: Option<&str>) -> &str {
    match entity_id {
        Some(id) if !id.is_empty() => id,
        _ => NULL_ENTITY_ID,
    }
}

/// Conventional access scopes.
///
/// [`Gri::scope`] accepts any string; this enum only names the values the
/// remote API is known to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    Private,
    Protected,
    Public,
    Auth,
}

impl Scope {
    /// Returns the wire spelling of this scope.
    pub fn as_str(&self) -> &'static str {
        match self {
            Scope::Private => "private",
            Scope::Protected => "protected",
            Scope::Public => "public",
            Scope::Auth => "auth",
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for a scope outside the conventional set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown scope: {0:?}")]
pub struct UnknownScope(pub String);

impl FromStr for Scope {
    type Err = UnknownScope;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "private" => Ok(Scope::Private),
            "protected" => Ok(Scope::Protected),
            "public" => Ok(Scope::Public),
            "auth" => Ok(Scope::Auth),
            other => Err(UnknownScope(other.to_string())),
        }
    }
}

impl From<Scope> for String {
    fn from(scope: Scope) -> Self {
        scope.as_str().to_string()
    }
}
