//! Builder API for ergonomic GRI construction.
//!
//! # Example
//!
//! ```rust
//! use gri::{GriBuilder, Scope};
//!
//! let gri = GriBuilder::new()
//!     .entity_type("space")
//!     .entity_id("s1")
//!     .aspect("user")
//!     .aspect_id("u1")
//!     .scope(Scope::Private)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(gri.to_string(), "space.s1.user,u1:private");
//! ```

use crate::error::{BuildError, Segment};
use crate::model::gri::{Gri, normalize_entity_id};

/// Builder for constructing a [`Gri`] field by field.
#[derive(Debug, Clone, Default)]
pub struct GriBuilder {
    entity_type: Option<String>,
    entity_id: Option<String>,
    aspect: Option<String>,
    aspect_id: Option<String>,
    scope: Option<String>,
}

impl GriBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a builder from an existing GRI.
    pub fn from_gri(gri: Gri) -> Self {
        Self {
            entity_type: Some(gri.entity_type),
            entity_id: Some(gri.entity_id),
            aspect: Some(gri.aspect),
            aspect_id: gri.aspect_id,
            scope: gri.scope,
        }
    }

    pub fn entity_type(mut self, entity_type: impl Into<String>) -> Self {
        self.entity_type = Some(entity_type.into());
        self
    }

    pub fn entity_id(mut self, entity_id: impl Into<String>) -> Self {
        self.entity_id = Some(entity_id.into());
        self
    }

    pub fn aspect(mut self, aspect: impl Into<String>) -> Self {
        self.aspect = Some(aspect.into());
        self
    }

    pub fn aspect_id(mut self, aspect_id: impl Into<String>) -> Self {
        self.aspect_id = Some(aspect_id.into());
        self
    }

    pub fn scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = Some(scope.into());
        self
    }

    /// Clears the scope.
    pub fn no_scope(mut self) -> Self {
        self.scope = None;
        self
    }

    /// Builds the GRI.
    ///
    /// Entity type and aspect are required. A missing or empty entity id
    /// becomes the `"null"` sentinel; empty aspect id and scope are dropped.
    pub fn build(self) -> Result<Gri, BuildError> {
        let entity_type = self
            .entity_type
            .filter(|s| !s.is_empty())
            .ok_or(BuildError::MissingField {
                segment: Segment::EntityType,
            })?;
        let aspect = self
            .aspect
            .filter(|s| !s.is_empty())
            .ok_or(BuildError::MissingField {
                segment: Segment::Aspect,
            })?;

        Ok(Gri {
            entity_type,
            entity_id: normalize_entity_id(self.entity_id.as_deref()).to_string(),
            aspect,
            aspect_id: self.aspect_id.filter(|s| !s.is_empty()),
            scope: self.scope.filter(|s| !s.is_empty()),
        })
    }
}
