//! Data model types for GRIs.
//!
//! - [`Gri`]: the decoded identifier
//! - [`Scope`]: conventional access scopes
//! - [`GriBuilder`]: field-by-field construction

pub mod builder;
pub mod gri;

pub use builder::GriBuilder;
pub use gri::{
    ASPECT_ID_SEPARATOR, ENTITY_SEPARATOR, Gri, NULL_ENTITY_ID, SCOPE_SEPARATOR, Scope,
    UnknownScope,
};
