//! GRI encoding.
//!
//! Encoding never fails and performs no character validation: fields that
//! contain separator characters produce strings the decoder cannot invert.
//! Use [`validate_gri`](crate::validate_gri) first when inputs are untrusted.

use crate::model::gri::normalize_entity_id;
use crate::model::{ASPECT_ID_SEPARATOR, ENTITY_SEPARATOR, Gri, SCOPE_SEPARATOR};

/// Encodes identifier fields into a GRI string.
///
/// An absent or empty `entity_id` is written as `"null"`. The scope suffix is
/// only appended when `scope` is present and non-empty.
///
/// ```rust
/// use gri::encode;
///
/// assert_eq!(encode("oneentity", Some("oneid"), "oneaspect", None), "oneentity.oneid.oneaspect");
/// assert_eq!(encode("user", None, "instance", Some("protected")), "user.null.instance:protected");
/// ```
pub fn encode(
    entity_type: &str,
    entity_id: Option<&str>,
    aspect: &str,
    scope: Option<&str>,
) -> String {
    write_gri(entity_type, entity_id, aspect, None, scope)
}

/// Encodes a [`Gri`], including its aspect id when present.
pub fn encode_gri(gri: &Gri) -> String {
    write_gri(
        &gri.entity_type,
        Some(&gri.entity_id),
        &gri.aspect,
        gri.aspect_id.as_deref(),
        gri.scope.as_deref(),
    )
}

fn write_gri(
    entity_type: &str,
    entity_id: Option<&str>,
    aspect: &str,
    aspect_id: Option<&str>,
    scope: Option<&str>,
) -> String {
    let entity_id = normalize_entity_id(entity_id);
    let aspect_id = aspect_id.filter(|s| !s.is_empty());
    let scope = scope.filter(|s| !s.is_empty());

    let len = entity_type.len()
        + entity_id.len()
        + aspect.len()
        + 2
        + aspect_id.map_or(0, |s| s.len() + 1)
        + scope.map_or(0, |s| s.len() + 1);

    let mut out = String::with_capacity(len);
    out.push_str(entity_type);
    out.push(ENTITY_SEPARATOR);
    out.push_str(entity_id);
    out.push(ENTITY_SEPARATOR);
    out.push_str(aspect);
    if let Some(aspect_id) = aspect_id {
        out.push(ASPECT_ID_SEPARATOR);
        out.push_str(aspect_id);
    }
    if let Some(scope) = scope {
        out.push(SCOPE_SEPARATOR);
        out.push_str(scope);
    }
    out
}
