//! Structural validation for GRIs.
//!
//! Encoding is unchecked: any field text is written as-is. This module lets
//! callers opt in to rejecting fields the decoder could not split back out.
//! A GRI that passes [`validate_gri`] always survives an encode/decode
//! round trip unchanged.

use crate::error::{Segment, ValidationError};
use crate::model::{ASPECT_ID_SEPARATOR, ENTITY_SEPARATOR, Gri, SCOPE_SEPARATOR};

const ALL_SEPARATORS: &[char] = &[ENTITY_SEPARATOR, ASPECT_ID_SEPARATOR, SCOPE_SEPARATOR];

/// Validates every field of a GRI.
///
/// - entity type, entity id and aspect must be non-empty and contain none of `.`, `,`, `:`
/// - an aspect id, when present, must be non-empty and contain no `:`
/// - a scope, when present, must be non-empty
pub fn validate_gri(gri: &Gri) -> Result<(), ValidationError> {
    validate_segment(&gri.entity_type, Segment::EntityType, ALL_SEPARATORS)?;
    validate_segment(&gri.entity_id, Segment::EntityId, ALL_SEPARATORS)?;
    validate_segment(&gri.aspect, Segment::Aspect, ALL_SEPARATORS)?;
    if let Some(aspect_id) = &gri.aspect_id {
        validate_segment(aspect_id, Segment::AspectId, &[SCOPE_SEPARATOR])?;
    }
    if let Some(scope) = &gri.scope {
        validate_segment(scope, Segment::Scope, &[])?;
    }
    Ok(())
}

/// Validates a single field against the characters it may not hold.
pub fn validate_segment(
    value: &str,
    segment: Segment,
    reserved: &[char],
) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::EmptySegment { segment });
    }
    if let Some(c) = value.chars().find(|c| reserved.contains(c)) {
        return Err(ValidationError::ReservedChar {
            segment,
            value: value.to_string(),
            char: c,
        });
    }
    Ok(())
}
