//! GRI decoding.
//!
//! Field boundaries, in order:
//!
//! 1. `entityType` runs up to the first `.`
//! 2. `entityId` runs up to the next `.`
//! 3. `aspect` runs up to the first `,` or `:` (it may contain `.`)
//! 4. after a `,`, `aspectId` runs up to the first `:`
//! 5. after a `:`, `scope` is the whole remainder
//!
//! Entity type and aspect are positional and may be empty, matching what
//! [`encode`](crate::encode) writes for empty inputs. The entity id, aspect id
//! and scope must be non-empty when present: the encoder never writes them
//! empty.

use crate::error::{DecodeError, Segment};
use crate::model::{ASPECT_ID_SEPARATOR, ENTITY_SEPARATOR, Gri, SCOPE_SEPARATOR};

/// Cursor over a GRI string.
///
/// All separators are ASCII, so byte offsets returned by `find` are always
/// on char boundaries.
#[derive(Debug, Clone)]
struct Reader<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Reader<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn remaining(&self) -> &'a str {
        &self.input[self.pos..]
    }

    /// Reads up to (not including) the first of `stops`, or to the end.
    fn read_until(&mut self, stops: &[char]) -> &'a str {
        let rest = self.remaining();
        let end = rest.find(stops).unwrap_or(rest.len());
        self.pos += end;
        &rest[..end]
    }

    /// Reads everything left.
    fn read_rest(&mut self) -> &'a str {
        let rest = self.remaining();
        self.pos = self.input.len();
        rest
    }

    /// Consumes `c` if it is the next char.
    fn eat(&mut self, c: char) -> bool {
        if self.remaining().starts_with(c) {
            self.pos += c.len_utf8();
            true
        } else {
            false
        }
    }

    fn missing_separator(&self, segment: Segment) -> DecodeError {
        DecodeError::MissingSeparator {
            value: self.input.to_string(),
            segment,
        }
    }

    fn non_empty(&self, field: &'a str, segment: Segment) -> Result<&'a str, DecodeError> {
        if field.is_empty() {
            Err(DecodeError::EmptySegment {
                value: self.input.to_string(),
                segment,
            })
        } else {
            Ok(field)
        }
    }
}

/// Decodes a GRI string into its fields.
///
/// ```rust
/// use gri::decode;
///
/// let gri = decode("provider.abcdef.instance:private").unwrap();
/// assert_eq!(gri.entity_type, "provider");
/// assert_eq!(gri.entity_id, "abcdef");
/// assert_eq!(gri.aspect, "instance");
/// assert_eq!(gri.scope.as_deref(), Some("private"));
///
/// assert!(decode("nodots").is_err());
/// ```
pub fn decode(value: &str) -> Result<Gri, DecodeError> {
    let mut reader = Reader::new(value);

    let entity_type = reader.read_until(&[ENTITY_SEPARATOR]);
    if !reader.eat(ENTITY_SEPARATOR) {
        return Err(reader.missing_separator(Segment::EntityType));
    }

    let entity_id = reader.read_until(&[ENTITY_SEPARATOR]);
    if !reader.eat(ENTITY_SEPARATOR) {
        return Err(reader.missing_separator(Segment::EntityId));
    }
    let entity_id = reader.non_empty(entity_id, Segment::EntityId)?;

    let aspect = reader.read_until(&[ASPECT_ID_SEPARATOR, SCOPE_SEPARATOR]);

    let aspect_id = if reader.eat(ASPECT_ID_SEPARATOR) {
        let aspect_id = reader.read_until(&[SCOPE_SEPARATOR]);
        Some(reader.non_empty(aspect_id, Segment::AspectId)?)
    } else {
        None
    };

    let scope = if reader.eat(SCOPE_SEPARATOR) {
        let scope = reader.read_rest();
        Some(reader.non_empty(scope, Segment::Scope)?)
    } else {
        None
    };

    Ok(Gri {
        entity_type: entity_type.to_string(),
        entity_id: entity_id.to_string(),
        aspect: aspect.to_string(),
        aspect_id: aspect_id.map(str::to_string),
        scope: scope.map(str::to_string),
    })
}
