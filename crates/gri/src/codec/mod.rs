//! String encoding/decoding for GRIs.
//!
//! Wire format:
//!
//! ```text
//! <entityType>.<entityId|null>.<aspect>[,<aspectId>][:<scope>]
//! ```

pub mod decode;
pub mod encode;

pub use decode::decode;
pub use encode::{encode, encode_gri};

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::model::Gri;
    use crate::validate::validate_gri;

    /// Field text with no separator characters, including the empty string.
    fn safe_field() -> impl Strategy<Value = String> {
        "[^.,:]{0,16}"
    }

    /// Field text the decoder requires to be non-empty.
    fn non_empty_field() -> impl Strategy<Value = String> {
        "[^.,:]{1,16}"
    }

    proptest! {
        #[test]
        fn encode_then_decode_returns_fields(
            entity_type in safe_field(),
            entity_id in proptest::option::of(safe_field()),
            aspect in safe_field(),
            scope in proptest::option::of(non_empty_field()),
        ) {
            let encoded = encode(&entity_type, entity_id.as_deref(), &aspect, scope.as_deref());
            let decoded = decode(&encoded).unwrap();

            let expected_id = match entity_id.as_deref() {
                Some(id) if !id.is_empty() => id,
                _ => "null",
            };
            prop_assert_eq!(decoded.entity_type, entity_type);
            prop_assert_eq!(decoded.entity_id, expected_id);
            prop_assert_eq!(decoded.aspect, aspect);
            prop_assert_eq!(decoded.aspect_id, None);
            prop_assert_eq!(decoded.scope, scope);
        }

        #[test]
        fn valid_gri_round_trips(
            entity_type in non_empty_field(),
            entity_id in non_empty_field(),
            aspect in non_empty_field(),
            aspect_id in proptest::option::of("[^:]{1,16}"),
            scope in proptest::option::of(".{1,16}"),
        ) {
            let gri = Gri {
                entity_type,
                entity_id,
                aspect,
                aspect_id,
                scope,
            };
            prop_assume!(validate_gri(&gri).is_ok());
            prop_assert_eq!(decode(&encode_gri(&gri)).unwrap(), gri);
        }

        #[test]
        fn decode_never_panics(input in ".{0,64}") {
            let _ = decode(&input);
        }

        #[test]
        fn decode_error_carries_input(input in "[^.]{0,32}") {
            let err = decode(&input).unwrap_err();
            prop_assert_eq!(err.value(), input.as_str());
        }
    }
}
