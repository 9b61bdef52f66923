//! Content fingerprints of values.

use serde_json::Value;

use crate::canonical::canonical_string;

/// BLAKE3 digest of a value's canonical text.
///
/// Structurally equal values share a fingerprint, so it stands in for the
/// value wherever only equality matters. The digest is opaque: it is compared
/// and hashed, never decoded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Fingerprint(blake3::Hash);

impl Fingerprint {
    pub fn of(value: &Value) -> Self {
        Self(blake3::hash(canonical_string(value).as_bytes()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn equal_structures_share_a_fingerprint() {
        let a: Value = serde_json::from_str(r#"{"b": [1, 2.0], "a": {"y": null, "x": "s"}}"#).unwrap();
        let b: Value = serde_json::from_str(r#"{"a": {"x": "s", "y": null}, "b": [1, 2]}"#).unwrap();
        assert_eq!(Fingerprint::of(&a), Fingerprint::of(&b));
    }

    #[test]
    fn different_structures_differ() {
        assert_ne!(Fingerprint::of(&json!([1, 2])), Fingerprint::of(&json!([2, 1])));
        assert_ne!(Fingerprint::of(&json!({"a": 1})), Fingerprint::of(&json!({"a": "1"})));
        assert_ne!(Fingerprint::of(&json!(null)), Fingerprint::of(&json!({})));
    }

    #[test]
    fn large_integers_match_their_float_form() {
        assert_eq!(
            Fingerprint::of(&json!([u64::MAX])),
            Fingerprint::of(&json!([u64::MAX as f64]))
        );
    }
}
