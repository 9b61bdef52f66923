//! Canonical serialization.
//!
//! The canonical form of a value has every mapping's keys in sorted order and
//! every number in the single representation chosen by [`canonical_number`].
//! Nothing else is normalized.

use serde_json::{Map, Number, Value};

/// Largest integer magnitude an `f64` represents exactly (2^53 - 1).
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Rebuild `value` in canonical form.
pub fn canonicalize(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<(&String, &Value)> = map.iter().collect();
            entries.sort_by(|a, b| a.0.cmp(b.0));

            let mut out = Map::with_capacity(entries.len());
            for (key, child) in entries {
                out.insert(key.clone(), canonicalize(child));
            }
            Value::Object(out)
        }
        Value::Array(items) => Value::Array(items.iter().map(canonicalize).collect()),
        Value::Number(n) => Value::Number(canonical_number(n)),
        other => other.clone(),
    }
}

/// Compact JSON text of the canonical form of `value`.
pub fn canonical_string(value: &Value) -> String {
    canonicalize(value).to_string()
}

/// Normalize a number to one representation per numeric value.
///
/// Integral values inside the safe range become integers (`1.0` and `-0.0`
/// become `1` and `0`); everything else becomes its `f64` form, so a `u64`
/// past 2^53 and the float it rounds to are the same number.
pub fn canonical_number(n: &Number) -> Number {
    let Some(f) = n.as_f64() else {
        return n.clone();
    };
    if f.fract() == 0.0 && f.abs() <= MAX_SAFE_INTEGER {
        Number::from(f as i64)
    } else {
        Number::from_f64(f).unwrap_or_else(|| n.clone())
    }
}

/// Numeric equality under the canonical normalization.
pub fn numbers_equal(a: &Number, b: &Number) -> bool {
    canonical_number(a) == canonical_number(b)
}
