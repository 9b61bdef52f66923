//! Change records reported by a diff.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::path::DiffPath;

/// One divergence between two values.
///
/// An absent side is reported as `null`, so `null` in `before` or `after` can
/// mean either "explicit null" or "missing".
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChangeRecord {
    pub path: DiffPath,
    pub before: Value,
    pub after: Value,
}

impl ChangeRecord {
    /// Build a record from possibly-absent sides, normalizing absence to `null`.
    pub fn new(path: DiffPath, before: Option<&Value>, after: Option<&Value>) -> Self {
        Self {
            path,
            before: before.cloned().unwrap_or(Value::Null),
            after: after.cloned().unwrap_or(Value::Null),
        }
    }

    /// The same divergence seen from the other direction.
    pub fn inverted(&self) -> Self {
        Self {
            path: self.path.clone(),
            before: self.after.clone(),
            after: self.before.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path;
    use serde_json::json;

    #[test]
    fn absent_sides_become_null() {
        let record = ChangeRecord::new(path!["x"], Some(&json!(1)), None);
        assert_eq!(record.before, json!(1));
        assert_eq!(record.after, Value::Null);
    }

    #[test]
    fn inverted_swaps_sides() {
        let record = ChangeRecord::new(path!["x", "z"], Some(&json!(2)), Some(&json!(3)));
        let inv = record.inverted();
        assert_eq!(inv.path, record.path);
        assert_eq!(inv.before, json!(3));
        assert_eq!(inv.after, json!(2));
        assert_eq!(inv.inverted(), record);
    }

    #[test]
    fn serialized_shape() {
        let record = ChangeRecord::new(path!["list", 1usize], None, Some(&json!({"a": true})));
        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            json!({"path": ["list", 1], "before": null, "after": {"a": true}})
        );
    }
}
