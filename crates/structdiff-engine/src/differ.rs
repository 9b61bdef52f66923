//! The recursive structural differ.
//!
//! Traversal is depth-first. A single [`DiffPath`] serves as the path stack
//! and a single record vector as the accumulator; every descent pushes one
//! segment and pops it before returning.

use std::collections::HashSet;

use serde_json::{Map, Value};
use structdiff_canon::{numbers_equal, Fingerprint};
use structdiff_types::{ChangeRecord, DiffPath, PathSegment, ValueKind};
use tracing::{debug, trace};

use crate::change_set::ChangeSet;
use crate::error::{DiffError, DiffResult, Side};
use crate::options::DiffOptions;

/// Compares two mappings and reports where they diverge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StructuralDiffer {
    options: DiffOptions,
}

impl StructuralDiffer {
    pub fn new(options: DiffOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &DiffOptions {
        &self.options
    }

    /// Diff two root values.
    ///
    /// Both roots must be mappings; otherwise the call fails with
    /// [`DiffError::InvalidInputKind`] before anything is compared. The left
    /// side is checked first.
    pub fn diff(&self, left: &Value, right: &Value) -> DiffResult<ChangeSet> {
        let left = root_mapping(left, Side::Left)?;
        let right = root_mapping(right, Side::Right)?;
        Ok(self.diff_maps(left, right))
    }

    /// Diff two mappings directly.
    pub fn diff_maps(&self, left: &Map<String, Value>, right: &Map<String, Value>) -> ChangeSet {
        debug!(
            exact = self.options.exact,
            left_keys = left.len(),
            right_keys = right.len(),
            "structural diff started"
        );

        let mut walk = Walk {
            options: self.options,
            path: DiffPath::root(),
            changes: Vec::new(),
        };
        walk.mappings(left, right);

        debug!(changes = walk.changes.len(), "structural diff complete");
        ChangeSet::from(walk.changes)
    }
}

/// Diff two root mappings, comparing sequences by position when `exact` is
/// set and as sets otherwise.
pub fn diff(left: &Value, right: &Value, exact: bool) -> DiffResult<ChangeSet> {
    StructuralDiffer::new(DiffOptions::from(exact)).diff(left, right)
}

/// Parse two JSON documents and diff them.
pub fn diff_json_str(left: &str, right: &str, exact: bool) -> DiffResult<ChangeSet> {
    let left: Value =
        serde_json::from_str(left).map_err(|e| DiffError::Serialization(e.to_string()))?;
    let right: Value =
        serde_json::from_str(right).map_err(|e| DiffError::Serialization(e.to_string()))?;
    diff(&left, &right, exact)
}

fn root_mapping(value: &Value, side: Side) -> DiffResult<&Map<String, Value>> {
    match value {
        Value::Object(map) => Ok(map),
        other => {
            let actual = ValueKind::of(Some(other));
            debug!(%side, %actual, "rejected non-mapping diff input");
            Err(DiffError::InvalidInputKind { side, actual })
        }
    }
}

/// Per-call traversal state: current path and accumulated records.
struct Walk {
    options: DiffOptions,
    path: DiffPath,
    changes: Vec<ChangeRecord>,
}

impl Walk {
    fn emit(&mut self, before: Option<&Value>, after: Option<&Value>) {
        self.changes
            .push(ChangeRecord::new(self.path.clone(), before, after));
    }

    fn descend(&mut self, segment: PathSegment, a: Option<&Value>, b: Option<&Value>) {
        self.path.push(segment);
        self.values(a, b);
        self.path.pop();
    }

    fn values(&mut self, a: Option<&Value>, b: Option<&Value>) {
        if ValueKind::of(a) != ValueKind::of(b) {
            self.emit(a, b);
            return;
        }

        match (a, b) {
            (Some(Value::Array(x)), Some(Value::Array(y))) => self.sequences(x, y),
            (Some(Value::Object(x)), Some(Value::Object(y))) => self.mappings(x, y),
            (Some(x), Some(y)) => {
                if !primitives_equal(x, y) {
                    self.emit(a, b);
                }
            }
            // Same kind, so both sides are absent.
            _ => {}
        }
    }

    fn mappings(&mut self, a: &Map<String, Value>, b: &Map<String, Value>) {
        for (key, av) in a {
            self.descend(PathSegment::from(key.as_str()), Some(av), b.get(key));
        }
        for (key, bv) in b.iter().filter(|(key, _)| !a.contains_key(*key)) {
            self.descend(PathSegment::from(key.as_str()), None, Some(bv));
        }
    }

    fn sequences(&mut self, a: &[Value], b: &[Value]) {
        if self.options.exact {
            for (i, av) in a.iter().enumerate() {
                self.descend(PathSegment::Index(i), Some(av), b.get(i));
            }
            if self.options.compare_trailing_elements {
                for (i, bv) in b.iter().enumerate().skip(a.len()) {
                    self.descend(PathSegment::Index(i), None, Some(bv));
                }
            }
            return;
        }

        let before = ElementSet::build(a);
        let after = ElementSet::build(b);
        let removed = before.difference(&after);
        let added = after.difference(&before);
        trace!(
            path = %self.path,
            left_distinct = before.len(),
            right_distinct = after.len(),
            removed = removed.len(),
            added = added.len(),
            "set-mode sequence compared"
        );

        for element in removed {
            self.emit(Some(element), None);
        }
        for element in added {
            self.emit(None, Some(element));
        }
    }
}

fn primitives_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => numbers_equal(x, y),
        _ => a == b,
    }
}

/// Structurally distinct elements of a sequence, in first-occurrence order.
/// Each fingerprint keeps the first element that produced it.
struct ElementSet<'v> {
    entries: Vec<(Fingerprint, &'v Value)>,
    seen: HashSet<Fingerprint>,
}

impl<'v> ElementSet<'v> {
    fn build(items: &'v [Value]) -> Self {
        let mut set = Self {
            entries: Vec::new(),
            seen: HashSet::new(),
        };
        for item in items {
            let fp = Fingerprint::of(item);
            if set.seen.insert(fp) {
                set.entries.push((fp, item));
            }
        }
        set
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    /// Elements of `self` whose fingerprint is absent from `other`.
    fn difference(&self, other: &ElementSet<'_>) -> Vec<&'v Value> {
        self.entries
            .iter()
            .filter(|(fp, _)| !other.seen.contains(fp))
            .map(|(_, value)| *value)
            .collect()
    }
}
