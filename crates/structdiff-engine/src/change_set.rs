use serde::{Deserialize, Serialize};
use structdiff_types::{ChangeRecord, DiffPath};

/// The ordered result of comparing two values.
///
/// Records appear in traversal order. A path repeats only when a set-mode
/// sequence has several independent insertions or deletions.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChangeSet {
    /// The list of change records.
    pub changes: Vec<ChangeRecord>,
}

impl ChangeSet {
    /// Create an empty change set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the two values did not diverge.
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.changes.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ChangeRecord> {
        self.changes.iter()
    }

    /// Paths of all records, in order.
    pub fn paths(&self) -> impl Iterator<Item = &DiffPath> {
        self.changes.iter().map(|c| &c.path)
    }

    /// Records reported at exactly `path`.
    pub fn at<'a>(&'a self, path: &'a DiffPath) -> impl Iterator<Item = &'a ChangeRecord> {
        self.changes.iter().filter(move |c| c.path == *path)
    }

    /// The same change set with `before` and `after` swapped in every record.
    pub fn inverted(&self) -> Self {
        Self {
            changes: self.changes.iter().map(ChangeRecord::inverted).collect(),
        }
    }

    pub fn into_records(self) -> Vec<ChangeRecord> {
        self.changes
    }
}

impl From<Vec<ChangeRecord>> for ChangeSet {
    fn from(changes: Vec<ChangeRecord>) -> Self {
        Self { changes }
    }
}

impl IntoIterator for ChangeSet {
    type Item = ChangeRecord;
    type IntoIter = std::vec::IntoIter<ChangeRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.changes.into_iter()
    }
}

impl<'a> IntoIterator for &'a ChangeSet {
    type Item = &'a ChangeRecord;
    type IntoIter = std::slice::Iter<'a, ChangeRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.changes.iter()
    }
}
