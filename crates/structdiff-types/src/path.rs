//! Paths locating a divergence inside a value.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One step of a path: a mapping key or a sequence index.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PathSegment {
    Index(usize),
    Key(String),
}

impl From<&str> for PathSegment {
    fn from(key: &str) -> Self {
        Self::Key(key.to_string())
    }
}

impl From<String> for PathSegment {
    fn from(key: String) -> Self {
        Self::Key(key)
    }
}

impl From<usize> for PathSegment {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

impl fmt::Display for PathSegment {
    /// Writes the segment as a JSON Pointer reference token.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(i) => write!(f, "{i}"),
            Self::Key(k) => f.write_str(&k.replace('~', "~0").replace('/', "~1")),
        }
    }
}

/// An ordered list of segments from the root to a divergence.
///
/// During traversal the differ uses a single `DiffPath` as a stack, pushing a
/// segment before each descent and popping it afterwards; emitted records
/// carry a snapshot.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DiffPath(Vec<PathSegment>);

impl DiffPath {
    /// The empty (root) path.
    pub fn root() -> Self {
        Self::default()
    }

    pub fn push(&mut self, segment: impl Into<PathSegment>) {
        self.0.push(segment.into());
    }

    pub fn pop(&mut self) -> Option<PathSegment> {
        self.0.pop()
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Render the path as an RFC 6901 JSON Pointer.
    pub fn to_pointer(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for DiffPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.0 {
            write!(f, "/{segment}")?;
        }
        Ok(())
    }
}

impl From<Vec<PathSegment>> for DiffPath {
    fn from(segments: Vec<PathSegment>) -> Self {
        Self(segments)
    }
}

impl FromIterator<PathSegment> for DiffPath {
    fn from_iter<I: IntoIterator<Item = PathSegment>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Build a [`DiffPath`] from a mix of keys and indices.
///
/// ```
/// use structdiff_types::{path, PathSegment};
///
/// let p = path!["items", 0usize, "name"];
/// assert_eq!(p.segments()[1], PathSegment::Index(0));
/// assert_eq!(p.to_pointer(), "/items/0/name");
/// ```
#[macro_export]
macro_rules! path {
    () => { $crate::DiffPath::root() };
    ($($seg:expr),+ $(,)?) => {
        $crate::DiffPath::from(vec![$($crate::PathSegment::from($seg)),+])
    };
}
