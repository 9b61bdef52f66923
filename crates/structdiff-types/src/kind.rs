//! Value kinds resolved once per visited value.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The kind of a value visited during a diff.
///
/// `Absent` stands for a mapping key missing on one side, or a sequence index
/// past the end of the right-hand sequence. It never appears inside a value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    Absent,
    Null,
    Bool,
    Number,
    String,
    Sequence,
    Mapping,
}

impl ValueKind {
    /// Resolve the kind of a possibly-absent value.
    pub fn of(value: Option<&Value>) -> Self {
        match value {
            None => Self::Absent,
            Some(Value::Null) => Self::Null,
            Some(Value::Bool(_)) => Self::Bool,
            Some(Value::Number(_)) => Self::Number,
            Some(Value::String(_)) => Self::String,
            Some(Value::Array(_)) => Self::Sequence,
            Some(Value::Object(_)) => Self::Mapping,
        }
    }

    /// Returns `true` for kinds that are compared by value rather than by
    /// recursion.
    pub fn is_primitive(self) -> bool {
        !matches!(self, Self::Sequence | Self::Mapping | Self::Absent)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Absent => "absent",
            Self::Null => "null",
            Self::Bool => "bool",
            Self::Number => "number",
            Self::String => "string",
            Self::Sequence => "sequence",
            Self::Mapping => "mapping",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
