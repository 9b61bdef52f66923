//! Structural diff engine.
//!
//! Walks two mappings in parallel and reports every path where they diverge,
//! with the values found on each side. Sequences are compared either by
//! position (exact mode) or as sets of canonically hashed elements.
//!
//! # Key Types
//!
//! - [`StructuralDiffer`] / [`DiffOptions`] -- The differ and its configuration
//! - [`ChangeSet`] / [`ChangeRecord`] -- Ordered result of a diff
//! - [`DiffError`] -- Rejected inputs and parse failures
//!
//! ```
//! use serde_json::json;
//! use structdiff_engine::diff;
//!
//! let changes = diff(&json!({"x": {"y": 1, "z": 2}}), &json!({"x": {"y": 1, "z": 3}}), true)?;
//! assert_eq!(changes.len(), 1);
//! assert_eq!(changes.changes[0].path.to_pointer(), "/x/z");
//! # Ok::<(), structdiff_engine::DiffError>(())
//! ```

pub mod change_set;
pub mod differ;
pub mod error;
pub mod options;

pub use change_set::ChangeSet;
pub use differ::{diff, diff_json_str, StructuralDiffer};
pub use error::{DiffError, DiffResult, Side};
pub use options::DiffOptions;
pub use structdiff_types::{ChangeRecord, DiffPath, PathSegment, ValueKind};
