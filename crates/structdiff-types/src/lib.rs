//! Foundation types for structdiff.
//!
//! This crate provides the vocabulary used by the diff engine and its
//! callers. Values themselves are plain [`serde_json::Value`]s.
//!
//! # Key Types
//!
//! - [`ValueKind`] — Closed tag for a visited value, including "absent"
//! - [`PathSegment`] / [`DiffPath`] — Location of a divergence inside a value
//! - [`ChangeRecord`] — One reported divergence: path, before, after

pub mod kind;
pub mod path;
pub mod record;

pub use kind::ValueKind;
pub use path::{DiffPath, PathSegment};
pub use record::ChangeRecord;
