//! Canonical forms for structdiff values.
//!
//! Provides a key-order independent canonical serialization of
//! [`serde_json::Value`]s and BLAKE3 fingerprints over it. Structurally equal
//! values always canonicalize to the same text, which is what lets set-mode
//! sequence comparison treat elements as a set.

pub mod canonical;
pub mod fingerprint;

pub use canonical::{canonical_number, canonical_string, canonicalize, numbers_equal};
pub use fingerprint::Fingerprint;
