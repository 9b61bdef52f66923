use serde::{Deserialize, Serialize};

/// Configuration for a [`StructuralDiffer`](crate::StructuralDiffer).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiffOptions {
    /// Compare sequences by position. When `false`, sequences are compared
    /// as sets of structurally distinct elements.
    pub exact: bool,
    /// In exact mode, also visit indices past the end of the left sequence
    /// and report the right side's extra elements. Off by default: only the
    /// left sequence's indices are visited.
    pub compare_trailing_elements: bool,
}

impl Default for DiffOptions {
    fn default() -> Self {
        Self {
            exact: true,
            compare_trailing_elements: false,
        }
    }
}

impl DiffOptions {
    /// Order-sensitive, index-aligned sequence comparison.
    pub fn exact() -> Self {
        Self::default()
    }

    /// Order-insensitive sequence comparison by canonical content.
    pub fn unordered() -> Self {
        Self {
            exact: false,
            ..Default::default()
        }
    }

    pub fn with_trailing_elements(mut self, enabled: bool) -> Self {
        self.compare_trailing_elements = enabled;
        self
    }
}

impl From<bool> for DiffOptions {
    fn from(exact: bool) -> Self {
        Self {
            exact,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_exact_without_trailing() {
        let o = DiffOptions::default();
        assert!(o.exact);
        assert!(!o.compare_trailing_elements);
        assert_eq!(o, DiffOptions::exact());
    }

    #[test]
    fn from_mode_flag() {
        assert_eq!(DiffOptions::from(false), DiffOptions::unordered());
        assert_eq!(DiffOptions::from(true), DiffOptions::exact());
    }

    #[test]
    fn partial_config_fills_defaults() {
        let o: DiffOptions = serde_json::from_str(r#"{"compare_trailing_elements": true}"#).unwrap();
        assert!(o.exact);
        assert!(o.compare_trailing_elements);
    }
}
