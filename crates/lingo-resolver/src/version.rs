//! Version-tuple parsing, ordering, and display.
//!
//! Data-package versions are dot-separated unsigned components of any
//! length (`1`, `1.2`, `1.2.0.4`). Ordering is plain tuple ordering:
//! components compare left to right, and on an equal prefix the longer
//! tuple wins, so `1.2.0 > 1.2` and the two are not equal.

use std::fmt;

/// A parsed version: one unsigned component per dot-separated group.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VersionTuple(Vec<u64>);

impl VersionTuple {
    /// Parse a version string into its numeric tuple.
    ///
    /// Returns `None` when the string has no tuple form: it is empty, or
    /// any dot-separated group fails to parse as an unsigned integer.
    pub fn parse(version: &str) -> Option<Self> {
        if version.is_empty() {
            return None;
        }
        version
            .split('.')
            .map(|group| group.parse::<u64>().ok())
            .collect::<Option<Vec<u64>>>()
            .map(Self)
    }

    /// Returns the numeric components, most significant first.
    pub fn components(&self) -> &[u64] {
        &self.0
    }
}

impl fmt::Display for VersionTuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let groups: Vec<String> = self.0.iter().map(u64::to_string).collect();
        f.write_str(&groups.join("."))
    }
}
