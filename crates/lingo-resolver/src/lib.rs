//! Data-package resolution engine: version-tuple ordering, constraint
//! parsing and matching, and best-match selection over a data directory.

pub mod constraint;
pub mod resolver;
pub mod version;
