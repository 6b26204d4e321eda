//! Resolve a package request to its on-disk path.

use std::path::PathBuf;

use miette::Result;

use lingo_core::config::DataDir;

/// Resolve `name` against the data directory and return the winning path.
///
/// Unlike the underlying resolver, "no match" is an error here so the CLI
/// exits nonzero; the message distinguishes a missing directory from a
/// constraint nothing satisfies.
pub fn cmd_which(data_dir: &DataDir, name: &str, constraint: &str) -> Result<PathBuf> {
    let resolved = lingo_resolver::resolver::resolve(name, constraint, Some(data_dir.root()))?;
    match resolved {
        Some(path) => Ok(path),
        None => {
            let message = if !data_dir.exists() {
                format!(
                    "Data directory {} does not exist",
                    data_dir.root().display()
                )
            } else if constraint.trim().is_empty() {
                format!(
                    "No package '{name}' installed under {}",
                    data_dir.root().display()
                )
            } else {
                format!(
                    "No package '{name}' matching '{constraint}' under {}",
                    data_dir.root().display()
                )
            };
            Err(lingo_util::errors::LingoError::NotFound { message }.into())
        }
    }
}
