use std::path::Path;

use lingo_util::errors::LingoError;

/// Load a package's `meta.json` without interpreting its contents.
///
/// Returns `Ok(None)` when the package directory has no `meta.json`. The
/// payload is handed back as raw JSON for callers to display or inspect;
/// which keys mean what is a concern of the tools that ship the packages.
pub fn read_meta(package_dir: &Path) -> miette::Result<Option<serde_json::Value>> {
    let location = package_dir.join("meta.json");
    if !location.is_file() {
        return Ok(None);
    }
    let content = std::fs::read_to_string(&location).map_err(|e| LingoError::Meta {
        message: format!("Failed to read {}: {e}", location.display()),
    })?;
    let meta = serde_json::from_str(&content).map_err(|e| LingoError::Meta {
        message: format!("Failed to parse {}: {e}", location.display()),
    })?;
    Ok(Some(meta))
}
