use std::fmt;
use std::path::{Path, PathBuf};

/// Split a data-package directory name into `(logical name, version)`.
///
/// The split happens at the first `-`, so `"en_core-1.2.0"` becomes
/// `("en_core", "1.2.0")` and `"my-pkg-1.0"` becomes `("my", "pkg-1.0")`.
/// A name with no separator keeps an empty version. Never fails.
pub fn split_data_name(name: &str) -> (&str, &str) {
    match name.split_once('-') {
        Some((logical, version)) => (logical, version),
        None => (name, ""),
    }
}

/// The language code of a logical package name: its leading run of ASCII
/// alphanumerics, so `"en_core"` yields `"en"` and `"de"` yields `"de"`.
pub fn language_code(name: &str) -> &str {
    let end = name
        .find(|c: char| !c.is_ascii_alphanumeric())
        .unwrap_or(name.len());
    &name[..end]
}

/// One immediate child of the data directory, viewed as a package entry.
///
/// Entries are purely name-derived: nothing is read from inside the path,
/// and the version is kept verbatim (it may be empty or non-numeric).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageEntry {
    pub name: String,
    pub version: String,
    pub path: PathBuf,
}

impl PackageEntry {
    /// Build an entry from an on-disk path by splitting its file name.
    ///
    /// Returns `None` for paths without a UTF-8 file name.
    pub fn from_path(path: &Path) -> Option<Self> {
        let file_name = path.file_name()?.to_str()?;
        let (name, version) = split_data_name(file_name);
        Some(Self {
            name: name.to_string(),
            version: version.to_string(),
            path: path.to_path_buf(),
        })
    }

    /// Returns the language code of this entry's logical name.
    pub fn language(&self) -> &str {
        language_code(&self.name)
    }
}

impl fmt::Display for PackageEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.version.is_empty() {
            f.write_str(&self.name)
        } else {
            write!(f, "{}-{}", self.name, self.version)
        }
    }
}
