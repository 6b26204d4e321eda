use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use lingo_util::errors::LingoError;

/// Global user configuration loaded from `~/.lingo/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GlobalConfig {
    #[serde(default)]
    pub data: DataConfig,
}

/// Data-directory settings from `[data]` in the global config.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DataConfig {
    /// Directory holding installed data packages. A leading `~/` is
    /// expanded to the user's home directory.
    #[serde(default)]
    pub dir: Option<String>,
}

impl GlobalConfig {
    /// Load the global configuration from `~/.lingo/config.toml`, or return
    /// defaults if the file doesn't exist.
    pub fn load() -> miette::Result<Self> {
        Self::load_from(&Self::default_path())
    }

    /// Load a configuration file from an explicit path, or return defaults
    /// if there is no file there.
    pub fn load_from(path: &Path) -> miette::Result<Self> {
        if path.is_file() {
            let content = std::fs::read_to_string(path).map_err(|e| LingoError::Config {
                message: format!("Failed to read {}: {e}", path.display()),
            })?;
            toml::from_str(&content).map_err(|e| {
                LingoError::Config {
                    message: format!("Failed to parse {}: {e}", path.display()),
                }
                .into()
            })
        } else {
            Ok(Self::default())
        }
    }

    /// Returns the default path to the global config file.
    pub fn default_path() -> PathBuf {
        home_dir().join("config.toml")
    }
}

/// Returns the path to the lingo home directory (`~/.lingo/`).
pub fn home_dir() -> PathBuf {
    user_home().join(".lingo")
}

/// Expand a leading `~/` to the user's home directory; other paths pass
/// through untouched.
pub fn expand_home(path: &str) -> PathBuf {
    match path.strip_prefix("~/") {
        Some(rest) => user_home().join(rest),
        None => PathBuf::from(path),
    }
}

fn user_home() -> PathBuf {
    std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("."))
}

/// The directory data packages are resolved against.
///
/// Every operation receives the directory it should search; there is no
/// process-wide mutable default. Discovery order: an explicit override
/// (CLI flag or `LINGO_DATA_DIR`), the `[data] dir` key in the global
/// config, then `~/.lingo/data`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataDir {
    root: PathBuf,
}

impl DataDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolve the active data directory.
    ///
    /// The directory is not required to exist; callers decide what a
    /// missing root means for their operation.
    pub fn discover(override_path: Option<&Path>) -> miette::Result<Self> {
        if let Some(path) = override_path {
            return Ok(Self::new(path));
        }
        Ok(Self::from_config(&GlobalConfig::load()?))
    }

    /// The data directory a configuration implies: its `[data] dir` key
    /// (with `~/` expanded), or `~/.lingo/data` when the key is unset.
    pub fn from_config(config: &GlobalConfig) -> Self {
        match config.data.dir.as_deref() {
            Some(dir) => Self::new(expand_home(dir)),
            None => Self::new(home_dir().join("data")),
        }
    }

    /// Returns the directory packages are searched under.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// True when the root exists and is a directory.
    pub fn exists(&self) -> bool {
        self.root.is_dir()
    }
}
