//! Best-match selection over the immediate children of a data directory.

use std::path::{Path, PathBuf};

use lingo_core::package::{split_data_name, PackageEntry};
use lingo_util::errors::LingoError;

use crate::constraint::Constraint;
use crate::version::VersionTuple;

/// Find the on-disk entry that best satisfies `constraint` for `target_name`
/// under `root`.
///
/// Scans the immediate children of `root` (files and directories alike),
/// splits each name on the first `-`, keeps the entries whose logical name
/// equals `target_name` and whose version satisfies the constraint, and
/// returns the path with the greatest version tuple. Entries without a
/// numeric tuple order below all versioned ones, and equal tuples (such as
/// `pkg-1.02` against `pkg-1.2`) fall back to the greater file name.
///
/// A `root` of `None`, or one that is missing or not a directory, yields
/// `Ok(None)`. A malformed constraint clause is an error even when the
/// directory holds no candidates.
pub fn resolve(
    target_name: &str,
    constraint: &str,
    root: Option<&Path>,
) -> miette::Result<Option<PathBuf>> {
    let Some(root) = root else {
        return Ok(None);
    };
    if !root.is_dir() {
        return Ok(None);
    }
    let constraint = Constraint::parse(constraint)?;

    let mut matches: Vec<(Option<VersionTuple>, PathBuf)> = Vec::new();
    for entry in std::fs::read_dir(root).map_err(LingoError::Io)? {
        let entry = entry.map_err(LingoError::Io)?;
        let file_name = entry.file_name();
        let Some(file_name) = file_name.to_str() else {
            continue;
        };
        let (name, version) = split_data_name(file_name);
        if name != target_name {
            continue;
        }
        let tuple = VersionTuple::parse(version);
        if constraint.matches(tuple.as_ref()) {
            matches.push((tuple, entry.path()));
        }
    }

    let best = matches.into_iter().max().map(|(_, path)| path);
    match &best {
        Some(path) => tracing::debug!("Resolved {target_name} to {}", path.display()),
        None => tracing::debug!("No match for {target_name} under {}", root.display()),
    }
    Ok(best)
}

/// List every package entry under `root`, sorted by logical name and
/// ascending version. A missing or non-directory root yields an empty list.
pub fn list_packages(root: &Path) -> miette::Result<Vec<PackageEntry>> {
    if !root.is_dir() {
        return Ok(Vec::new());
    }
    let mut packages = Vec::new();
    for entry in std::fs::read_dir(root).map_err(LingoError::Io)? {
        let entry = entry.map_err(LingoError::Io)?;
        if let Some(package) = PackageEntry::from_path(&entry.path()) {
            packages.push(package);
        }
    }
    packages.sort_by_cached_key(|package| {
        (
            package.name.clone(),
            VersionTuple::parse(&package.version),
            package.version.clone(),
        )
    });
    Ok(packages)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn touch(root: &Path, name: &str) {
        std::fs::create_dir(root.join(name)).unwrap();
    }

    fn populated_root() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        for name in ["pkg-1.0.0", "pkg-1.5.2", "pkg-2.0.0", "other-9.9.9"] {
            touch(dir.path(), name);
        }
        dir
    }

    #[test]
    fn picks_maximum_inside_constraint() {
        let dir = populated_root();
        let best = resolve("pkg", ">=1.0,<2.0", Some(dir.path())).unwrap();
        assert_eq!(best, Some(dir.path().join("pkg-1.5.2")));
    }

    #[test]
    fn unconstrained_pick_is_the_maximum() {
        let dir = populated_root();
        let best = resolve("pkg", "", Some(dir.path())).unwrap();
        assert_eq!(best, Some(dir.path().join("pkg-2.0.0")));
    }

    #[test]
    fn unknown_name_is_no_match() {
        let dir = populated_root();
        assert_eq!(resolve("missing", "", Some(dir.path())).unwrap(), None);
    }

    #[test]
    fn name_must_match_exactly() {
        let dir = populated_root();
        assert_eq!(resolve("pk", "", Some(dir.path())).unwrap(), None);
        assert_eq!(resolve("pkg-1", "", Some(dir.path())).unwrap(), None);
    }

    #[test]
    fn absent_root_is_no_match() {
        assert_eq!(resolve("pkg", "", None).unwrap(), None);
        assert_eq!(
            resolve("pkg", "", Some(Path::new("/no/such/dir"))).unwrap(),
            None
        );
    }

    #[test]
    fn file_root_is_no_match() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("data");
        std::fs::write(&file, "").unwrap();
        assert_eq!(resolve("pkg", "", Some(&file)).unwrap(), None);
    }

    #[test]
    fn malformed_constraint_fails_even_without_candidates() {
        let dir = tempfile::tempdir().unwrap();
        let err = resolve("pkg", "~1.0", Some(dir.path())).unwrap_err();
        assert!(err.to_string().contains("~1.0"), "got: {err}");
    }

    #[test]
    fn absent_root_short_circuits_before_constraint_parsing() {
        assert_eq!(resolve("pkg", "~1.0", None).unwrap(), None);
    }

    #[test]
    fn no_constraint_allows_versionless_entries() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "pkg");
        assert_eq!(
            resolve("pkg", "", Some(dir.path())).unwrap(),
            Some(dir.path().join("pkg"))
        );
        assert_eq!(resolve("pkg", ">=0.0", Some(dir.path())).unwrap(), None);
    }

    #[test]
    fn versionless_entries_lose_to_any_version() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "pkg");
        touch(dir.path(), "pkg-0.0.1");
        assert_eq!(
            resolve("pkg", "", Some(dir.path())).unwrap(),
            Some(dir.path().join("pkg-0.0.1"))
        );
    }

    #[test]
    fn plain_files_count_as_entries() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("pkg-1.0"), "").unwrap();
        assert_eq!(
            resolve("pkg", "", Some(dir.path())).unwrap(),
            Some(dir.path().join("pkg-1.0"))
        );
    }

    #[test]
    fn equal_tuples_break_ties_by_file_name() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "pkg-1.02");
        touch(dir.path(), "pkg-1.2");
        assert_eq!(
            resolve("pkg", "==1.2", Some(dir.path())).unwrap(),
            Some(dir.path().join("pkg-1.2"))
        );
    }

    #[test]
    fn longer_tuple_beats_equal_prefix() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "pkg-1.2");
        touch(dir.path(), "pkg-1.2.0");
        assert_eq!(
            resolve("pkg", "", Some(dir.path())).unwrap(),
            Some(dir.path().join("pkg-1.2.0"))
        );
    }

    #[test]
    fn list_packages_sorts_by_name_then_version() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["en_core-1.10", "en_core-1.9", "de_news-0.1", "en_core"] {
            touch(dir.path(), name);
        }
        let names: Vec<String> = list_packages(dir.path())
            .unwrap()
            .iter()
            .map(|package| package.to_string())
            .collect();
        assert_eq!(
            names,
            vec!["de_news-0.1", "en_core", "en_core-1.9", "en_core-1.10"]
        );
    }

    #[test]
    fn list_packages_of_missing_root_is_empty() {
        assert!(list_packages(Path::new("/no/such/dir")).unwrap().is_empty());
    }
}
