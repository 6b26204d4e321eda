use assert_cmd::Command;
use predicates::prelude::*;

#[allow(deprecated)]
fn lingo() -> Command {
    Command::cargo_bin("lingo").unwrap()
}

#[test]
fn list_empty_dir_prints_guidance() {
    let dir = tempfile::tempdir().unwrap();
    lingo()
        .arg("--data-dir")
        .arg(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No data packages installed"));
}

#[test]
fn list_shows_installed_packages() {
    let dir = tempfile::tempdir().unwrap();
    for name in ["en_core-1.2.0", "de_news-0.5", "en_vectors"] {
        std::fs::create_dir(dir.path().join(name)).unwrap();
    }
    lingo()
        .arg("--data-dir")
        .arg(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("en_core")
                .and(predicate::str::contains("1.2.0"))
                .and(predicate::str::contains("de_news"))
                .and(predicate::str::contains("en_vectors")),
        );
}

#[test]
fn list_missing_dir_is_empty_not_an_error() {
    lingo()
        .args(["--data-dir", "/no/such/dir", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No data packages installed"));
}

#[test]
fn list_runs_with_verbose_flag() {
    let dir = tempfile::tempdir().unwrap();
    lingo()
        .arg("--data-dir")
        .arg(dir.path())
        .args(["--verbose", "list"])
        .assert()
        .success();
}
