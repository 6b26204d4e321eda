use assert_cmd::Command;
use predicates::prelude::*;

#[allow(deprecated)]
fn lingo() -> Command {
    Command::cargo_bin("lingo").unwrap()
}

#[test]
fn info_prints_meta_json() {
    let dir = tempfile::tempdir().unwrap();
    let package = dir.path().join("en_core-1.0.0");
    std::fs::create_dir(&package).unwrap();
    std::fs::write(
        package.join("meta.json"),
        r#"{"name": "en_core", "version": "1.0.0", "license": "MIT"}"#,
    )
    .unwrap();

    lingo()
        .arg("--data-dir")
        .arg(dir.path())
        .args(["info", "en_core"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"license\"").and(predicate::str::contains("MIT")));
}

#[test]
fn info_resolves_constraint_before_reading_meta() {
    let dir = tempfile::tempdir().unwrap();
    for (name, license) in [("en_core-1.0.0", "MIT"), ("en_core-2.0.0", "CC")] {
        let package = dir.path().join(name);
        std::fs::create_dir(&package).unwrap();
        std::fs::write(
            package.join("meta.json"),
            format!(r#"{{"license": "{license}"}}"#),
        )
        .unwrap();
    }

    lingo()
        .arg("--data-dir")
        .arg(dir.path())
        .args(["info", "en_core", "-r", "<2.0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("MIT").and(predicate::str::contains("CC").not()));
}

#[test]
fn info_without_meta_fails() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir(dir.path().join("en_core-1.0.0")).unwrap();
    lingo()
        .arg("--data-dir")
        .arg(dir.path())
        .args(["info", "en_core"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No meta.json"));
}

#[test]
fn info_unknown_package_fails() {
    let dir = tempfile::tempdir().unwrap();
    lingo()
        .arg("--data-dir")
        .arg(dir.path())
        .args(["info", "nothing_here"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No package"));
}
