use predicates::prelude::*;

use crate::common::TestProject;

#[test]
fn test_help_lists_commands() {
    let project = TestProject::new();

    project
        .command()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("scaffold"))
        .stdout(predicate::str::contains("list"));
}

#[test]
fn test_version() {
    let project = TestProject::new();

    project
        .command()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_verbose_and_quiet_conflict() {
    let project = TestProject::new();
    project.write("doc.md", "");

    project.command().args(["-v", "-q", "list", "doc.md"]).assert().failure();
}

#[test]
fn test_verbose_traces_matching() {
    let project = TestProject::new();
    project.write("doc.md", "**a.txt**\n```\na\n```\n");

    project
        .command()
        .args(["--verbose", "scaffold", "doc.md", "-o", "out"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Found artifact: a.txt"));
}

#[test]
fn test_quiet_hides_warnings() {
    let project = TestProject::new();

    project
        .command()
        .args(["--quiet", "scaffold", "missing.md"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Cannot read markdown document").not());
}
