use mdscaffold_cli::test_utils::DocumentFixture;
use predicates::prelude::*;

use crate::common::TestProject;

fn export() -> DocumentFixture {
    DocumentFixture::new()
        .artifact("src/lib.rs", "rust", "pub fn f() {}\n")
        .prose("**Note:** the next one is versioned.")
        .versioned_artifact("README.md", 3, "# Title\n")
}

#[test]
fn test_list_text() {
    let project = TestProject::new();
    export().write_to(project.path(), "doc.md").unwrap();

    project
        .command()
        .args(["list", "doc.md"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 artifacts in doc.md:"))
        .stdout(predicate::str::contains("src/lib.rs (rust, line 1, 14 bytes)"))
        .stdout(predicate::str::contains("README.md (line"))
        .stdout(predicate::str::contains("versioned"));

    assert!(!project.exists("doc"));
}

#[test]
fn test_list_json() {
    let project = TestProject::new();
    export().write_to(project.path(), "doc.md").unwrap();

    let output = project.command().args(["list", "doc.md", "--format", "json"]).output().unwrap();
    assert!(output.status.success());

    let items: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let items = items.as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["path"], "src/lib.rs");
    assert_eq!(items[0]["language"], "rust");
    assert_eq!(items[1]["path"], "README.md");
    assert_eq!(items[1]["versioned"], true);
    assert!(items[1]["language"].is_null());
}

#[test]
fn test_list_empty_document() {
    let project = TestProject::new();
    project.write("doc.md", "**Summary**\nnothing to extract\n");

    project
        .command()
        .args(["list", "doc.md"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No artifacts found."));
}

#[test]
fn test_list_invalid_format() {
    let project = TestProject::new();
    export().write_to(project.path(), "doc.md").unwrap();

    project
        .command()
        .args(["list", "doc.md", "--format", "yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid format 'yaml'"));
}

#[test]
fn test_list_missing_document() {
    let project = TestProject::new();

    project
        .command()
        .args(["list", "missing.md"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Cannot read markdown document"));
}
