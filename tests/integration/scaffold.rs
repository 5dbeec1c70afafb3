use mdscaffold_cli::test_utils::{DocumentFixture, StructureFixture};
use predicates::prelude::*;

use crate::common::TestProject;

fn service_export() -> DocumentFixture {
    DocumentFixture::new()
        .prose("Here is the service you asked for.")
        .artifact("src/main.rs", "rust", "fn main() {\n    println!(\"hi\");\n}\n")
        .header("Overview")
        .code("text", "not a file\n")
        .artifact("handlers/mod.rs", "rust", "pub mod health;\n")
}

#[test]
fn test_flat_dump_into_default_output_dir() {
    let project = TestProject::new();
    service_export().write_to(project.path(), "chat.md").unwrap();

    project
        .command()
        .args(["scaffold", "chat.md"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No structure file provided"))
        .stdout(predicate::str::contains("2 artifacts written at their own paths."))
        .stdout(predicate::str::contains("All declared files").not())
        .stdout(predicate::str::contains("Done."));

    assert_eq!(project.read("chat/src/main.rs"), "fn main() {\n    println!(\"hi\");\n}\n");
    assert_eq!(project.read("chat/handlers/mod.rs"), "pub mod health;\n");
    assert!(!project.exists("chat/Overview"));
}

#[test]
fn test_structure_driven_scaffold() {
    let project = TestProject::new();
    service_export().write_to(project.path(), "chat.md").unwrap();
    StructureFixture::service().write_to(project.path(), "layout.yaml").unwrap();
    project.write("app/service/templates/LICENSE", "MIT License\n");

    project
        .command()
        .args(["scaffold", "chat.md", "--structure", "layout.yaml", "--output", "app"])
        .assert()
        .success()
        .stdout(predicate::str::contains("created empty"))
        .stdout(predicate::str::contains("  - .gitignore"))
        .stdout(predicate::str::contains("Done."));

    assert!(project.read("app/service/src/main.rs").starts_with("fn main()"));
    assert_eq!(project.read("app/service/src/handlers/mod.rs"), "pub mod health;\n");
    assert_eq!(project.read("app/service/README.md"), "# Service\n");
    assert_eq!(project.read("app/service/LICENSE"), "MIT License\n");
    assert_eq!(project.read("app/service/.gitignore"), "");
}

#[test]
fn test_all_populated_message() {
    let project = TestProject::new();
    DocumentFixture::new().artifact("a.txt", "", "a\n").write_to(project.path(), "doc.md").unwrap();
    StructureFixture::flat(&["a.txt"]).write_to(project.path(), "s.yaml").unwrap();

    project
        .command()
        .args(["scaffold", "doc.md", "-s", "s.yaml", "-o", "out"])
        .assert()
        .success()
        .stdout(predicate::str::contains("All declared files were populated"));

    assert_eq!(project.read("out/a.txt"), "a\n");
}

#[test]
fn test_suffix_match_respects_path_boundaries() {
    let project = TestProject::new();
    DocumentFixture::new()
        .artifact("oo.ts", "ts", "wrong\n")
        .artifact("bar.ts", "ts", "right\n")
        .write_to(project.path(), "doc.md")
        .unwrap();
    StructureFixture::raw(
        "structure:\n  - directory: src\n    children:\n      - file: foo.ts\n      - file: bar.ts\n",
    )
    .write_to(project.path(), "s.yaml")
    .unwrap();

    project
        .command()
        .args(["scaffold", "doc.md", "-s", "s.yaml", "-o", "out"])
        .assert()
        .success()
        .stdout(predicate::str::contains("  - src/foo.ts"));

    assert_eq!(project.read("out/src/foo.ts"), "");
    assert_eq!(project.read("out/src/bar.ts"), "right\n");
}

#[test]
fn test_last_version_wins() {
    let project = TestProject::new();
    DocumentFixture::new()
        .artifact("app.py", "python", "print('v1')\n")
        .versioned_artifact("app.py", 2, "print('v2')\n")
        .write_to(project.path(), "doc.md")
        .unwrap();

    project.command().args(["scaffold", "doc.md", "-o", "out"]).assert().success();

    assert_eq!(project.read("out/app.py"), "print('v2')\n");
}

#[test]
fn test_nothing_to_do() {
    let project = TestProject::new();
    DocumentFixture::new().prose("Just a conversation.").write_to(project.path(), "doc.md").unwrap();

    project
        .command()
        .args(["scaffold", "doc.md"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing to do"));

    assert!(!project.exists("doc"));
}

#[test]
fn test_missing_document_is_not_fatal() {
    let project = TestProject::new();

    project
        .command()
        .args(["scaffold", "missing.md"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing to do"))
        .stderr(predicate::str::contains("Cannot read markdown document"));
}

#[test]
fn test_structure_without_artifacts_creates_empty_files() {
    let project = TestProject::new();
    project.write("doc.md", "no artifacts here\n");
    StructureFixture::flat(&["b.txt", "a.txt"]).write_to(project.path(), "s.yaml").unwrap();

    let output = project
        .command()
        .args(["scaffold", "doc.md", "-s", "s.yaml", "-o", "out"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let stdout = String::from_utf8(output).unwrap();

    let a = stdout.find("  - a.txt").unwrap();
    let b = stdout.find("  - b.txt").unwrap();
    assert!(a < b, "empty files should be listed in sorted order");
    assert!(project.exists("out/a.txt"));
    assert!(project.exists("out/b.txt"));
}

#[test]
fn test_malformed_structure_falls_back_to_flat_dump() {
    let project = TestProject::new();
    DocumentFixture::new().artifact("x/y.txt", "", "y\n").write_to(project.path(), "doc.md").unwrap();
    StructureFixture::invalid_syntax().write_to(project.path(), "bad.yaml").unwrap();

    project
        .command()
        .args(["scaffold", "doc.md", "-s", "bad.yaml", "-o", "out"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Cannot use structure file"));

    assert_eq!(project.read("out/x/y.txt"), "y\n");
}

#[test]
fn test_empty_structure_key_dumps_into_project_root() {
    let project = TestProject::new();
    DocumentFixture::new().artifact("a.txt", "", "a\n").write_to(project.path(), "doc.md").unwrap();
    StructureFixture::without_structure().write_to(project.path(), "s.yaml").unwrap();

    project.command().args(["scaffold", "doc.md", "-s", "s.yaml", "-o", "out"]).assert().success();

    assert_eq!(project.read("out/nothing-declared/a.txt"), "a\n");
}

#[test]
fn test_dry_run_writes_nothing() {
    let project = TestProject::new();
    service_export().write_to(project.path(), "chat.md").unwrap();
    StructureFixture::service().write_to(project.path(), "layout.yaml").unwrap();

    project
        .command()
        .args(["scaffold", "chat.md", "-s", "layout.yaml", "-o", "app", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Planned files:"))
        .stdout(predicate::str::contains("src/main.rs (artifact, "))
        .stdout(predicate::str::contains("src/handlers/mod.rs (artifact (matched on 'handlers/mod.rs')"))
        .stdout(predicate::str::contains("Dry run: no files were written."));

    assert!(!project.exists("app"));
}

#[test]
fn test_escaping_artifact_is_rejected() {
    let project = TestProject::new();
    DocumentFixture::new()
        .artifact("../escape.txt", "", "nope\n")
        .artifact("inside.txt", "", "ok\n")
        .write_to(project.path(), "doc.md")
        .unwrap();

    project
        .command()
        .args(["scaffold", "doc.md", "-o", "out"])
        .assert()
        .success()
        .stdout(predicate::str::contains("could not be written"))
        .stdout(predicate::str::contains("../escape.txt"))
        .stdout(predicate::str::contains("All declared files").not())
        .stdout(predicate::str::contains("written at their own paths").not());

    assert!(!project.exists("escape.txt"));
    assert_eq!(project.read("out/inside.txt"), "ok\n");
}
