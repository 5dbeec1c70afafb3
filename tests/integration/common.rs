//! Shared setup for integration tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary working directory the binary runs in.
pub struct TestProject {
    temp: TempDir,
}

impl TestProject {
    pub fn new() -> Self {
        mdscaffold_cli::test_utils::init_test_logging(None);
        Self {
            temp: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.temp.path()
    }

    /// Write a file relative to the project directory
    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dir");
        }
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Read a file relative to the project directory
    pub fn read(&self, name: &str) -> String {
        fs::read_to_string(self.path().join(name))
            .unwrap_or_else(|e| panic!("Failed to read {name}: {e}"))
    }

    pub fn exists(&self, name: &str) -> bool {
        self.path().join(name).exists()
    }

    /// The binary, running inside the project directory without color
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("mdscaffold").expect("Failed to find binary");
        cmd.current_dir(self.path()).env_remove("RUST_LOG").arg("--no-color");
        cmd
    }
}
