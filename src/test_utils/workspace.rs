//! In-memory workspace for exercising tree resolution without touching disk.

use anyhow::{Result, anyhow};
use indexmap::IndexMap;
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use crate::resolver::Workspace;

/// Records directories and files instead of creating them.
///
/// Paths are stored exactly as the resolver passes them, i.e. already joined
/// onto the tree root. Individual paths can be set up to fail.
#[derive(Debug, Default)]
pub struct MemoryWorkspace {
    pub directories: Vec<PathBuf>,
    pub files: IndexMap<PathBuf, String>,
    templates: HashMap<PathBuf, String>,
    failing: HashSet<PathBuf>,
}

impl MemoryWorkspace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make a template readable at `path`
    pub fn with_template(mut self, path: impl Into<PathBuf>, content: &str) -> Self {
        self.templates.insert(path.into(), content.to_string());
        self
    }

    /// Make directory or file creation at `path` fail
    pub fn failing_on(mut self, path: impl Into<PathBuf>) -> Self {
        self.failing.insert(path.into());
        self
    }

    /// Content written at `path`, if any
    pub fn file(&self, path: impl AsRef<Path>) -> Option<&str> {
        self.files.get(path.as_ref()).map(String::as_str)
    }
}

impl Workspace for MemoryWorkspace {
    fn ensure_dir(&mut self, path: &Path) -> Result<()> {
        if self.failing.contains(path) {
            return Err(anyhow!("permission denied"));
        }
        self.directories.push(path.to_path_buf());
        Ok(())
    }

    fn write_file(&mut self, path: &Path, content: &str) -> Result<()> {
        if self.failing.contains(path) {
            return Err(anyhow!("permission denied"));
        }
        self.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn read_template(&self, path: &Path) -> Result<String> {
        self.templates.get(path).cloned().ok_or_else(|| anyhow!("no such template"))
    }
}
