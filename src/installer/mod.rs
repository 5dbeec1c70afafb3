//! Workspaces that materialize scaffolded files, and the flat artifact dump.
//!
//! Two [`Workspace`] implementations live here:
//!
//! - [`DiskWorkspace`] writes to the filesystem below a root directory. Every
//!   target path is checked to stay inside that root and every file is
//!   written atomically (temp file in the same directory, then renamed).
//! - [`DryRunWorkspace`] records what would be written without touching
//!   disk. Templates are still read so the dry-run report shows real sources.
//!
//! [`write_artifacts`] is used when there is no usable tree declaration: each
//! artifact is written at its own relative path below the root.
//!
//! # Example
//!
//! ```rust,no_run
//! use mdscaffold_cli::installer::{DiskWorkspace, write_artifacts};
//! use mdscaffold_cli::markdown::{Artifact, ArtifactMap};
//! use std::path::Path;
//!
//! let artifacts: ArtifactMap = vec![Artifact::new("src/lib.rs", "pub fn f() {}\n")].into_iter().collect();
//! let root = Path::new("out");
//! let report = write_artifacts(&artifacts, root, &mut DiskWorkspace::new(root));
//! assert!(report.failures.is_empty());
//! ```

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::core::ScaffoldError;
use crate::markdown::ArtifactMap;
use crate::resolver::{ContentSource, Layout, ResolvedFile, ScaffoldReport, Workspace};
use crate::utils::fs::{ensure_dir, is_within_root, safe_write};

/// Writes below a root directory on the local filesystem.
#[derive(Debug, Clone)]
pub struct DiskWorkspace {
    root: PathBuf,
}

impl DiskWorkspace {
    /// Create a workspace confined to `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
        }
    }

    fn check_contained(&self, path: &Path) -> Result<()> {
        if is_within_root(&self.root, path) {
            Ok(())
        } else {
            Err(ScaffoldError::UnsafePath {
                path: path.display().to_string(),
            }
            .into())
        }
    }
}

impl Workspace for DiskWorkspace {
    fn ensure_dir(&mut self, path: &Path) -> Result<()> {
        self.check_contained(path)?;
        ensure_dir(path)
    }

    fn write_file(&mut self, path: &Path, content: &str) -> Result<()> {
        self.check_contained(path)?;
        safe_write(path, content)
    }

    fn read_template(&self, path: &Path) -> Result<String> {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read template: {}", path.display()))
    }
}

/// Records directories and files instead of creating them.
#[derive(Debug, Clone, Default)]
pub struct DryRunWorkspace {
    /// Directories that would be created, in order
    pub directories: Vec<PathBuf>,
    /// Files that would be written, with their byte size
    pub files: Vec<(PathBuf, usize)>,
}

impl DryRunWorkspace {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Workspace for DryRunWorkspace {
    fn ensure_dir(&mut self, path: &Path) -> Result<()> {
        tracing::debug!("[dry-run] would create directory {}", path.display());
        self.directories.push(path.to_path_buf());
        Ok(())
    }

    fn write_file(&mut self, path: &Path, content: &str) -> Result<()> {
        tracing::debug!("[dry-run] would write {} ({} bytes)", path.display(), content.len());
        self.files.push((path.to_path_buf(), content.len()));
        Ok(())
    }

    fn read_template(&self, path: &Path) -> Result<String> {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read template: {}", path.display()))
    }
}

/// Write every artifact at its own relative path below `root`.
///
/// Parent directories are created by the workspace. A failing artifact is
/// recorded in the report and the remaining artifacts are still written.
pub fn write_artifacts<W: Workspace>(
    artifacts: &ArtifactMap,
    root: &Path,
    workspace: &mut W,
) -> ScaffoldReport {
    let mut report = ScaffoldReport {
        layout: Layout::Flat,
        ..ScaffoldReport::default()
    };

    if artifacts.is_empty() {
        tracing::warn!("No artifacts found to create");
        return report;
    }

    tracing::info!("Writing {} artifacts into {}", artifacts.len(), root.display());
    for artifact in artifacts.iter() {
        match workspace.write_file(&root.join(&artifact.path), &artifact.content) {
            Ok(()) => tracing::info!("Wrote {}", artifact.path),
            Err(e) => report.record_failure(&artifact.path, &e),
        }
        report.resolved.push(ResolvedFile {
            relative_path: artifact.path.clone(),
            content: artifact.content.clone(),
            source: ContentSource::DirectMatch,
        });
    }

    report
}
