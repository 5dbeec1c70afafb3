//! Resolution of declared project trees against extracted artifacts.
//!
//! The resolver walks a [`TreeNode`] list depth-first in declaration order.
//! Directories are created through the [`Workspace`]; each declared file gets
//! its content from the first source that applies:
//!
//! 1. **Direct match** - an artifact whose path equals the file's relative path
//! 2. **Suffix match** - an artifact whose path is a trailing, segment-aligned
//!    part of the relative path (`src/app/main.rs` matches `app/main.rs` and
//!    `main.rs`, but not `ain.rs`)
//! 3. **Inline content** declared on the entry
//! 4. **Template** file declared on the entry, read relative to the tree root
//! 5. **Empty** content, recorded in [`ScaffoldReport::empty_files`]
//!
//! When several artifacts are valid suffix matches, the first one in
//! [`ArtifactMap`] order wins, i.e. the one whose path was extracted first.
//!
//! # Failure Handling
//!
//! Nothing here aborts a run. Unreadable templates fall through to empty
//! content; directory and file write failures are logged, recorded in
//! [`ScaffoldReport::failures`], and traversal continues with the next entry.
//!
//! # Example
//!
//! ```rust,no_run
//! use mdscaffold_cli::installer::DiskWorkspace;
//! use mdscaffold_cli::markdown::{Artifact, ArtifactMap};
//! use mdscaffold_cli::resolver::TreeResolver;
//! use mdscaffold_cli::structure::StructureFile;
//! use std::path::Path;
//!
//! # fn example() -> anyhow::Result<()> {
//! let artifacts: ArtifactMap = vec![Artifact::new("main.rs", "fn main() {}\n")].into_iter().collect();
//! let structure = StructureFile::parse("structure:\n  - directory: src\n    children:\n      - file: main.rs\n")?;
//!
//! let root = Path::new("out");
//! let mut workspace = DiskWorkspace::new(root);
//! let report = TreeResolver::new(root, &artifacts, &mut workspace).resolve(&structure.structure);
//! assert!(report.empty_files.is_empty());
//! # Ok(())
//! # }
//! ```

use anyhow::Result;
use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::core::ScaffoldError;
use crate::markdown::{Artifact, ArtifactMap};
use crate::structure::TreeNode;
use crate::utils::fs::{join_relative, normalize_path_for_storage};


/// I/O collaborator used while resolving a tree.
///
/// Implementations decide what "creating" a directory or file means; see
/// [`DiskWorkspace`](crate::installer::DiskWorkspace) and
/// [`DryRunWorkspace`](crate::installer::DryRunWorkspace).
pub trait Workspace {
    /// Make sure the directory at `path` exists.
    fn ensure_dir(&mut self, path: &Path) -> Result<()>;

    /// Create or replace the file at `path` with `content`.
    fn write_file(&mut self, path: &Path, content: &str) -> Result<()>;

    /// Read a template file in full.
    fn read_template(&self, path: &Path) -> Result<String>;
}

/// Where a resolved file's content came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum ContentSource {
    /// Artifact at exactly the file's relative path
    DirectMatch,
    /// Artifact whose path is a segment-aligned suffix; holds the artifact path
    SuffixMatch(String),
    /// Literal content from the structure declaration
    InlineContent,
    /// Template file; holds the declared template path
    Template(String),
    /// Nothing matched
    Empty,
}

impl fmt::Display for ContentSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DirectMatch => write!(f, "artifact"),
            Self::SuffixMatch(key) => write!(f, "artifact (matched on '{key}')"),
            Self::InlineContent => write!(f, "inline content"),
            Self::Template(path) => write!(f, "template '{path}'"),
            Self::Empty => write!(f, "empty"),
        }
    }
}

/// Final content decision for one declared file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedFile {
    /// Path relative to the tree root, forward slashes
    pub relative_path: String,
    /// Content written to disk
    pub content: String,
    /// Where the content came from
    pub source: ContentSource,
}

/// A file or directory that could not be created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WriteFailure {
    /// Relative path of the entry
    pub path: String,
    /// Why it failed
    pub reason: String,
}

impl From<&WriteFailure> for ScaffoldError {
    fn from(failure: &WriteFailure) -> Self {
        Self::WriteFailure {
            path: failure.path.clone(),
            reason: failure.reason.clone(),
        }
    }
}

/// How the files of a report were laid out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Layout {
    /// Files were declared by a structure tree
    #[default]
    Declared,
    /// Artifacts were written at their own paths with no declaration
    Flat,
}

/// Everything a scaffolding pass produced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScaffoldReport {
    /// Whether the files came from a declared tree or a flat dump
    pub layout: Layout,
    /// Directories ensured, relative to the tree root
    pub directories: Vec<String>,
    /// One record per declared (or flat-written) file, in traversal order
    pub resolved: Vec<ResolvedFile>,
    /// Relative paths of files that ended up with [`ContentSource::Empty`]
    pub empty_files: Vec<String>,
    /// Entries that could not be written
    pub failures: Vec<WriteFailure>,
}

impl ScaffoldReport {
    /// Empty-file paths in sorted order, as shown in the summary.
    #[must_use]
    pub fn sorted_empty_files(&self) -> Vec<&str> {
        let mut files: Vec<&str> = self.empty_files.iter().map(String::as_str).collect();
        files.sort_unstable();
        files
    }

    /// Number of files whose content came from an artifact.
    #[must_use]
    pub fn artifact_count(&self) -> usize {
        self.resolved
            .iter()
            .filter(|f| matches!(f.source, ContentSource::DirectMatch | ContentSource::SuffixMatch(_)))
            .count()
    }

    /// Look up the record for a relative path.
    #[must_use]
    pub fn get(&self, relative_path: &str) -> Option<&ResolvedFile> {
        self.resolved.iter().find(|f| f.relative_path == relative_path)
    }

    pub(crate) fn record_failure(&mut self, path: &str, error: &anyhow::Error) {
        let failure = WriteFailure {
            path: path.to_string(),
            reason: format!("{error:#}"),
        };
        tracing::warn!("{}", ScaffoldError::from(&failure));
        self.failures.push(failure);
    }
}

/// Whether `key` is a trailing, segment-aligned part of `path`.
///
/// The character before the match must be `/`, or the match must cover
/// the whole path.
///
/// ```rust,no_run
/// use mdscaffold_cli::resolver::is_segment_suffix;
///
/// assert!(is_segment_suffix("src/foo.ts", "foo.ts"));
/// assert!(is_segment_suffix("foo.ts", "foo.ts"));
/// assert!(!is_segment_suffix("src/foo.ts", "oo.ts"));
/// assert!(!is_segment_suffix("src/myfoo.ts", "foo.ts"));
/// ```
#[must_use]
pub fn is_segment_suffix(path: &str, key: &str) -> bool {
    path.strip_suffix(key).is_some_and(|prefix| prefix.is_empty() || prefix.ends_with('/'))
}

/// Find the artifact for a declared relative path.
///
/// Tries a direct lookup first, then the first segment-aligned suffix match
/// in map order. The path is normalized to forward slashes before lookup.
#[must_use]
pub fn find_artifact<'a>(
    relative_path: &str,
    artifacts: &'a ArtifactMap,
) -> Option<(ContentSource, &'a Artifact)> {
    let relative_path = normalize_path_for_storage(relative_path);
    tracing::debug!(
        "Matching '{}' against {} extracted artifacts",
        relative_path,
        artifacts.len()
    );

    if let Some(artifact) = artifacts.get(&relative_path) {
        tracing::debug!("Direct match for '{}'", relative_path);
        return Some((ContentSource::DirectMatch, artifact));
    }

    for artifact in artifacts.iter() {
        if !relative_path.ends_with(artifact.path.as_str()) {
            continue;
        }
        if is_segment_suffix(&relative_path, &artifact.path) {
            tracing::debug!("Suffix match for '{}' on '{}'", relative_path, artifact.path);
            return Some((ContentSource::SuffixMatch(artifact.path.clone()), artifact));
        }
        tracing::debug!(
            "'{}' ends with '{}' but not at a path boundary",
            relative_path,
            artifact.path
        );
    }

    tracing::debug!("No artifact matches '{}'", relative_path);
    None
}

/// Walks a declared tree and writes every entry through a [`Workspace`].
pub struct TreeResolver<'a, W: Workspace> {
    root: PathBuf,
    artifacts: &'a ArtifactMap,
    workspace: &'a mut W,
}

impl<'a, W: Workspace> TreeResolver<'a, W> {
    /// Create a resolver for a tree rooted at `root`.
    pub fn new(root: impl Into<PathBuf>, artifacts: &'a ArtifactMap, workspace: &'a mut W) -> Self {
        Self {
            root: root.into(),
            artifacts,
            workspace,
        }
    }

    /// Resolve and write every entry of `nodes`.
    pub fn resolve(mut self, nodes: &[TreeNode]) -> ScaffoldReport {
        let mut report = ScaffoldReport::default();
        self.walk(nodes, "", &mut report);
        report
    }

    fn walk(&mut self, nodes: &[TreeNode], parent: &str, report: &mut ScaffoldReport) {
        for node in nodes {
            match node {
                TreeNode::Directory {
                    name,
                    children,
                } => {
                    let relative = join_relative(parent, name);
                    tracing::info!("Creating directory: {}", relative);

                    match self.workspace.ensure_dir(&self.root.join(&relative)) {
                        Ok(()) => report.directories.push(relative.clone()),
                        Err(e) => report.record_failure(&relative, &e),
                    }
                    self.walk(children, &relative, report);
                }
                TreeNode::File {
                    name,
                    content,
                    template,
                } => {
                    let relative = join_relative(parent, name);
                    let resolved =
                        self.resolve_file(&relative, content.as_deref(), template.as_deref());

                    if resolved.source == ContentSource::Empty {
                        report.empty_files.push(relative.clone());
                    }

                    match self.workspace.write_file(&self.root.join(&relative), &resolved.content)
                    {
                        Ok(()) => tracing::info!("Created file: {} (from {})", relative, resolved.source),
                        Err(e) => report.record_failure(&relative, &e),
                    }
                    report.resolved.push(resolved);
                }
                TreeNode::Unrecognized(value) => {
                    tracing::warn!(
                        "Skipping structure entry without 'directory' or 'file' key: {:?}",
                        value
                    );
                }
            }
        }
    }

    /// Pick the content for one declared file.
    fn resolve_file(
        &self,
        relative_path: &str,
        inline: Option<&str>,
        template: Option<&str>,
    ) -> ResolvedFile {
        let resolved = |content: String, source: ContentSource| ResolvedFile {
            relative_path: relative_path.to_string(),
            content,
            source,
        };

        if let Some((source, artifact)) = find_artifact(relative_path, self.artifacts) {
            return resolved(artifact.content.clone(), source);
        }

        if let Some(content) = inline {
            return resolved(content.to_string(), ContentSource::InlineContent);
        }

        if let Some(template) = template {
            let template_path = self.root.join(normalize_path_for_storage(template));
            match self.workspace.read_template(&template_path) {
                Ok(content) => return resolved(content, ContentSource::Template(template.to_string())),
                Err(e) => {
                    let error = ScaffoldError::TemplateUnreadable {
                        path: template_path.display().to_string(),
                        reason: format!("{e:#}"),
                    };
                    tracing::warn!("{} ({:#})", error, e);
                }
            }
        }

        resolved(String::new(), ContentSource::Empty)
    }
}
