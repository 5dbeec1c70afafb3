//! Artifact extraction from markdown exports.
//!
//! An *artifact* is a bolded file-path header followed by a fenced code block:
//!
//! ````markdown
//! **src/lib.rs ∙ Version 2**
//!
//! Some prose the export put in between.
//!
//! ```rust
//! pub fn answer() -> u32 { 42 }
//! ```
//! ````
//!
//! # Extraction Rules
//!
//! The document is scanned once, top to bottom:
//! - A header that does not look like a path (see
//!   [`ArtifactHeader::looks_like_path`]) is skipped.
//! - After a path header, the next fence start opens the artifact's code.
//!   Every line up to the closing fence is kept verbatim, line endings included.
//! - If another header line shows up before any fence, the search is
//!   abandoned and scanning resumes right after the original header.
//! - A path that appears more than once keeps the code of its *last*
//!   occurrence, at the position of its first.
//!
//! # Usage
//!
//! ```rust,no_run
//! use mdscaffold_cli::markdown::{ArtifactExtractor, SourceDocument};
//!
//! # fn example() -> anyhow::Result<()> {
//! let extractor = ArtifactExtractor::new()?;
//! let document = SourceDocument::parse("**a/b.txt**\n```\nhello\n```\n");
//! let artifacts = extractor.extract(&document);
//! assert_eq!(artifacts.content("a/b.txt"), Some("hello\n"));
//! # Ok(())
//! # }
//! ```

use anyhow::Result;
use indexmap::IndexMap;
use serde::Serialize;
use std::path::Path;

use super::SourceDocument;
use super::header::{ArtifactHeader, LinePatterns, is_fence_end};
use crate::utils::fs::normalize_path_for_storage;

/// A file extracted from the source document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Artifact {
    /// Normalized, forward-slash separated path
    pub path: String,

    /// Code block content, verbatim
    pub content: String,

    /// Whether the header carried a `∙` version marker
    pub versioned: bool,

    /// Language tag of the opening fence, if any
    pub language: Option<String>,

    /// 1-based line number of the header in the source document
    pub header_line: usize,
}

impl Artifact {
    /// Create an artifact with no version marker, language or line info.
    ///
    /// The path is normalized to forward slashes.
    pub fn new(path: impl AsRef<str>, content: impl Into<String>) -> Self {
        Self {
            path: normalize_path_for_storage(path.as_ref()),
            content: content.into(),
            versioned: false,
            language: None,
            header_line: 0,
        }
    }
}

/// Ordered mapping from normalized path to [`Artifact`].
///
/// Iteration follows the order in which each path was *first* extracted.
/// Re-inserting a path replaces its artifact without moving it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArtifactMap {
    entries: IndexMap<String, Artifact>,
}

impl ArtifactMap {
    /// Create an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite an artifact, returning the one it replaced.
    pub fn insert(&mut self, artifact: Artifact) -> Option<Artifact> {
        self.entries.insert(artifact.path.clone(), artifact)
    }

    /// Look up an artifact by exact normalized path.
    #[must_use]
    pub fn get(&self, path: &str) -> Option<&Artifact> {
        self.entries.get(path)
    }

    /// Content of the artifact at `path`, if present.
    #[must_use]
    pub fn content(&self, path: &str) -> Option<&str> {
        self.get(path).map(|a| a.content.as_str())
    }

    /// Whether an artifact exists at exactly `path`.
    #[must_use]
    pub fn contains(&self, path: &str) -> bool {
        self.entries.contains_key(path)
    }

    /// Number of unique artifact paths.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no artifacts were extracted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate artifacts in map order.
    pub fn iter(&self) -> impl Iterator<Item = &Artifact> {
        self.entries.values()
    }

    /// Iterate artifact paths in map order.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl FromIterator<Artifact> for ArtifactMap {
    fn from_iter<I: IntoIterator<Item = Artifact>>(iter: I) -> Self {
        let mut map = Self::new();
        for artifact in iter {
            map.insert(artifact);
        }
        map
    }
}

/// A fenced block found after a header.
#[derive(Debug)]
struct CodeBlock {
    language: Option<String>,
    content: String,
    /// Index of the closing fence line, or `lines.len()` if unclosed
    end: usize,
}

/// Outcome of searching for a header's code block.
#[derive(Debug)]
enum CodeSearch {
    Found(CodeBlock),
    /// Another header appeared first (1-based line)
    Interrupted(usize),
    Exhausted,
}

/// Scans documents for header + code block pairs.
#[derive(Debug, Clone)]
pub struct ArtifactExtractor {
    patterns: LinePatterns,
}

impl ArtifactExtractor {
    /// Create an extractor.
    ///
    /// # Errors
    ///
    /// Returns an error if the line patterns fail to compile.
    pub fn new() -> Result<Self> {
        Ok(Self {
            patterns: LinePatterns::new()?,
        })
    }

    /// Extract all artifacts from a document.
    #[must_use]
    pub fn extract(&self, document: &SourceDocument) -> ArtifactMap {
        let lines = document.lines();
        let mut artifacts = ArtifactMap::new();
        tracing::debug!("Starting artifact extraction over {} lines", lines.len());

        let mut i = 0;
        while i < lines.len() {
            let Some(raw) = self.patterns.header_text(&lines[i]) else {
                i += 1;
                continue;
            };

            let header = ArtifactHeader::parse(raw);
            tracing::debug!("Line {}: header candidate '{}'", i + 1, header.raw);

            if !header.looks_like_path() {
                tracing::debug!(
                    "Skipping '{}': does not look like a file path (no '.', '/' or '\\')",
                    header.path
                );
                i += 1;
                continue;
            }

            match self.find_code_block(lines, i + 1) {
                CodeSearch::Found(block) => {
                    let artifact = Artifact {
                        path: header.normalized_path(),
                        content: block.content,
                        versioned: header.versioned,
                        language: block.language,
                        header_line: i + 1,
                    };
                    tracing::info!(
                        "Found artifact: {}{}",
                        artifact.path,
                        if artifact.versioned {
                            " (versioned)"
                        } else {
                            ""
                        }
                    );

                    let path = artifact.path.clone();
                    if let Some(previous) = artifacts.insert(artifact) {
                        tracing::debug!(
                            "Overwriting artifact '{}' from line {} with newer version",
                            path,
                            previous.header_line
                        );
                    }
                    i = block.end;
                }
                CodeSearch::Interrupted(line) => {
                    tracing::debug!(
                        "Header on line {} reached before a code block for '{}'",
                        line,
                        header.path
                    );
                }
                CodeSearch::Exhausted => {
                    tracing::debug!("No code block found for '{}' before end of document", header.path);
                }
            }
            i += 1;
        }

        tracing::debug!("Finished extraction: {} unique artifacts", artifacts.len());
        artifacts
    }

    /// Extract artifacts from a markdown file on disk.
    ///
    /// An unreadable document is not fatal: the failure is logged and an empty
    /// map is returned so the caller can continue with declared content only.
    #[must_use]
    pub fn extract_file(&self, path: &Path) -> ArtifactMap {
        match SourceDocument::read(path) {
            Ok(document) => self.extract(&document),
            Err(e) => {
                tracing::warn!("{e}");
                ArtifactMap::new()
            }
        }
    }

    fn find_code_block(&self, lines: &[String], from: usize) -> CodeSearch {
        for (j, line) in lines.iter().enumerate().skip(from) {
            if let Some(language) = self.patterns.fence_language(line) {
                tracing::debug!("Code block starts on line {}", j + 1);
                let end = lines[j + 1..]
                    .iter()
                    .position(|l| is_fence_end(l))
                    .map_or(lines.len(), |offset| j + 1 + offset);

                return CodeSearch::Found(CodeBlock {
                    language: (!language.is_empty()).then(|| language.to_string()),
                    content: lines[j + 1..end].concat(),
                    end,
                });
            }

            if self.patterns.is_header(line) {
                return CodeSearch::Interrupted(j + 1);
            }
        }
        CodeSearch::Exhausted
    }
}
