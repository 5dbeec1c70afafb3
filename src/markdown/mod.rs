//! Markdown document reading and artifact extraction.
//!
//! This module turns a markdown export into an [`ArtifactMap`]: the files the
//! export describes, keyed by normalized path. It is deliberately *not* a
//! markdown parser. Only two line shapes matter:
//!
//! - **Headers**: a line that opens with a bold span, e.g. `**src/main.rs**`
//! - **Fences**: lines starting with ```` ``` ````, which delimit code
//!
//! Everything else is prose and is skipped.
//!
//! # Module Structure
//!
//! - [`header`] - Recognizing header lines and cleaning up their text
//! - [`artifact_extractor`] - The single-pass extraction algorithm
//!
//! # Line Endings
//!
//! Documents are split into lines that keep their terminator, so code blocks
//! are reproduced byte for byte. Windows line endings (`\r\n`) are normalized
//! to `\n` and a leading byte-order mark is dropped.

pub mod artifact_extractor;
pub mod header;

pub use artifact_extractor::{Artifact, ArtifactExtractor, ArtifactMap};
pub use header::ArtifactHeader;

use std::path::Path;

use crate::core::ScaffoldError;

/// A source document held in memory as lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceDocument {
    lines: Vec<String>,
}

impl SourceDocument {
    /// Split text into lines, keeping each line's `\n` terminator.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);
        let lines = text
            .split_inclusive('\n')
            .map(|line| match line.strip_suffix("\r\n") {
                Some(stripped) => format!("{stripped}\n"),
                None => line.to_string(),
            })
            .collect();

        Self {
            lines,
        }
    }

    /// Read a whole document from disk.
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::DocumentUnreadable`] if the file cannot be
    /// opened or is not valid UTF-8.
    pub fn read(path: &Path) -> Result<Self, ScaffoldError> {
        tracing::debug!("Reading markdown document: {}", path.display());
        let text = std::fs::read_to_string(path).map_err(|e| ScaffoldError::DocumentUnreadable {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self::parse(&text))
    }

    /// The document's lines, terminators included.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the document has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
