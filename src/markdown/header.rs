//! Artifact header recognition.
//!
//! A header is a line that opens with a bold span naming the file that the
//! next fenced code block belongs to. Exports are inconsistent about how they
//! format these lines, so the raw bold text is cleaned up before it is used:
//!
//! | Header line                                   | Artifact path     | Versioned |
//! |-----------------------------------------------|-------------------|-----------|
//! | `**src/main.rs**`                             | `src/main.rs`     | no        |
//! | `**config.yaml - Default settings**`          | `config.yaml`     | no        |
//! | `**lib/util.ts ∙ Version 2**`                 | `lib/util.ts`     | yes       |
//! | `**src\win\path.rs**`                         | `src/win/path.rs` | no        |
//! | `**Overview**`                                | *(not a path)*    | -         |

use anyhow::Result;
use regex::Regex;

use crate::constants::{
    DESCRIPTION_SEPARATOR, FENCE_MARKER, FENCE_START_PATTERN, HEADER_PATTERN, PATH_INDICATORS,
    VERSION_SEPARATOR,
};
use crate::utils::fs::normalize_path_for_storage;

/// Compiled line patterns used while scanning a document.
#[derive(Debug, Clone)]
pub struct LinePatterns {
    header: Regex,
    fence_start: Regex,
}

impl LinePatterns {
    /// Compile the header and fence patterns.
    ///
    /// # Errors
    ///
    /// Returns an error if one of the built-in patterns fails to compile.
    pub fn new() -> Result<Self> {
        Ok(Self {
            header: Regex::new(HEADER_PATTERN)?,
            fence_start: Regex::new(FENCE_START_PATTERN)?,
        })
    }

    /// Return the raw bold text if `line` is a header candidate.
    ///
    /// `line` is trimmed before matching. Any header candidate is returned,
    /// including ones that do not look like a path; use
    /// [`ArtifactHeader::looks_like_path`] to filter those.
    #[must_use]
    pub fn header_text<'a>(&self, line: &'a str) -> Option<&'a str> {
        self.header.captures(line.trim()).and_then(|caps| caps.get(1)).map(|m| m.as_str())
    }

    /// Whether `line` is a header candidate.
    #[must_use]
    pub fn is_header(&self, line: &str) -> bool {
        self.header.is_match(line.trim())
    }

    /// If `line` opens a fenced block, return its language tag (possibly empty).
    #[must_use]
    pub fn fence_language<'a>(&self, line: &'a str) -> Option<&'a str> {
        self.fence_start
            .captures(line.trim())
            .map(|caps| caps.get(1).map_or("", |m| m.as_str()))
    }
}

/// Whether `line` closes a fenced block.
#[must_use]
pub fn is_fence_end(line: &str) -> bool {
    line.trim().starts_with(FENCE_MARKER)
}

/// A header candidate split into its meaningful parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArtifactHeader<'a> {
    /// The text between the bold markers, untouched
    pub raw: &'a str,
    /// Candidate path with version info and description removed
    pub path: &'a str,
    /// Whether the raw text carried a version marker
    pub versioned: bool,
}

impl<'a> ArtifactHeader<'a> {
    /// Split raw header text into path and version flag.
    ///
    /// Everything after the first `∙` is version info, everything after the
    /// first `" - "` is a description.
    #[must_use]
    pub fn parse(raw: &'a str) -> Self {
        let versioned = raw.contains(VERSION_SEPARATOR);
        let without_version = raw.split(VERSION_SEPARATOR).next().unwrap_or(raw).trim();
        let path = without_version
            .split(DESCRIPTION_SEPARATOR)
            .next()
            .unwrap_or(without_version)
            .trim();

        Self {
            raw,
            path,
            versioned,
        }
    }

    /// Minimal file-path heuristic: the path contains `.`, `/` or `\`.
    ///
    /// This rejects bold prose such as `**Overview**` or `**Step one**`.
    #[must_use]
    pub fn looks_like_path(&self) -> bool {
        self.path.contains(PATH_INDICATORS)
    }

    /// The path with backslashes converted to forward slashes.
    #[must_use]
    pub fn normalized_path(&self) -> String {
        normalize_path_for_storage(self.path)
    }
}
