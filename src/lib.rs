//! mdscaffold - scaffold projects from markdown exports
//!
//! Chat and documentation exports often carry whole source files as a bolded
//! file path followed by a fenced code block. mdscaffold recovers those files
//! and writes them to disk, either as-is or arranged by a YAML declaration of
//! the intended project tree.
//!
//! # Architecture Overview
//!
//! Two stages, run in order:
//!
//! 1. **Extraction** ([`markdown`]): a single tolerant pass over the document
//!    produces an [`ArtifactMap`](markdown::ArtifactMap), an ordered mapping
//!    from normalized path to code. Duplicate paths keep the last occurrence.
//! 2. **Resolution** ([`resolver`]): every file of a declared tree gets its
//!    content from a direct artifact match, a segment-aligned suffix match,
//!    inline content, a template, or nothing at all (in that order).
//!
//! All I/O during resolution goes through the
//! [`Workspace`](resolver::Workspace) trait, implemented for real disks and
//! dry runs in [`installer`].
//!
//! # Core Modules
//!
//! - [`markdown`] - Document lines, header recognition and artifact extraction
//! - [`resolver`] - Tree resolution, content sources and the scaffold report
//! - [`structure`] - YAML structure declarations
//! - [`installer`] - Disk and dry-run workspaces, flat artifact dump
//!
//! ## Supporting Modules
//!
//! - [`cli`] - Command-line interface
//! - [`core`] - Error types and user-facing error formatting
//! - [`constants`] - Line patterns and separators
//! - [`utils`] - Atomic writes and path handling
//!
//! # Document Format
//!
//! ````markdown
//! **src/main.rs**
//!
//! The entry point:
//!
//! ```rust
//! fn main() {}
//! ```
//!
//! **src/main.rs ∙ Version 2 - with logging**
//!
//! ```rust
//! fn main() { println!("hi"); }
//! ```
//! ````
//!
//! Text after a `∙` or a ` - ` in the header is ignored. Bold lines that do
//! not contain `.`, `/` or `\` are not treated as paths.
//!
//! # Command-Line Usage
//!
//! ```bash
//! mdscaffold scaffold export.md --structure layout.yaml --output my-app
//! mdscaffold list export.md --format json
//! ```

// Core functionality modules
pub mod markdown;
pub mod resolver;
pub mod structure;

// Collaborators
pub mod cli;
pub mod installer;

// Supporting modules
pub mod constants;
pub mod core;
pub mod utils;

// test_utils module is available for both unit tests and integration tests
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
