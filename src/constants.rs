//! Global constants used throughout the mdscaffold codebase.
//!
//! This module contains the textual markers recognized by the artifact
//! extractor and the defaults used by the CLI. Defining them centrally keeps
//! the parsing rules discoverable in one place.

/// Pattern for a header candidate line (applied to the trimmed line).
///
/// The header must open the line with a bold span; group 1 captures the raw
/// header text between the first `**` pair. The text itself may not contain
/// `*`, so `**a** and **b**` captures only `a`.
pub const HEADER_PATTERN: &str = r"^\*\*([^*]+?)\*\*";

/// Pattern for a fence-start line (applied to the trimmed line).
///
/// Group 1 captures the optional language tag, e.g. `rust` in ```` ```rust ````.
pub const FENCE_START_PATTERN: &str = r"^```(\w*)";

/// Marker that opens and closes a fenced code block.
pub const FENCE_MARKER: &str = "```";

/// Separator between an artifact name and trailing version information,
/// as in `**src/main.rs ∙ Version 3**`.
pub const VERSION_SEPARATOR: char = '∙';

/// Separator between an artifact path and a human-readable description,
/// as in `**config.yaml - Default settings**`.
pub const DESCRIPTION_SEPARATOR: &str = " - ";

/// Characters of which at least one must appear in a header for it to be
/// treated as a file path.
pub const PATH_INDICATORS: [char; 3] = ['.', '/', '\\'];

/// Log level used when neither `--verbose`, `--quiet` nor `RUST_LOG` is given.
pub const DEFAULT_LOG_LEVEL: &str = "warn";
