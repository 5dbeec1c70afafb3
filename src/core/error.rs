//! Error handling for mdscaffold
//!
//! This module provides the error types and user-friendly error reporting for
//! the scaffolder. The error system is built around two principles:
//! 1. **Strongly-typed errors** for precise handling in code
//! 2. **User-friendly messages** with actionable suggestions for CLI users
//!
//! # Architecture
//!
//! - [`ScaffoldError`] - Enumerated error types for every failure case
//! - [`ErrorContext`] - Wrapper that adds user-friendly messages and suggestions
//!
//! # Fatal vs. Non-Fatal Errors
//!
//! Most of these errors are *non-fatal* during a scaffolding run:
//! - [`ScaffoldError::DocumentUnreadable`] - extraction yields no artifacts and
//!   the run may continue with declared content only
//! - [`ScaffoldError::StructureUnreadable`] - the tree-based path is abandoned
//!   and extracted artifacts are written flat instead
//! - [`ScaffoldError::TemplateUnreadable`] - the declared file falls through to
//!   empty content
//! - [`ScaffoldError::WriteFailure`] and [`ScaffoldError::UnsafePath`] - the file
//!   is skipped and traversal continues
//!
//! Callers log these through `tracing` and keep going. Anything that reaches
//! `main` is converted with [`user_friendly_error`] and displayed.
//!
//! # Examples
//!
//! ```rust,no_run
//! use mdscaffold_cli::core::{ScaffoldError, ErrorContext, user_friendly_error};
//!
//! let error = ScaffoldError::DocumentUnreadable {
//!     path: "export.md".to_string(),
//!     reason: "No such file or directory".to_string(),
//! };
//!
//! let ctx = user_friendly_error(anyhow::Error::from(error));
//! ctx.display(); // Shows colored error with suggestions
//! ```

use colored::Colorize;
use std::fmt;
use thiserror::Error;

/// The main error type for mdscaffold operations.
///
/// # Error Categories
///
/// ## Input Documents
/// - [`DocumentUnreadable`] - The markdown export could not be read
/// - [`StructureUnreadable`] - The structure declaration is missing or malformed
/// - [`TemplateUnreadable`] - A declared template file could not be read
///
/// ## Output
/// - [`WriteFailure`] - A file or directory could not be created
/// - [`UnsafePath`] - An artifact path would escape the output directory
///
/// ## Conversions
/// - [`IoError`] - Standard I/O errors from [`std::io::Error`]
/// - [`YamlError`] - YAML errors from [`serde_yaml::Error`]
///
/// [`DocumentUnreadable`]: ScaffoldError::DocumentUnreadable
/// [`StructureUnreadable`]: ScaffoldError::StructureUnreadable
/// [`TemplateUnreadable`]: ScaffoldError::TemplateUnreadable
/// [`WriteFailure`]: ScaffoldError::WriteFailure
/// [`UnsafePath`]: ScaffoldError::UnsafePath
/// [`IoError`]: ScaffoldError::IoError
/// [`YamlError`]: ScaffoldError::YamlError
#[derive(Error, Debug)]
pub enum ScaffoldError {
    /// The source markdown document could not be opened or read.
    #[error("Cannot read markdown document {path}: {reason}")]
    DocumentUnreadable {
        /// Path of the document
        path: String,
        /// Underlying failure reason
        reason: String,
    },

    /// The structure declaration file is missing or malformed.
    #[error("Cannot use structure file {path}: {reason}")]
    StructureUnreadable {
        /// Path of the structure file
        path: String,
        /// Why the file could not be used
        reason: String,
    },

    /// A template referenced from the structure declaration could not be read.
    #[error("Template file not readable: {path}")]
    TemplateUnreadable {
        /// Path of the template file
        path: String,
        /// Underlying failure reason
        reason: String,
    },

    /// A file or directory could not be written.
    #[error("Failed to write {path}: {reason}")]
    WriteFailure {
        /// Path that could not be written
        path: String,
        /// Underlying failure reason
        reason: String,
    },

    /// An artifact path is absolute or climbs out of the output directory.
    #[error("Refusing to write outside the output directory: {path}")]
    UnsafePath {
        /// The offending artifact path
        path: String,
    },

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// Other error
    #[error("{message}")]
    Other {
        /// Generic error message
        message: String,
    },
}

impl Clone for ScaffoldError {
    fn clone(&self) -> Self {
        match self {
            Self::DocumentUnreadable {
                path,
                reason,
            } => Self::DocumentUnreadable {
                path: path.clone(),
                reason: reason.clone(),
            },
            Self::StructureUnreadable {
                path,
                reason,
            } => Self::StructureUnreadable {
                path: path.clone(),
                reason: reason.clone(),
            },
            Self::TemplateUnreadable {
                path,
                reason,
            } => Self::TemplateUnreadable {
                path: path.clone(),
                reason: reason.clone(),
            },
            Self::WriteFailure {
                path,
                reason,
            } => Self::WriteFailure {
                path: path.clone(),
                reason: reason.clone(),
            },
            Self::UnsafePath {
                path,
            } => Self::UnsafePath {
                path: path.clone(),
            },
            // io and YAML errors are not Clone; keep their message
            Self::IoError(e) => Self::IoError(std::io::Error::new(e.kind(), e.to_string())),
            Self::YamlError(e) => Self::Other {
                message: format!("YAML parsing error: {e}"),
            },
            Self::Other {
                message,
            } => Self::Other {
                message: message.clone(),
            },
        }
    }
}

/// Error wrapper that carries a suggestion and details for CLI display.
///
/// ```rust,no_run
/// use mdscaffold_cli::core::{ScaffoldError, ErrorContext};
///
/// let context = ErrorContext::new(ScaffoldError::Other { message: "boom".into() })
///     .with_suggestion("Re-run with --verbose")
///     .with_details("Something unexpected happened");
///
/// println!("{}", context);
/// ```
#[derive(Debug)]
pub struct ErrorContext {
    /// The underlying error
    pub error: ScaffoldError,
    /// Optional suggestion for resolving the error
    pub suggestion: Option<String>,
    /// Optional additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    /// Create a new error context with no suggestion or details.
    #[must_use]
    pub const fn new(error: ScaffoldError) -> Self {
        Self {
            error,
            suggestion: None,
            details: None,
        }
    }

    /// Add a suggestion for resolving the error.
    ///
    /// Suggestions are displayed in green in the terminal.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add additional details explaining the error.
    ///
    /// Details are displayed in yellow in the terminal.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Display the error context to stderr with terminal colors.
    ///
    /// - Error message: Red and bold
    /// - Details: Yellow
    /// - Suggestion: Green
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.error);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ErrorContext {}

/// Convert any error to a user-friendly [`ErrorContext`] with actionable suggestions.
///
/// Recognizes [`ScaffoldError`], [`std::io::Error`] and [`serde_yaml::Error`];
/// anything else is reported with its full cause chain.
#[must_use]
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    if let Some(scaffold_error) = error.downcast_ref::<ScaffoldError>() {
        return create_error_context(scaffold_error.clone());
    }

    if let Some(io_error) = error.downcast_ref::<std::io::Error>() {
        match io_error.kind() {
            std::io::ErrorKind::PermissionDenied => {
                return ErrorContext::new(ScaffoldError::WriteFailure {
                    path: "unknown".to_string(),
                    reason: io_error.to_string(),
                })
                .with_suggestion("Check the permissions of the output directory or choose another one with --output")
                .with_details("mdscaffold does not have permission to read or write a file");
            }
            std::io::ErrorKind::NotFound => {
                return ErrorContext::new(ScaffoldError::Other {
                    message: io_error.to_string(),
                })
                .with_suggestion("Check that the file or directory exists and the path is correct");
            }
            _ => {}
        }
    }

    if let Some(yaml_error) = error.downcast_ref::<serde_yaml::Error>() {
        return ErrorContext::new(ScaffoldError::StructureUnreadable {
            path: "structure file".to_string(),
            reason: yaml_error.to_string(),
        })
        .with_suggestion("Check the YAML syntax: every entry under 'structure' needs a 'directory' or 'file' key")
        .with_details("YAML errors are usually caused by wrong indentation or unquoted special characters");
    }

    // Generic error - include the full error chain
    let mut message = error.to_string();
    let chain: Vec<String> = error.chain().skip(1).map(std::string::ToString::to_string).collect();

    if !chain.is_empty() {
        message.push_str("\n\nCaused by:");
        for (i, cause) in chain.iter().enumerate() {
            message.push_str(&format!("\n  {}: {}", i + 1, cause));
        }
    }

    ErrorContext::new(ScaffoldError::Other {
        message,
    })
}

/// Map each [`ScaffoldError`] variant to a context with tailored suggestions.
fn create_error_context(error: ScaffoldError) -> ErrorContext {
    match &error {
        ScaffoldError::DocumentUnreadable {
            ..
        } => ErrorContext::new(error)
            .with_suggestion("Check the path to the markdown export and that it is valid UTF-8"),
        ScaffoldError::StructureUnreadable {
            ..
        } => ErrorContext::new(error).with_suggestion(
            "Fix the structure file or omit --structure to write the extracted artifacts as-is",
        ),
        ScaffoldError::TemplateUnreadable {
            reason,
            ..
        } => ErrorContext::new(error.clone())
            .with_suggestion("Template paths are resolved relative to the project root")
            .with_details(reason.clone()),
        ScaffoldError::WriteFailure {
            ..
        } => ErrorContext::new(error)
            .with_suggestion("Check disk space and permissions of the output directory"),
        ScaffoldError::UnsafePath {
            ..
        } => ErrorContext::new(error).with_details(
            "Artifact paths must be relative and may not climb out of the output directory with '..'",
        ),
        ScaffoldError::YamlError(_) => ErrorContext::new(error)
            .with_suggestion("Check the YAML syntax of the structure file"),
        _ => ErrorContext::new(error),
    }
}
