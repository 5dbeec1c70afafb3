//! Core types for mdscaffold
//!
//! This module holds the error handling foundation shared by every other
//! module:
//! - [`ScaffoldError`] - Enumerated error types covering all failure modes
//! - [`ErrorContext`] - User-friendly error wrapper with suggestions and details
//! - [`user_friendly_error`] - Convert any error to the user-friendly format
//!
//! # Error First Design
//!
//! Every operation that can fail returns a [`Result`](anyhow::Result) with
//! meaningful error information. Non-fatal problems during scaffolding are
//! reported through `tracing` and summarized at the end of a run instead of
//! aborting it.

pub mod error;

pub use error::{ErrorContext, ScaffoldError, user_friendly_error};
