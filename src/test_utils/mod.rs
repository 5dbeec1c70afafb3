//! Test utilities for mdscaffold
//!
//! Helpers shared by unit tests and the integration suite:
//! - [`init_test_logging`] for seeing `tracing` output while debugging a test
//! - Fixtures that write markdown exports and structure declarations to disk
//! - [`MemoryWorkspace`], an in-memory [`Workspace`](crate::resolver::Workspace)
//!
//! # Example
//!
//! ```rust,ignore
//! use mdscaffold_cli::test_utils::{DocumentFixture, MemoryWorkspace};
//!
//! let fixture = DocumentFixture::new()
//!     .artifact("src/main.rs", "rust", "fn main() {}\n")
//!     .prose("Some prose between artifacts.");
//! let workspace = MemoryWorkspace::new().with_template("templates/LICENSE", "MIT\n");
//! # let _ = (fixture, workspace);
//! ```

pub mod fixtures;
pub mod workspace;

pub use fixtures::{DocumentFixture, StructureFixture};
pub use workspace::MemoryWorkspace;

use std::sync::Once;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Global flag to ensure logging is only initialized once in tests
static INIT_LOGGING: Once = Once::new();

/// Initialize logging for tests.
///
/// Only the first call has an effect. Uses `level` if given, otherwise
/// `RUST_LOG`; with neither, logging stays off.
///
/// ```bash
/// RUST_LOG=mdscaffold_cli=debug cargo test
/// ```
pub fn init_test_logging(level: Option<Level>) {
    INIT_LOGGING.call_once(|| {
        let filter = if let Some(level) = level {
            EnvFilter::new(level.to_string())
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            return;
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .with_thread_ids(false)
            .with_ansi(true)
            .try_init();
    });
}
