//! Cross-platform utilities and helpers
//!
//! # Modules
//!
//! - [`fs`] - File system operations with atomic writes and path normalization
//!
//! # Cross-Platform Considerations
//!
//! Paths are stored and compared with `/` separators on every platform and
//! only turned into native paths when a file is actually written.

pub mod fs;

pub use fs::{ensure_dir, normalize_path_for_storage, safe_write};
