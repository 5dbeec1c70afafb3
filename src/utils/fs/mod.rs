//! File system utilities for scaffolding output.
//!
//! # Key Features
//!
//! - **Atomic writes**: files are written through a temp file and renamed into place
//! - **Containment**: [`is_within_root`] keeps writes inside the output root
//! - **Separator normalization**: stored paths always use `/`
//!
//! # Examples
//!
//! ```rust,no_run
//! use mdscaffold_cli::utils::fs::{ensure_dir, safe_write};
//! use std::path::Path;
//!
//! # fn example() -> anyhow::Result<()> {
//! ensure_dir(Path::new("output/src"))?;
//! safe_write(Path::new("output/src/lib.rs"), "pub fn f() {}\n")?;
//! # Ok(())
//! # }
//! ```

pub mod atomic;
pub mod dirs;
pub mod paths;

// Directory operations
pub use dirs::ensure_dir;

// Atomic write operations
pub use atomic::{atomic_write, safe_write};

// Path utilities
pub use paths::{is_within_root, join_relative, normalize_path, normalize_path_for_storage};
