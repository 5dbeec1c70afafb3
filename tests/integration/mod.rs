//! Integration test suite for mdscaffold
//!
//! End-to-end tests that run the `mdscaffold` binary against markdown exports
//! and structure files written into temporary directories.
//!
//! # Running Integration Tests
//!
//! ```bash
//! cargo test --test integration
//! ```
//!
//! # Test Organization
//!
//! - **common**: Shared project setup
//! - **scaffold**: Flat dumps, structure-driven trees, fallbacks and dry runs
//! - **list**: Artifact listing in text and JSON
//! - **cli**: Global flags and argument errors

mod cli;
mod common;
mod list;
mod scaffold;
