//! Path utilities for normalization and containment checks.
//!
//! Artifact keys and declared tree paths are plain strings that always use
//! forward slashes. Filesystem paths are only built from them at the point of
//! writing, and every write is checked to stay inside the output root.

use std::path::{Component, Path, PathBuf};

/// Normalizes a path by resolving `.` and `..` components.
///
/// This performs logical resolution only. It does not touch the filesystem
/// or resolve symbolic links.
///
/// # Examples
///
/// ```rust,no_run
/// use mdscaffold_cli::utils::fs::normalize_path;
/// use std::path::{Path, PathBuf};
///
/// let path = Path::new("/foo/./bar/../baz");
/// assert_eq!(normalize_path(path), PathBuf::from("/foo/baz"));
/// ```
#[must_use]
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut components = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match components.last() {
                Some(Component::Normal(_)) => {
                    components.pop();
                }
                // Keep leading `..` so escaping relative paths stay visible
                Some(Component::ParentDir) | None => components.push(component),
                _ => {}
            },
            c => components.push(c),
        }
    }

    components.iter().collect()
}

/// Checks that `path` stays inside `root` once both are normalized.
///
/// `path` is expected to already carry the root as its prefix, the way
/// workspace paths are built with `root.join(relative)`. Nothing is joined
/// here, so a relative `root` works the same as an absolute one.
///
/// ```rust,no_run
/// use mdscaffold_cli::utils::fs::is_within_root;
/// use std::path::Path;
///
/// let root = Path::new("out");
/// assert!(is_within_root(root, Path::new("out/src/main.rs")));
/// assert!(!is_within_root(root, Path::new("out/../escape.txt")));
/// assert!(!is_within_root(root, Path::new("/etc/passwd")));
/// ```
#[must_use]
pub fn is_within_root(root: &Path, path: &Path) -> bool {
    let root = normalize_path(root);
    let path = normalize_path(path);

    // `.` normalizes to an empty path, which every path starts with
    if root.as_os_str().is_empty() {
        return path.is_relative()
            && !matches!(path.components().next(), Some(Component::ParentDir));
    }

    path.starts_with(&root)
}

/// Normalizes a path for storage and comparison by converting all separators
/// to forward slashes.
///
/// Artifact keys and declared relative paths go through this function so that
/// `src\main.rs` and `src/main.rs` are the same key on every platform.
///
/// ```rust,no_run
/// use mdscaffold_cli::utils::fs::normalize_path_for_storage;
///
/// assert_eq!(normalize_path_for_storage("src\\utils\\mod.rs"), "src/utils/mod.rs");
/// ```
#[must_use]
pub fn normalize_path_for_storage<P: AsRef<Path>>(path: P) -> String {
    path.as_ref().to_string_lossy().replace('\\', "/")
}

/// Join a declared name onto a forward-slash relative parent.
///
/// The name is normalized and stripped of leading and trailing slashes, so
/// `join_relative("src", "utils/")` is `src/utils` and a declared `/etc`
/// cannot turn into an absolute path.
#[must_use]
pub fn join_relative(parent: &str, name: &str) -> String {
    let name = normalize_path_for_storage(name);
    let name = name.trim_matches('/');

    if parent.is_empty() {
        name.to_string()
    } else if name.is_empty() {
        parent.to_string()
    } else {
        format!("{parent}/{name}")
    }
}
