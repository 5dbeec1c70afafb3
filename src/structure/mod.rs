//! Project structure declarations.
//!
//! A structure file is a YAML document describing the directory tree to
//! scaffold. Files can be populated from extracted artifacts, from inline
//! content, or from a template file:
//!
//! ```yaml
//! name: my-service            # optional; becomes a subdirectory of the output
//! structure:
//!   - directory: src
//!     children:
//!       - file: main.rs       # looked up among extracted artifacts
//!       - file: lib.rs
//!   - file: README.md
//!     content: "# My Service\n"
//!   - file: LICENSE
//!     template: templates/MIT.txt   # relative to the project root
//! ```
//!
//! List entries that have neither a `directory` nor a `file` key are kept as
//! [`TreeNode::Unrecognized`] and skipped with a warning during scaffolding,
//! so one bad entry does not invalidate the whole declaration.

use serde::{Deserialize, Deserializer};
use std::path::{Path, PathBuf};

use crate::core::ScaffoldError;

/// Top-level structure declaration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct StructureFile {
    /// Optional project name; the tree is rooted at `<output>/<name>` when set.
    #[serde(default)]
    pub name: Option<String>,

    /// The declared tree. Missing and `null` both mean "no structure".
    #[serde(default, deserialize_with = "nullable_list")]
    pub structure: Vec<TreeNode>,
}

/// One entry of a declared tree.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum TreeNode {
    /// A directory with nested entries.
    Directory {
        /// Directory name, may contain `/` for nested paths
        #[serde(rename = "directory")]
        name: String,
        /// Entries inside the directory, in declaration order
        #[serde(default, deserialize_with = "nullable_list")]
        children: Vec<TreeNode>,
    },

    /// A file to create.
    File {
        /// File name, may contain `/` for nested paths
        #[serde(rename = "file")]
        name: String,
        /// Literal content used when no artifact matches
        #[serde(default, deserialize_with = "scalar_text")]
        content: Option<String>,
        /// Template path relative to the project root
        #[serde(default)]
        template: Option<String>,
    },

    /// Anything else found in a structure list.
    Unrecognized(serde_yaml::Value),
}

impl TreeNode {
    /// Declared name, if this is a directory or file entry.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Directory {
                name,
                ..
            }
            | Self::File {
                name,
                ..
            } => Some(name),
            Self::Unrecognized(_) => None,
        }
    }

    /// Number of file entries in this subtree.
    #[must_use]
    pub fn file_count(&self) -> usize {
        match self {
            Self::Directory {
                children,
                ..
            } => children.iter().map(Self::file_count).sum(),
            Self::File {
                ..
            } => 1,
            Self::Unrecognized(_) => 0,
        }
    }
}

impl StructureFile {
    /// Parse a structure declaration from YAML text.
    ///
    /// An empty document is accepted and yields an empty declaration.
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::YamlError`] if the text is not valid YAML or the
    /// top level is not a mapping.
    pub fn parse(text: &str) -> Result<Self, ScaffoldError> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(text)?)
    }

    /// Load a structure declaration from disk.
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::StructureUnreadable`] if the file cannot be read
    /// or parsed.
    pub fn load(path: &Path) -> Result<Self, ScaffoldError> {
        tracing::debug!("Loading structure file: {}", path.display());

        let unreadable = |reason: String| ScaffoldError::StructureUnreadable {
            path: path.display().to_string(),
            reason,
        };

        let text = std::fs::read_to_string(path).map_err(|e| unreadable(e.to_string()))?;
        Self::parse(&text).map_err(|e| unreadable(e.to_string()))
    }

    /// Whether the declaration contains any entries.
    #[must_use]
    pub fn has_structure(&self) -> bool {
        !self.structure.is_empty()
    }

    /// Directory the tree is rooted in, given the output directory.
    #[must_use]
    pub fn project_root(&self, output_dir: &Path) -> PathBuf {
        match self.name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => output_dir.join(name),
            _ => output_dir.to_path_buf(),
        }
    }

    /// Total number of declared files.
    #[must_use]
    pub fn file_count(&self) -> usize {
        self.structure.iter().map(TreeNode::file_count).sum()
    }
}

fn nullable_list<'de, D>(deserializer: D) -> Result<Vec<TreeNode>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<TreeNode>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accept any YAML scalar as inline content; `content: 42` becomes `"42"`.
fn scalar_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    match Option::<serde_yaml::Value>::deserialize(deserializer)? {
        None | Some(serde_yaml::Value::Null) => Ok(None),
        Some(serde_yaml::Value::String(s)) => Ok(Some(s)),
        Some(serde_yaml::Value::Number(n)) => Ok(Some(n.to_string())),
        Some(serde_yaml::Value::Bool(b)) => Ok(Some(b.to_string())),
        Some(_) => Err(D::Error::custom("file content must be a string")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const SAMPLE: &str = r##"
name: demo
structure:
  - directory: src
    children:
      - file: main.rs
      - directory: utils
        children:
          - file: mod.rs
  - file: README.md
    content: "# Demo\n"
  - file: LICENSE
    template: templates/MIT.txt
"##;

    #[test]
    fn test_parse_sample() {
        let structure = StructureFile::parse(SAMPLE).unwrap();
        assert_eq!(structure.name.as_deref(), Some("demo"));
        assert_eq!(structure.structure.len(), 3);
        assert_eq!(structure.file_count(), 4);

        match &structure.structure[0] {
            TreeNode::Directory {
                name,
                children,
            } => {
                assert_eq!(name, "src");
                assert_eq!(children.len(), 2);
            }
            other => panic!("expected directory, got {other:?}"),
        }

        assert_eq!(
            structure.structure[1],
            TreeNode::File {
                name: "README.md".to_string(),
                content: Some("# Demo\n".to_string()),
                template: None,
            }
        );
        assert_eq!(
            structure.structure[2],
            TreeNode::File {
                name: "LICENSE".to_string(),
                content: None,
                template: Some("templates/MIT.txt".to_string()),
            }
        );
    }

    #[test]
    fn test_null_children_and_structure() {
        let structure = StructureFile::parse("structure:\n  - directory: empty\n    children:\n").unwrap();
        assert_eq!(
            structure.structure[0],
            TreeNode::Directory {
                name: "empty".to_string(),
                children: Vec::new(),
            }
        );

        let structure = StructureFile::parse("name: x\nstructure:\n").unwrap();
        assert!(!structure.has_structure());
    }

    #[test]
    fn test_empty_document() {
        let structure = StructureFile::parse("  \n").unwrap();
        assert_eq!(structure, StructureFile::default());
    }

    #[test]
    fn test_unrecognized_entries_are_kept() {
        let structure =
            StructureFile::parse("structure:\n  - just a string\n  - link: somewhere\n  - file: a.txt\n")
                .unwrap();
        assert_eq!(structure.structure.len(), 3);
        assert!(matches!(structure.structure[0], TreeNode::Unrecognized(_)));
        assert!(matches!(structure.structure[1], TreeNode::Unrecognized(_)));
        assert_eq!(structure.structure[2].name(), Some("a.txt"));
    }

    #[test]
    fn test_scalar_content() {
        let structure = StructureFile::parse("structure:\n  - file: VERSION\n    content: 42\n").unwrap();
        assert_eq!(
            structure.structure[0],
            TreeNode::File {
                name: "VERSION".to_string(),
                content: Some("42".to_string()),
                template: None,
            }
        );
    }

    #[test]
    fn test_invalid_yaml() {
        assert!(StructureFile::parse("structure: [unclosed").is_err());
        assert!(StructureFile::parse("- a\n- b\n").is_err());
    }

    #[test]
    fn test_project_root() {
        let output = Path::new("out");
        let named = StructureFile {
            name: Some("svc".to_string()),
            structure: Vec::new(),
        };
        assert_eq!(named.project_root(output), PathBuf::from("out/svc"));
        assert_eq!(StructureFile::default().project_root(output), PathBuf::from("out"));
    }

    #[test]
    fn test_load_missing_file() {
        let err = StructureFile::load(Path::new("/no/such/structure.yaml")).unwrap_err();
        assert!(matches!(err, ScaffoldError::StructureUnreadable { .. }));
    }

    #[test]
    fn test_load_from_disk() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("structure.yaml");
        std::fs::write(&path, SAMPLE).unwrap();

        let structure = StructureFile::load(&path).unwrap();
        assert_eq!(structure.file_count(), 4);
    }
}
