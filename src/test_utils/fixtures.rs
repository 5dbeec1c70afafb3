//! Test fixtures for markdown exports and structure declarations
//!
//! Both builders render to text and can write themselves into a directory,
//! which keeps integration tests readable.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Builder for a markdown export containing artifacts and prose.
#[derive(Clone, Debug, Default)]
pub struct DocumentFixture {
    pub content: String,
}

impl DocumentFixture {
    /// Start an empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a `**path**` header followed by a fenced code block
    pub fn artifact(self, path: &str, language: &str, code: &str) -> Self {
        self.header(path).code(language, code)
    }

    /// Append a versioned header, e.g. `**app.py ∙ Version 2**`
    pub fn versioned_artifact(self, path: &str, version: u32, code: &str) -> Self {
        self.header(&format!("{path} ∙ Version {version}")).code("", code)
    }

    /// Append a bold header line on its own
    pub fn header(mut self, text: &str) -> Self {
        self.content.push_str(&format!("**{text}**\n\n"));
        self
    }

    /// Append a fenced code block; `code` should end with a newline
    pub fn code(mut self, language: &str, code: &str) -> Self {
        self.content.push_str(&format!("```{language}\n{code}```\n\n"));
        self
    }

    /// Append a paragraph of prose
    pub fn prose(mut self, text: &str) -> Self {
        self.content.push_str(text);
        self.content.push_str("\n\n");
        self
    }

    /// Write the document to `dir/name`
    pub fn write_to(&self, dir: &Path, name: &str) -> Result<PathBuf> {
        write_fixture(dir, name, &self.content)
    }
}

/// Sample structure declarations.
#[derive(Clone, Debug)]
pub struct StructureFixture {
    pub content: String,
}

impl StructureFixture {
    /// A small service layout with artifact, inline and template files
    pub fn service() -> Self {
        Self {
            content: r##"name: service
structure:
  - directory: src
    children:
      - file: main.rs
      - directory: handlers
        children:
          - file: mod.rs
  - file: README.md
    content: "# Service\n"
  - file: LICENSE
    template: templates/LICENSE
  - file: .gitignore
"##
            .to_string(),
        }
    }

    /// A flat layout without a project name
    pub fn flat(files: &[&str]) -> Self {
        let mut content = String::from("structure:\n");
        for file in files {
            content.push_str(&format!("  - file: {file}\n"));
        }
        Self {
            content,
        }
    }

    /// A declaration with no `structure` key
    pub fn without_structure() -> Self {
        Self {
            content: "name: nothing-declared\n".to_string(),
        }
    }

    /// Text that is not valid YAML
    pub fn invalid_syntax() -> Self {
        Self {
            content: "structure: [unclosed\n".to_string(),
        }
    }

    /// Use arbitrary YAML text
    pub fn raw(content: &str) -> Self {
        Self {
            content: content.to_string(),
        }
    }

    /// Write the declaration to `dir/name`
    pub fn write_to(&self, dir: &Path, name: &str) -> Result<PathBuf> {
        write_fixture(dir, name, &self.content)
    }
}

fn write_fixture(dir: &Path, name: &str, content: &str) -> Result<PathBuf> {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, content).with_context(|| format!("Failed to write fixture {}", path.display()))?;
    Ok(path)
}
