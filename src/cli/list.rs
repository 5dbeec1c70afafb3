//! The `list` command: show what a markdown export contains.
//!
//! Nothing is written. The text format prints one artifact per line in
//! extraction order; the JSON format is meant for scripts.
//!
//! ```bash
//! mdscaffold list export.md
//! mdscaffold list export.md --format json | jq '.[].path'
//! ```

use anyhow::{Result, bail};
use clap::Args;
use colored::Colorize;
use serde::Serialize;
use std::path::PathBuf;

use crate::markdown::{Artifact, ArtifactExtractor, ArtifactMap, SourceDocument};

/// List the artifacts found in a markdown export.
#[derive(Args, Debug, Clone)]
pub struct ListCommand {
    /// Markdown export to inspect
    #[arg(value_name = "MARKDOWN_FILE")]
    markdown_file: PathBuf,

    /// Output format (text, json)
    #[arg(short = 'f', long, default_value = "text")]
    format: String,
}

/// One row of `list` output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListItem {
    pub path: String,
    pub versioned: bool,
    pub language: Option<String>,
    pub header_line: usize,
    pub size: usize,
}

impl From<&Artifact> for ListItem {
    fn from(artifact: &Artifact) -> Self {
        Self {
            path: artifact.path.clone(),
            versioned: artifact.versioned,
            language: artifact.language.clone(),
            header_line: artifact.header_line,
            size: artifact.content.len(),
        }
    }
}

impl ListCommand {
    pub fn new(markdown_file: impl Into<PathBuf>, format: &str) -> Self {
        Self {
            markdown_file: markdown_file.into(),
            format: format.to_string(),
        }
    }

    /// Print the artifact listing.
    ///
    /// # Errors
    ///
    /// Returns an error for an unknown format or an unreadable document.
    pub fn execute(self) -> Result<()> {
        self.validate_arguments()?;

        let document = SourceDocument::read(&self.markdown_file)?;
        let artifacts = ArtifactExtractor::new()?.extract(&document);
        println!("{}", self.render(&artifacts)?);
        Ok(())
    }

    fn validate_arguments(&self) -> Result<()> {
        match self.format.as_str() {
            "text" | "json" => Ok(()),
            other => bail!("Invalid format '{other}'. Valid formats are: text, json"),
        }
    }

    /// Render the listing in the selected format.
    pub fn render(&self, artifacts: &ArtifactMap) -> Result<String> {
        let items: Vec<ListItem> = artifacts.iter().map(ListItem::from).collect();

        if self.format == "json" {
            return Ok(serde_json::to_string_pretty(&items)?);
        }

        if items.is_empty() {
            return Ok("No artifacts found.".to_string());
        }

        let mut out = format!("{} artifacts in {}:", items.len(), self.markdown_file.display());
        for item in &items {
            let mut notes = vec![format!("line {}", item.header_line), format!("{} bytes", item.size)];
            if let Some(language) = &item.language {
                notes.insert(0, language.clone());
            }
            if item.versioned {
                notes.push("versioned".to_string());
            }
            out.push_str(&format!("\n  {} {}", item.path.bold(), format!("({})", notes.join(", ")).dimmed()));
        }
        Ok(out)
    }
}
