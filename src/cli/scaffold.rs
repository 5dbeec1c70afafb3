//! The `scaffold` command.
//!
//! Extracts artifacts from a markdown export and writes them out. With a
//! structure file, files are arranged by the declared tree; without one (or
//! when the declaration cannot be used), every artifact is written at its own
//! path below the output directory.
//!
//! # Examples
//!
//! ```bash
//! mdscaffold scaffold export.md
//! mdscaffold scaffold export.md --structure layout.yaml --output ./app
//! mdscaffold scaffold export.md -s layout.yaml --dry-run
//! ```

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use std::path::{Path, PathBuf};

use crate::installer::{DiskWorkspace, DryRunWorkspace, write_artifacts};
use crate::markdown::{ArtifactExtractor, ArtifactMap};
use crate::resolver::{Layout, ScaffoldReport, TreeResolver, Workspace};
use crate::structure::StructureFile;

/// Scaffold a project from a markdown export.
#[derive(Args, Debug, Clone)]
pub struct ScaffoldCommand {
    /// Markdown export to read artifacts from
    #[arg(value_name = "MARKDOWN_FILE")]
    markdown_file: PathBuf,

    /// YAML file declaring the project tree
    #[arg(short, long, value_name = "FILE")]
    structure: Option<PathBuf>,

    /// Output directory [default: the markdown file's name without extension]
    #[arg(short, long, value_name = "DIR")]
    output: Option<PathBuf>,

    /// Resolve everything and print the plan without writing files
    #[arg(long)]
    dry_run: bool,
}

impl ScaffoldCommand {
    /// Create a command for `markdown_file` with default options.
    pub fn new(markdown_file: impl Into<PathBuf>) -> Self {
        Self {
            markdown_file: markdown_file.into(),
            structure: None,
            output: None,
            dry_run: false,
        }
    }

    /// Use a structure declaration.
    #[must_use]
    pub fn with_structure(mut self, structure: impl Into<PathBuf>) -> Self {
        self.structure = Some(structure.into());
        self
    }

    /// Write below `output` instead of the default directory.
    #[must_use]
    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = Some(output.into());
        self
    }

    /// Output directory, defaulting to the markdown file's stem.
    #[must_use]
    pub fn output_dir(&self) -> PathBuf {
        match &self.output {
            Some(output) => output.clone(),
            None => self
                .markdown_file
                .file_stem()
                .map_or_else(|| PathBuf::from("scaffold"), PathBuf::from),
        }
    }

    /// Run the command and print a summary.
    ///
    /// # Errors
    ///
    /// Fails only if the output directory itself cannot be created. Problems
    /// with individual files are reported in the summary instead.
    pub fn execute(self) -> Result<()> {
        println!("Processing markdown file: '{}'", self.markdown_file.display());

        let extractor = ArtifactExtractor::new()?;
        let artifacts = extractor.extract_file(&self.markdown_file);
        for artifact in artifacts.iter() {
            println!(
                "  {} {}{}",
                "[+]".green(),
                artifact.path,
                if artifact.versioned {
                    " (versioned)"
                } else {
                    ""
                }
            );
        }

        let structure_exists = self.structure.as_deref().is_some_and(Path::exists);
        if artifacts.is_empty() && !structure_exists {
            println!("\nNo artifacts found and no structure file provided. Nothing to do.");
            return Ok(());
        }

        let report = if self.dry_run {
            let mut workspace = DryRunWorkspace::new();
            let report = self.scaffold(&artifacts, &mut workspace)?;
            print_plan(&report);
            report
        } else {
            let mut workspace = DiskWorkspace::new(self.output_dir());
            self.scaffold(&artifacts, &mut workspace)?
        };

        print_summary(&report, self.dry_run);
        Ok(())
    }

    /// Write artifacts through `workspace`, following the structure file
    /// when one is given and usable.
    pub fn scaffold<W: Workspace>(
        &self,
        artifacts: &ArtifactMap,
        workspace: &mut W,
    ) -> Result<ScaffoldReport> {
        let output_dir = self.output_dir();
        workspace
            .ensure_dir(&output_dir)
            .with_context(|| format!("Failed to create output directory {}", output_dir.display()))?;
        println!("\nOutput directory: '{}'", output_dir.display());

        let Some(structure_path) = &self.structure else {
            println!("\nNo structure file provided. Creating files from found artifacts only.");
            return Ok(write_artifacts(artifacts, &output_dir, workspace));
        };

        let declaration = match StructureFile::load(structure_path) {
            Ok(declaration) => declaration,
            Err(e) => {
                tracing::debug!("Structure file rejected: {:?}", e);
                eprintln!("{}: {}", "warning".yellow().bold(), e);
                println!("\nCreating files from found artifacts only.");
                return Ok(write_artifacts(artifacts, &output_dir, workspace));
            }
        };

        println!("\nUsing structure from: '{}'", structure_path.display());
        let project_root = declaration.project_root(&output_dir);
        if project_root != output_dir {
            if let Err(e) = workspace.ensure_dir(&project_root) {
                let mut report = ScaffoldReport::default();
                report.record_failure(&project_root.display().to_string(), &e);
                return Ok(report);
            }
        }
        println!("Scaffolding project in '{}'...", project_root.display());

        if declaration.has_structure() {
            tracing::debug!(
                "Resolving {} declared files against {} artifacts",
                declaration.file_count(),
                artifacts.len()
            );
            Ok(TreeResolver::new(project_root, artifacts, workspace).resolve(&declaration.structure))
        } else {
            tracing::warn!(
                "Structure file {} is missing or has an empty 'structure' key",
                structure_path.display()
            );
            println!("Creating files from found artifacts only.");
            Ok(write_artifacts(artifacts, &project_root, workspace))
        }
    }
}

fn print_plan(report: &ScaffoldReport) {
    println!("\n{}", "Planned files:".bold());
    for file in &report.resolved {
        println!("  {} ({}, {} bytes)", file.relative_path, file.source, file.content.len());
    }
}

/// Closing line for a run where nothing went wrong.
///
/// `None` when a file was created empty or an entry failed; those runs list
/// the affected paths instead.
fn completion_message(report: &ScaffoldReport, dry_run: bool) -> Option<String> {
    if !report.failures.is_empty() || !report.empty_files.is_empty() {
        return None;
    }

    let message = match report.layout {
        Layout::Declared => {
            "All declared files were populated from artifacts or other content sources."
                .to_string()
        }
        Layout::Flat if report.resolved.is_empty() => "No artifacts to write.".to_string(),
        Layout::Flat => format!(
            "{} {} {} at {} own {}.",
            report.resolved.len(),
            if report.resolved.len() == 1 { "artifact" } else { "artifacts" },
            if dry_run { "would be written" } else { "written" },
            if report.resolved.len() == 1 { "its" } else { "their" },
            if report.resolved.len() == 1 { "path" } else { "paths" },
        ),
    };
    Some(message)
}

fn print_summary(report: &ScaffoldReport, dry_run: bool) {
    println!("\n{}", "--- Summary ---".bold());

    let empty_files = report.sorted_empty_files();
    if let Some(message) = completion_message(report, dry_run) {
        println!("{}", message.green());
    } else if !empty_files.is_empty() {
        println!(
            "{}",
            "The following files were created empty as no matching artifact or content was found:"
                .yellow()
        );
        for path in empty_files {
            println!("  - {path}");
        }
    }

    if !report.failures.is_empty() {
        println!("{}", "The following entries could not be written:".red());
        for failure in &report.failures {
            println!("  - {}: {}", failure.path, failure.reason);
        }
    }

    if dry_run {
        println!("\nDry run: no files were written.");
    }
    println!("\n{}", "Done.".green().bold());
}
