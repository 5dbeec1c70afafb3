//! Command-line interface for mdscaffold.
//!
//! The CLI is built on `clap` derive. Global flags control logging and color;
//! each subcommand lives in its own module and exposes an `execute` method.
//!
//! # Commands
//!
//! - `scaffold` - Extract artifacts from a markdown export and write them out,
//!   optionally arranged by a YAML structure declaration
//! - `list` - Show the artifacts a markdown export contains without writing
//!   anything
//!
//! # Global Options
//!
//! - `--verbose` - Trace every header, fence and matching decision
//! - `--quiet` - Only log errors
//! - `--no-color` - Disable colored output
//!
//! # Usage Examples
//!
//! ```bash
//! # Dump every artifact into ./chat-export/
//! mdscaffold scaffold chat-export.md
//!
//! # Arrange artifacts according to a declared tree
//! mdscaffold scaffold chat-export.md --structure layout.yaml --output my-app
//!
//! # See what would be written
//! mdscaffold scaffold chat-export.md -s layout.yaml --dry-run
//!
//! # Inspect the extracted artifacts as JSON
//! mdscaffold list chat-export.md --format json
//! ```
//!
//! # Logging
//!
//! Diagnostics go to stderr through `tracing`. `--verbose` selects `debug`,
//! `--quiet` selects `error`; otherwise `RUST_LOG` is honored and the
//! default is `warn`. Command results go to stdout.

mod list;
mod scaffold;


pub use list::{ListCommand, ListItem};
pub use scaffold::ScaffoldCommand;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::constants::DEFAULT_LOG_LEVEL;

/// Runtime configuration derived from global flags.
///
/// Built once by [`Cli::build_config`] and applied before dispatch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliConfig {
    /// Explicit log filter. `None` defers to `RUST_LOG`, then to `warn`.
    pub log_level: Option<String>,

    /// Whether colored output is disabled.
    pub no_color: bool,
}

impl CliConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the global tracing subscriber and color settings.
    ///
    /// Only the first subscriber installed in a process takes effect; later
    /// calls leave it in place.
    pub fn apply(&self) {
        if self.no_color {
            colored::control::set_override(false);
        }

        let filter = match &self.log_level {
            Some(level) => EnvFilter::new(level),
            None => EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL)),
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_ansi(!self.no_color)
            .try_init();
    }
}

/// Extract code artifacts from markdown exports and scaffold projects.
#[derive(Parser, Debug)]
#[command(
    name = "mdscaffold",
    version,
    about = "Extract code artifacts from a markdown export and scaffold a project",
    long_about = "mdscaffold finds bolded file-path headers followed by fenced code blocks in a \
markdown export and writes them out as real files, optionally arranged by a YAML structure \
declaration."
)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Show every header, fence and matching decision.
    ///
    /// Equivalent to `RUST_LOG=debug`. Mutually exclusive with `--quiet`.
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Only report errors.
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output.
    ///
    /// `NO_COLOR` in the environment is honored as well.
    #[arg(long, global = true)]
    no_color: bool,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write extracted artifacts to disk, optionally following a structure file.
    Scaffold(ScaffoldCommand),

    /// List the artifacts found in a markdown export.
    List(ListCommand),
}

impl Cli {
    /// Apply global configuration and run the selected command.
    pub fn execute(self) -> Result<()> {
        let config = self.build_config();
        self.execute_with_config(config)
    }

    /// Translate global flags into a [`CliConfig`].
    ///
    /// `--verbose` maps to `debug` and `--quiet` to `error`; with neither,
    /// the level is left to `RUST_LOG`.
    #[must_use]
    pub fn build_config(&self) -> CliConfig {
        let log_level = if self.verbose {
            Some("debug".to_string())
        } else if self.quiet {
            Some("error".to_string())
        } else {
            None
        };

        CliConfig {
            log_level,
            no_color: self.no_color,
        }
    }

    /// Run with an explicit configuration.
    pub fn execute_with_config(self, config: CliConfig) -> Result<()> {
        config.apply();

        match self.command {
            Commands::Scaffold(cmd) => cmd.execute(),
            Commands::List(cmd) => cmd.execute(),
        }
    }
}
