//! mdscaffold CLI entry point
//!
//! Parses arguments, runs the selected command and turns failures into a
//! readable error message with a non-zero exit status.

use anyhow::Result;
use clap::Parser;
use mdscaffold_cli::cli;
use mdscaffold_cli::core::user_friendly_error;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    // Set up colored output for Windows
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    match cli.execute() {
        Ok(()) => Ok(()),
        Err(e) => {
            user_friendly_error(e).display();
            std::process::exit(1);
        }
    }
}
