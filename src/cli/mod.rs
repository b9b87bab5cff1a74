
use crate::sandbox::list_directory;
use crate::tools::{declarations, dispatch, ToolCall};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "codeassist",
    version,
    about = "List files inside a working directory, the way an agent tool call would"
)]
pub struct Cli {
    /// Directory that every request is confined to
    #[arg(long, global = true, default_value = ".")]
    pub workdir: PathBuf,

    /// Print debug logging to stderr
    #[arg(long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the immediate children of a directory inside the working directory
    Ls {
        /// Directory to list, relative to the working directory
        #[arg(default_value = ".")]
        directory: String,

        /// Sort entries by name
        #[arg(long)]
        sort: bool,

        /// Print entries as a JSON array
        #[arg(long)]
        json: bool,
    },

    /// Dispatch a tool call given as JSON, e.g. '{"name":"get_files_info","args":{}}'
    Call {
        /// Tool-call document
        call: String,
    },

    /// Print the tool declarations as JSON
    Tools,
}

/// What the binary should print and how it should exit
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Print to stdout, exit 0
    Success(String),
    /// Caller error: print to stderr, exit 1
    Failure(String),
}

/// Execute a parsed command line.
///
/// Listing and tool-call failures become `Outcome::Failure`; only unexpected
/// failures (e.g. serialization) surface as `Err`.
pub fn run(cli: &Cli) -> Result<Outcome> {
    tracing::debug!("Working directory: {}", cli.workdir.display());

    match &cli.command {
        Command::Ls {
            directory,
            sort,
            json,
        } => {
            let mut listing = match list_directory(&cli.workdir, directory) {
                Ok(listing) => listing,
                Err(e) => {
                    tracing::debug!("Listing {} failed ({})", directory, e.kind());
                    return Ok(Outcome::Failure(format!("Error: {}", e)));
                }
            };

            if *sort {
                listing.sort_by_name();
            }

            let output = if *json {
                serde_json::to_string_pretty(&listing).context("Failed to serialize listing")?
            } else {
                listing.render()
            };

            Ok(Outcome::Success(output))
        }
        Command::Call { call } => {
            let call: ToolCall = match serde_json::from_str(call) {
                Ok(call) => call,
                Err(e) => return Ok(Outcome::Failure(format!("Error: Invalid tool call: {}", e))),
            };

            let response = dispatch(&call, &cli.workdir);
            if response.is_error {
                Ok(Outcome::Failure(response.result))
            } else {
                Ok(Outcome::Success(response.result))
            }
        }
        Command::Tools => {
            let output = serde_json::to_string_pretty(&declarations())
                .context("Failed to serialize tool declarations")?;
            Ok(Outcome::Success(output))
        }
    }
}
