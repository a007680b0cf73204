//! Main CLI application structure

use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

use super::checklist;
use super::output::{Output, OutputFormat};
use crate::storage::{ChecklistStore, Config, StoreError};

const EXAMPLES: &str = "\
Examples:
  checklist add Buy milk
  checklist rm 2
  checklist mv 3 1
  checklist prio 1 high
  checklist edit 1 Buy oat milk
  checklist --file ~/work.json";

#[derive(Parser)]
#[command(name = "checklist")]
#[command(author, version, about = "Simple command-line checklist app")]
#[command(after_help = EXAMPLES)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Checklist file (defaults to ~/.checklist.json)
    #[arg(long, global = true, env = "CHECKLIST_FILE", value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true)]
    pub format: Option<OutputFormat>,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the checklist (default)
    List,

    /// Add an item to the end of the checklist
    Add {
        /// Item text; multiple words are joined with spaces
        #[arg(required = true, allow_hyphen_values = true)]
        name: Vec<String>,
    },

    /// Remove the item at a 1-based index
    Rm {
        /// Item index
        #[arg(allow_negative_numbers = true)]
        index: String,
    },

    /// Move an item from one 1-based index to another
    Mv {
        /// Current index
        #[arg(allow_negative_numbers = true)]
        src: String,

        /// New index
        #[arg(allow_negative_numbers = true)]
        dst: String,
    },

    /// Set an item's priority (none, low, med, high)
    Prio {
        /// Item index
        #[arg(allow_negative_numbers = true)]
        index: String,

        /// Priority level
        level: String,
    },

    /// Rename the item at a 1-based index
    Edit {
        /// Item index
        #[arg(allow_negative_numbers = true)]
        index: String,

        /// New item text; multiple words are joined with spaces
        #[arg(required = true, allow_hyphen_values = true)]
        name: Vec<String>,
    },
}

/// Global options that take a value
const VALUE_OPTIONS: [&str; 2] = ["--file", "--format"];

/// Moves global long options in front of the subcommand
///
/// Item text accepts words starting with `-`, and clap hands everything after
/// the first such word to the text, so `add -5 degrees --file x.json` would
/// otherwise store `--file x.json` as part of the item. Arguments after `--`
/// are never moved, and an option missing its value stays put for clap to
/// report.
fn hoist_global_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut args = args.into_iter().map(Into::<OsString>::into);
    let mut front: Vec<OsString> = args.next().into_iter().collect();
    let mut rest = Vec::new();

    while let Some(arg) = args.next() {
        if arg == "--" {
            rest.push(arg);
            rest.extend(args.by_ref());
            break;
        }

        let (standalone, takes_value) = {
            let text = arg.to_string_lossy();
            let inline = VALUE_OPTIONS
                .iter()
                .any(|opt| text.strip_prefix(opt).is_some_and(|v| v.starts_with('=')));
            (
                inline || text == "--verbose",
                VALUE_OPTIONS.iter().any(|opt| *opt == text),
            )
        };

        if standalone {
            front.push(arg);
        } else if takes_value {
            match args.next() {
                Some(value) => {
                    front.push(arg);
                    front.push(value);
                }
                None => rest.push(arg),
            }
        } else {
            rest.push(arg);
        }
    }

    front.extend(rest);
    front
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse_from(hoist_global_args(std::env::args_os()));
    let config = Config::load()?;
    let output = Output::new(config.output_format(cli.format), cli.verbose);

    output.verbose("Checklist CLI starting");

    let path = config.store_path(cli.file.as_deref())?;
    output.verbose_ctx("config", &format!("Using checklist file: {}", path.display()));
    let store = ChecklistStore::new(path);

    match cli.command.unwrap_or(Commands::List) {
        Commands::List => checklist::list(&output, &store)?,
        Commands::Add { name } => checklist::add(&output, &store, &name.join(" "))?,
        Commands::Rm { index } => checklist::remove(&output, &store, &index)?,
        Commands::Mv { src, dst } => checklist::move_item(&output, &store, &src, &dst)?,
        Commands::Prio { index, level } => checklist::prioritize(&output, &store, &index, &level)?,
        Commands::Edit { index, name } => {
            checklist::edit(&output, &store, &index, &name.join(" "))?
        }
    }

    output.verbose("Command completed successfully");
    Ok(())
}

/// Maps a failed run to the process exit status: 1 when the checklist
/// could not be saved, 2 for every other error
pub fn exit_status(err: &anyhow::Error) -> u8 {
    if err.chain().any(|cause| cause.is::<StoreError>()) {
        1
    } else {
        2
    }
}

/// [`exit_status`] as an [`ExitCode`]
pub fn exit_code(err: &anyhow::Error) -> ExitCode {
    ExitCode::from(exit_status(err))
}
