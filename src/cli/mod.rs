//! # Command-Line Interface
//!
//! User-facing commands and output formatting.
//!
//! ## Commands
//!
//! | Command | Effect |
//! |---------|--------|
//! | `list` (or no command) | Print the checklist |
//! | `add <name...>` | Append an item |
//! | `rm <idx>` | Remove an item |
//! | `mv <src> <dst>` | Move an item |
//! | `prio <idx> <level>` | Set priority (`none`, `low`, `med`, `high`) |
//! | `edit <idx> <name...>` | Rename an item |
//!
//! Indices are 1-based. `--file <path>` may appear anywhere.
//!
//! ## Output Formats
//!
//! All commands support `--format`:
//! - `text` (default) - Human-readable output
//! - `json` - Machine-parseable JSON
//!
//! ## Exit Status
//!
//! `0` on success (including "nothing to do"), `1` when the checklist
//! could not be saved, `2` for usage and validation errors.
//!
//! ## Entry Point
//!
//! Call [`run()`] to parse arguments and execute the appropriate command,
//! then [`exit_code()`] on failure.

mod app;
mod checklist;
mod output;

pub use app::{exit_code, exit_status, run, Cli, Commands};
pub use checklist::render;
pub use output::{Output, OutputFormat};
