//! # Storage Layer
//!
//! Persistence for the checklist and the user configuration.
//!
//! ## Storage Formats
//!
//! | Data | Format | Location |
//! |------|--------|----------|
//! | Checklist | JSON array of `{name, priority}` | `~/.checklist.json` or `--file` |
//! | Legacy checklist | JSON array of strings (read only) | same |
//! | Config | TOML | `~/.config/checklist/config.toml` |
//!
//! ## Concurrency
//!
//! Writes go to a locked temp file that is renamed over the checklist.
//! Nothing coordinates separate invocations: the last writer wins.

mod config;
mod store;

pub use config::{expand_home, Config, ConfigError, OutputFormat, CONFIG_ENV, DEFAULT_FILE_NAME};
pub use store::{ChecklistStore, Snapshot, StoreError, StoreFormat};
