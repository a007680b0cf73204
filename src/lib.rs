//! Checklist CLI - a local checklist manager
//!
//! Keeps a single ordered list of items, each with a name and a priority,
//! in a JSON file. Items are added, removed, moved, renamed and prioritized
//! by their 1-based position.

pub mod domain;
pub mod storage;
pub mod cli;

pub use domain::{Checklist, Item, Priority};
