//! Domain models for the checklist
//!
//! Contains the list model and its editing rules without any I/O concerns.

mod checklist;
mod item;

pub use checklist::{validate_index, Checklist, ChecklistError, Position};
pub use item::{Item, Priority};
