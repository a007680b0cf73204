//! Checklist item model
//!
//! An item is a name plus a priority. It has no identity beyond its
//! position in the checklist.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

use super::checklist::ChecklistError;

/// Priority of an item
///
/// Priorities read from disk are kept verbatim, so a value outside the
/// known levels (including non-string JSON) survives as
/// [`Priority::Unknown`] until `prio` rewrites it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Value", into = "Value")]
pub enum Priority {
    #[default]
    None,
    Low,
    Med,
    High,
    Unknown(Value),
}

impl Priority {
    /// Returns the single-character glyph shown in rendered output
    pub fn mark(&self) -> char {
        match self {
            Priority::None => 'x',
            Priority::Low => '-',
            Priority::Med => '*',
            Priority::High => '!',
            Priority::Unknown(_) => '?',
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let level = match self {
            Priority::None => "none",
            Priority::Low => "low",
            Priority::Med => "med",
            Priority::High => "high",
            Priority::Unknown(Value::String(s)) => s,
            Priority::Unknown(other) => return write!(f, "{}", other),
        };
        f.write_str(level)
    }
}

/// Strict, case-insensitive parse used by commands that set a priority
impl FromStr for Priority {
    type Err = ChecklistError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "none" => Ok(Priority::None),
            "low" => Ok(Priority::Low),
            "med" => Ok(Priority::Med),
            "high" => Ok(Priority::High),
            _ => Err(ChecklistError::InvalidPriority(s.to_string())),
        }
    }
}

/// Lenient conversion used when reading stored data; never fails
impl From<Value> for Priority {
    fn from(value: Value) -> Self {
        match value.as_str() {
            Some("none") => Priority::None,
            Some("low") => Priority::Low,
            Some("med") => Priority::Med,
            Some("high") => Priority::High,
            _ => Priority::Unknown(value),
        }
    }
}

impl From<Priority> for Value {
    fn from(priority: Priority) -> Self {
        match priority {
            Priority::Unknown(raw) => raw,
            known => Value::String(known.to_string()),
        }
    }
}

/// A single checklist entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,

    #[serde(default)]
    pub priority: Priority,
}

impl Item {
    /// Creates an item with the default priority
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            priority: Priority::None,
        }
    }

    /// Sets the priority (builder style)
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }
}
