//! JSON storage for the checklist
//!
//! The checklist lives in a single JSON file holding an array of
//! `{"name", "priority"}` objects. Older files hold a bare array of strings;
//! those are upgraded in memory on read and only rewritten on the next save.
//! A missing or unparseable file reads as an empty checklist.
//!
//! Saves write a sibling temp file and rename it over the target. A
//! symlinked store is resolved first so the link itself survives, and the
//! target's permissions are carried over to the new file.

use std::ffi::OsString;
use std::fs::{self, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use fs2::FileExt;
use serde::Deserialize;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::domain::{Item, Priority};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("could not save file '{}'", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not serialize checklist")]
    Serialize(#[from] serde_json::Error),
}

/// What the store found on disk when it was read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreFormat {
    /// No file at the store path
    Missing,
    /// The file could not be read or matched no known layout
    Corrupt,
    /// Array of plain strings, upgraded in memory
    Legacy,
    /// Array of `{name, priority}` objects
    Current,
}

impl StoreFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            StoreFormat::Missing => "missing",
            StoreFormat::Corrupt => "corrupt",
            StoreFormat::Legacy => "legacy v1",
            StoreFormat::Current => "v2",
        }
    }
}

/// Items read from the store along with the layout they were found in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub items: Vec<Item>,
    pub format: StoreFormat,
}

impl Snapshot {
    fn empty(format: StoreFormat) -> Self {
        Self {
            items: Vec::new(),
            format,
        }
    }
}

/// Known on-disk layouts, tried in order
///
/// Current entries are taken as JSON objects only, so arrays of arrays
/// match neither layout.
#[derive(Deserialize)]
#[serde(untagged)]
enum Document {
    Current(Vec<Map<String, Value>>),
    Legacy(Vec<String>),
}

/// Lenient reading of a current-format entry: `name` is coerced to text,
/// `priority` is kept as whatever JSON value was stored
fn item_from_entry(mut entry: Map<String, Value>) -> Item {
    let name = match entry.remove("name") {
        Some(Value::String(s)) => s,
        None | Some(Value::Null) => String::new(),
        Some(other) => other.to_string(),
    };
    let priority = entry.remove("priority").map(Priority::from).unwrap_or_default();

    Item::new(name).with_priority(priority)
}

/// Store for the checklist file
pub struct ChecklistStore {
    path: PathBuf,
}

impl ChecklistStore {
    /// Creates a store backed by the file at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the path to the store file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads all items; never fails
    pub fn load(&self) -> Vec<Item> {
        self.read().items
    }

    /// Reads all items and reports which layout they were found in
    pub fn read(&self) -> Snapshot {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Snapshot::empty(StoreFormat::Missing)
            }
            Err(_) => return Snapshot::empty(StoreFormat::Corrupt),
        };

        match serde_json::from_str::<Document>(&content) {
            Ok(Document::Current(items)) => Snapshot {
                items: items.into_iter().map(item_from_entry).collect(),
                format: StoreFormat::Current,
            },
            Ok(Document::Legacy(names)) => Snapshot {
                items: names.into_iter().map(Item::new).collect(),
                format: StoreFormat::Legacy,
            },
            Err(_) => Snapshot::empty(StoreFormat::Corrupt),
        }
    }

    /// Writes all items in the current format (full rewrite)
    ///
    /// The parent directory must already exist.
    pub fn save(&self, items: &[Item]) -> Result<(), StoreError> {
        let mut body = serde_json::to_string_pretty(items)?;
        body.push('\n');

        let target = self.target();
        let permissions = fs::metadata(&target).ok().map(|meta| meta.permissions());

        let temp_path = temp_path(&target);
        let result = write_locked(&temp_path, body.as_bytes(), permissions)
            .and_then(|()| fs::rename(&temp_path, &target));

        if let Err(source) = result {
            let _ = fs::remove_file(&temp_path);
            return Err(StoreError::Write {
                path: self.path.clone(),
                source,
            });
        }

        Ok(())
    }

    /// The file a save replaces: the store path with symlinks resolved
    fn target(&self) -> PathBuf {
        fs::canonicalize(&self.path).unwrap_or_else(|_| self.path.clone())
    }
}

fn temp_path(target: &Path) -> PathBuf {
    let mut name = target
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("checklist"));
    name.push(".tmp");
    target.with_file_name(name)
}

fn write_locked(
    path: &Path,
    bytes: &[u8],
    permissions: Option<fs::Permissions>,
) -> io::Result<()> {
    let file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?;

    // Released when the file is dropped
    file.lock_exclusive()?;

    let mut writer = BufWriter::new(&file);
    writer.write_all(bytes)?;
    writer.flush()?;
    drop(writer);

    if let Some(permissions) = permissions {
        file.set_permissions(permissions)?;
    }

    file.sync_all()
}
