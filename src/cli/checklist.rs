//! Checklist commands
//!
//! Each command reads the store, applies at most one change, writes the
//! whole checklist back and prints it. Commands that need an existing item
//! stop early on an empty checklist without touching the store.

use anyhow::Result;

use super::output::Output;
use crate::domain::Checklist;
use crate::storage::{ChecklistStore, StoreFormat};

const ITEM_IDX: &str = "item_idx";
const SRC_IDX: &str = "src_idx";
const DST_IDX: &str = "dst_idx";

/// Renders the checklist as numbered lines
pub fn render(list: &Checklist) -> Vec<String> {
    if list.is_empty() {
        return vec!["Checklist is empty.".to_string()];
    }

    list.iter()
        .map(|(pos, item)| format!("{}. [{}] {}", pos, item.priority.mark(), item.name))
        .collect()
}

pub fn list(output: &Output, store: &ChecklistStore) -> Result<()> {
    let list = load(output, store);
    output.checklist(&list);
    Ok(())
}

pub fn add(output: &Output, store: &ChecklistStore, name: &str) -> Result<()> {
    let mut list = load(output, store);

    let pos = list.add(name)?;
    output.verbose_ctx("add", &format!("Appended at #{}", pos));

    save(output, store, &list)?;
    output.report(&format!("Added: '{}'", name.trim()), &list);
    Ok(())
}

pub fn remove(output: &Output, store: &ChecklistStore, index: &str) -> Result<()> {
    let mut list = load(output, store);
    if is_empty(output, &list, "remove") {
        return Ok(());
    }

    let pos = list.position(index, ITEM_IDX)?;
    let removed = list.remove(pos);

    save(output, store, &list)?;
    output.report(
        &format!("Removed: '{}' (was #{})", removed.name, pos),
        &list,
    );
    Ok(())
}

pub fn move_item(output: &Output, store: &ChecklistStore, src: &str, dst: &str) -> Result<()> {
    let mut list = load(output, store);
    if is_empty(output, &list, "move") {
        return Ok(());
    }

    let src = list.position(src, SRC_IDX)?;
    let dst = list.position(dst, DST_IDX)?;
    let landed = list.move_item(src, dst);
    if landed != dst {
        output.verbose_ctx("mv", &format!("Destination #{} clamped to #{}", dst, landed));
    }

    let name = list.get(landed).map(|item| item.name.clone()).unwrap_or_default();

    save(output, store, &list)?;
    output.report(
        &format!("Moved: '{}' from #{} to #{}", name, src, landed),
        &list,
    );
    Ok(())
}

pub fn prioritize(output: &Output, store: &ChecklistStore, index: &str, level: &str) -> Result<()> {
    let mut list = load(output, store);
    if is_empty(output, &list, "prioritize") {
        return Ok(());
    }

    let pos = list.position(index, ITEM_IDX)?;
    let priority = list.set_priority(pos, level)?;

    save(output, store, &list)?;
    output.report(&format!("Priority set: #{} -> {}", pos, priority), &list);
    Ok(())
}

pub fn edit(output: &Output, store: &ChecklistStore, index: &str, new_name: &str) -> Result<()> {
    let mut list = load(output, store);
    if is_empty(output, &list, "edit") {
        return Ok(());
    }

    let pos = list.position(index, ITEM_IDX)?;
    let name = list.rename(pos, new_name)?.to_string();

    save(output, store, &list)?;
    output.report(&format!("edited: #{} -> '{}'", pos, name), &list);
    Ok(())
}

/// Reads the checklist; a missing or corrupt store reads as empty
fn load(output: &Output, store: &ChecklistStore) -> Checklist {
    let snapshot = store.read();

    output.verbose_ctx(
        "store",
        &format!(
            "Read {} item(s) from {} ({})",
            snapshot.items.len(),
            store.path().display(),
            snapshot.format.as_str()
        ),
    );
    match snapshot.format {
        StoreFormat::Legacy => {
            output.verbose_ctx("store", "Upgraded legacy entries; rewritten on next save")
        }
        StoreFormat::Corrupt => {
            output.verbose_ctx("store", "Store unreadable; starting with an empty checklist")
        }
        StoreFormat::Missing | StoreFormat::Current => {}
    }

    Checklist::from(snapshot.items)
}

fn save(output: &Output, store: &ChecklistStore, list: &Checklist) -> Result<()> {
    store.save(list.items())?;
    output.verbose_ctx(
        "store",
        &format!("Saved {} item(s) to {}", list.len(), store.path().display()),
    );
    Ok(())
}

/// Prints the empty-list notice for `action`; true if there is nothing to do
fn is_empty(output: &Output, list: &Checklist, action: &str) -> bool {
    if list.is_empty() {
        output.success(&format!("Checklist is empty; nothing to {}.", action));
        true
    } else {
        false
    }
}
