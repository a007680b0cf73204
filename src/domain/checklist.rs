//! Ordered checklist and its editing operations
//!
//! Positions exposed to users are 1-based; [`Position`] carries a validated
//! 1-based index and converts to a 0-based offset internally. Mutating
//! operations take positions that were already validated against the
//! current length with [`validate_index`] (or [`Checklist::position`]).

use std::fmt;
use std::num::IntErrorKind;

use thiserror::Error;

use super::item::{Item, Priority};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChecklistError {
    #[error("{label} must be a number (got '{got}').")]
    NotANumber { label: String, got: String },

    #[error("{label} out of range. Must be between 1 and {len}.")]
    OutOfRange { label: String, len: usize },

    #[error("item cannot be empty.")]
    EmptyItem,

    #[error("priority must be one of none|low|med|high (got '{0}').")]
    InvalidPriority(String),
}

/// A 1-based position in a checklist
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position(usize);

impl Position {
    /// Creates a position from a 1-based index; `None` for zero
    pub fn new(one_based: usize) -> Option<Self> {
        (one_based >= 1).then_some(Self(one_based))
    }

    /// Returns the 1-based index
    pub fn get(self) -> usize {
        self.0
    }

    fn offset(self) -> usize {
        self.0 - 1
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Parses `text` as a 1-based index and checks it against `len`.
///
/// With `len == 0` every index is out of range; callers that want a
/// friendlier message must check for an empty list first.
pub fn validate_index(text: &str, len: usize, label: &str) -> Result<Position, ChecklistError> {
    let out_of_range = || ChecklistError::OutOfRange {
        label: label.to_string(),
        len,
    };

    let value: i64 = match text.trim().parse() {
        Ok(value) => value,
        // Well-formed but wider than i64 is still a number
        Err(e) if matches!(e.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => {
            return Err(out_of_range())
        }
        Err(_) => {
            return Err(ChecklistError::NotANumber {
                label: label.to_string(),
                got: text.to_string(),
            })
        }
    };

    usize::try_from(value)
        .ok()
        .filter(|&idx| idx <= len)
        .and_then(Position::new)
        .ok_or_else(out_of_range)
}

/// The in-memory checklist
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Checklist {
    items: Vec<Item>,
}

impl Checklist {
    /// Returns the items in order
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the item at a position
    pub fn get(&self, pos: Position) -> Option<&Item> {
        self.items.get(pos.offset())
    }

    /// Iterates over items paired with their 1-based positions
    pub fn iter(&self) -> impl Iterator<Item = (Position, &Item)> {
        self.items
            .iter()
            .enumerate()
            .map(|(i, item)| (Position(i + 1), item))
    }

    /// Validates a user-supplied index against this checklist
    pub fn position(&self, text: &str, label: &str) -> Result<Position, ChecklistError> {
        validate_index(text, self.len(), label)
    }

    /// Appends a new item with priority `none`, returning its position
    pub fn add(&mut self, name: &str) -> Result<Position, ChecklistError> {
        let name = non_empty(name)?;
        self.items.push(Item::new(name));
        Ok(Position(self.items.len()))
    }

    /// Removes and returns the item at `pos`; later items shift down by one
    pub fn remove(&mut self, pos: Position) -> Item {
        self.items.remove(pos.offset())
    }

    /// Moves the item at `src` so that it ends up at `dst`.
    ///
    /// `dst` is applied to the list after removal and clamped to its end.
    /// Returns the position the item actually landed on.
    pub fn move_item(&mut self, src: Position, dst: Position) -> Position {
        let item = self.items.remove(src.offset());
        let dst = Position(dst.get().min(self.items.len() + 1));
        self.items.insert(dst.offset(), item);
        dst
    }

    /// Sets the priority at `pos` from a user-supplied level
    pub fn set_priority(&mut self, pos: Position, level: &str) -> Result<Priority, ChecklistError> {
        let priority: Priority = level.parse()?;
        self.items[pos.offset()].priority = priority.clone();
        Ok(priority)
    }

    /// Replaces the name at `pos`, returning the trimmed name stored
    pub fn rename(&mut self, pos: Position, new_name: &str) -> Result<&str, ChecklistError> {
        let name = non_empty(new_name)?;
        let item = &mut self.items[pos.offset()];
        item.name = name.to_string();
        Ok(&item.name)
    }
}

impl From<Vec<Item>> for Checklist {
    fn from(items: Vec<Item>) -> Self {
        Self { items }
    }
}

fn non_empty(name: &str) -> Result<&str, ChecklistError> {
    let name = name.trim();
    if name.is_empty() {
        Err(ChecklistError::EmptyItem)
    } else {
        Ok(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn checklist(names: &[&str]) -> Checklist {
        Checklist::from(names.iter().map(|n| Item::new(*n)).collect::<Vec<_>>())
    }

    fn names(list: &Checklist) -> Vec<&str> {
        list.items().iter().map(|i| i.name.as_str()).collect()
    }

    fn pos(n: usize) -> Position {
        Position::new(n).unwrap()
    }

    #[test]
    fn validate_index_accepts_bounds() {
        assert_eq!(validate_index("1", 3, "item_idx").unwrap(), pos(1));
        assert_eq!(validate_index("3", 3, "item_idx").unwrap(), pos(3));
        assert_eq!(validate_index(" 2 ", 3, "item_idx").unwrap(), pos(2));
    }

    #[test]
    fn validate_index_rejects_non_numbers() {
        let err = validate_index("two", 3, "item_idx").unwrap_err();
        assert_eq!(err.to_string(), "item_idx must be a number (got 'two').");
    }

    #[test]
    fn validate_index_rejects_out_of_range() {
        for text in ["0", "4", "-1"] {
            let err = validate_index(text, 3, "src_idx").unwrap_err();
            assert_eq!(
                err.to_string(),
                "src_idx out of range. Must be between 1 and 3."
            );
        }
    }

    #[test]
    fn validate_index_treats_huge_numbers_as_out_of_range() {
        for text in ["99999999999999999999", "-99999999999999999999"] {
            let err = validate_index(text, 3, "item_idx").unwrap_err();
            assert_eq!(
                err.to_string(),
                "item_idx out of range. Must be between 1 and 3."
            );
        }
    }

    #[test]
    fn validate_index_on_empty_list_is_always_out_of_range() {
        let err = validate_index("1", 0, "item_idx").unwrap_err();
        assert_eq!(
            err,
            ChecklistError::OutOfRange {
                label: "item_idx".to_string(),
                len: 0
            }
        );
    }

    #[test]
    fn add_trims_and_appends() {
        let mut list = checklist(&["A"]);
        let at = list.add("  Buy milk  ").unwrap();
        assert_eq!(at, pos(2));
        assert_eq!(list.get(at).unwrap(), &Item::new("Buy milk"));
    }

    #[test]
    fn add_rejects_blank_name() {
        let mut list = Checklist::default();
        assert_eq!(list.add("   ").unwrap_err(), ChecklistError::EmptyItem);
        assert!(list.is_empty());
    }

    #[test]
    fn remove_shifts_later_items() {
        let mut list = checklist(&["A", "B", "C"]);
        let removed = list.remove(pos(2));
        assert_eq!(removed.name, "B");
        assert_eq!(names(&list), ["A", "C"]);
    }

    #[test]
    fn move_last_to_first() {
        let mut list = checklist(&["A", "B", "C"]);
        let landed = list.move_item(pos(3), pos(1));
        assert_eq!(landed, pos(1));
        assert_eq!(names(&list), ["C", "A", "B"]);
    }

    #[test]
    fn move_first_to_last() {
        let mut list = checklist(&["A", "B", "C"]);
        let landed = list.move_item(pos(1), pos(3));
        assert_eq!(landed, pos(3));
        assert_eq!(names(&list), ["B", "C", "A"]);
    }

    /// Every (src, dst, len) combination for small lists: the item lands
    /// exactly at `dst` and everything else keeps its relative order.
    #[test]
    fn move_table() {
        for len in 1..=6 {
            let original: Vec<String> = (1..=len).map(|i| format!("item{}", i)).collect();
            for src in 1..=len {
                for dst in 1..=len {
                    let mut list =
                        Checklist::from(original.iter().map(Item::new).collect::<Vec<_>>());
                    let landed = list.move_item(pos(src), pos(dst));

                    assert_eq!(landed, pos(dst), "len={} src={} dst={}", len, src, dst);
                    assert_eq!(list.len(), len);
                    assert_eq!(list.get(landed).unwrap().name, original[src - 1]);

                    let mut expected = original.clone();
                    let moved = expected.remove(src - 1);
                    expected.insert(dst - 1, moved);
                    let actual: Vec<String> =
                        list.items().iter().map(|i| i.name.clone()).collect();
                    assert_eq!(actual, expected, "len={} src={} dst={}", len, src, dst);
                }
            }
        }
    }

    #[test]
    fn set_priority_normalizes_level() {
        let mut list = checklist(&["A"]);
        let level = list.set_priority(pos(1), "HIGH").unwrap();
        assert_eq!(level, Priority::High);
        assert_eq!(list.get(pos(1)).unwrap().priority, Priority::High);
    }

    #[test]
    fn set_priority_rejects_unknown_level() {
        let mut list = checklist(&["A"]);
        let err = list.set_priority(pos(1), "extreme").unwrap_err();
        assert_eq!(err, ChecklistError::InvalidPriority("extreme".to_string()));
        assert_eq!(list.get(pos(1)).unwrap().priority, Priority::None);
    }

    #[test]
    fn rename_replaces_name_and_keeps_priority() {
        let mut list = Checklist::from(vec![Item::new("Old").with_priority(Priority::Med)]);
        assert_eq!(list.rename(pos(1), " New name ").unwrap(), "New name");
        assert_eq!(
            list.get(pos(1)).unwrap(),
            &Item::new("New name").with_priority(Priority::Med)
        );
    }

    #[test]
    fn rename_rejects_blank_name() {
        let mut list = checklist(&["Old"]);
        assert_eq!(list.rename(pos(1), "").unwrap_err(), ChecklistError::EmptyItem);
        assert_eq!(names(&list), ["Old"]);
    }

    #[test]
    fn iter_numbers_from_one() {
        let list = checklist(&["A", "B"]);
        let numbered: Vec<(usize, &str)> = list
            .iter()
            .map(|(p, item)| (p.get(), item.name.as_str()))
            .collect();
        assert_eq!(numbered, [(1, "A"), (2, "B")]);
    }

    fn names_strategy() -> impl Strategy<Value = Vec<String>> {
        prop::collection::vec("[a-z]{1,8}", 1..12)
    }

    proptest! {
        #[test]
        fn remove_keeps_other_items_in_order(names in names_strategy(), pick in any::<prop::sample::Index>()) {
            let mut list = Checklist::from(names.iter().map(Item::new).collect::<Vec<_>>());
            let idx = pick.index(names.len()) + 1;

            let removed = list.remove(pos(idx));

            prop_assert_eq!(&removed.name, &names[idx - 1]);
            prop_assert_eq!(list.len(), names.len() - 1);
            for (p, item) in list.iter() {
                let original = if p.get() < idx { p.get() } else { p.get() + 1 };
                prop_assert_eq!(&item.name, &names[original - 1]);
            }
        }

        #[test]
        fn move_back_restores_order(
            names in names_strategy(),
            a in any::<prop::sample::Index>(),
            b in any::<prop::sample::Index>(),
        ) {
            let original = Checklist::from(names.iter().map(Item::new).collect::<Vec<_>>());
            let mut list = original.clone();
            let src = pos(a.index(names.len()) + 1);
            let dst = pos(b.index(names.len()) + 1);

            let landed = list.move_item(src, dst);
            list.move_item(landed, src);

            prop_assert_eq!(list, original);
        }

        #[test]
        fn add_appends_with_no_priority(names in names_strategy(), name in "[a-z]{1,8}") {
            let mut list = Checklist::from(names.iter().map(Item::new).collect::<Vec<_>>());
            let at = list.add(&name).unwrap();

            prop_assert_eq!(at.get(), names.len() + 1);
            prop_assert_eq!(list.get(at).unwrap().priority.clone(), Priority::None);
        }
    }
}
