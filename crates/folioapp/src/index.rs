//! # Addressing Items
//!
//! Users address items by their zero-based position, the number shown by `folio list`.
//! Items written by folio also carry a UUID, which can be given instead of a position
//! when a stable reference matters (scripts, or when other writers may be deleting).
//!
//! A position is only meaningful against one particular read of the collection, so
//! selectors are always resolved *after* the read, inside the command that mutates.

use crate::codec::parse_index;
use crate::error::{Result, ValidationError};
use crate::model::Item;
use std::fmt;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector {
    Index(usize),
    Id(Uuid),
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::Index(i) => write!(f, "{}", i),
            Selector::Id(id) => write!(f, "{}", id),
        }
    }
}

/// Parses user input into a selector: a UUID, or else a position.
pub fn parse_selector(raw: &str) -> Result<Selector> {
    if let Ok(id) = Uuid::parse_str(raw.trim()) {
        return Ok(Selector::Id(id));
    }
    parse_index(raw).map(Selector::Index)
}

pub fn ensure_in_range(index: usize, len: usize) -> Result<()> {
    if index >= len {
        return Err(ValidationError::IndexOutOfRange { index, len }.into());
    }
    Ok(())
}

/// Resolves a selector to a position in `items`.
pub fn resolve(items: &[Item], selector: Selector) -> Result<usize> {
    match selector {
        Selector::Index(index) => {
            ensure_in_range(index, items.len())?;
            Ok(index)
        }
        Selector::Id(id) => items
            .iter()
            .position(|item| item.id == Some(id))
            .ok_or_else(|| ValidationError::UnknownId(id).into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FolioError;

    fn items() -> Vec<Item> {
        vec![
            Item::new("A", "a.png", "a", "/a"),
            Item::new("B", "b.png", "b", "/b"),
        ]
    }

    #[test]
    fn parses_positions_and_ids() {
        assert_eq!(parse_selector("1").unwrap(), Selector::Index(1));
        let id = Uuid::new_v4();
        assert_eq!(parse_selector(&id.to_string()).unwrap(), Selector::Id(id));
        assert!(parse_selector("x1").is_err());
    }

    #[test]
    fn resolves_by_position() {
        assert_eq!(resolve(&items(), Selector::Index(1)).unwrap(), 1);
    }

    #[test]
    fn out_of_range_reports_length() {
        let err = resolve(&items(), Selector::Index(2)).unwrap_err();
        match err {
            FolioError::Validation(ValidationError::IndexOutOfRange { index, len }) => {
                assert_eq!((index, len), (2, 2));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn resolves_by_id() {
        let items = items();
        let id = items[1].id.unwrap();
        assert_eq!(resolve(&items, Selector::Id(id)).unwrap(), 1);
    }

    #[test]
    fn unknown_id_is_a_validation_error() {
        let err = resolve(&items(), Selector::Id(Uuid::new_v4())).unwrap_err();
        assert!(matches!(
            err,
            FolioError::Validation(ValidationError::UnknownId(_))
        ));
    }

    #[test]
    fn empty_collection_has_no_valid_index() {
        assert!(ensure_in_range(0, 0).is_err());
    }
}
