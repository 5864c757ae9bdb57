use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::{parse_selector, resolve};
use crate::model::DisplayItem;
use crate::store::Backend;

pub fn run<B: Backend + ?Sized>(store: &B, target: &str) -> Result<CmdResult> {
    let selector = parse_selector(target)?;

    let mut items = store.read()?;
    let index = resolve(&items, selector)?;
    let removed = items.remove(index);
    store.write(&items)?;

    let mut result = CmdResult::default();
    result.affected_items.push(DisplayItem {
        index,
        item: removed,
    });
    result.add_message(CmdMessage::success(format!(
        "Item at index {} deleted. Reload projects to view.",
        index
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{store, store_with, titles};
    use crate::error::{FolioError, ValidationError};
    use crate::model::Item;

    fn abc() -> Vec<Item> {
        vec![
            Item::new("A", "a.png", "a", "/a"),
            Item::new("B", "b.png", "b", "/b"),
            Item::new("C", "c.png", "c", "/c"),
        ]
    }

    #[test]
    fn delete_first_preserves_order() {
        let store = store_with(&abc());
        let result = run(&store, "0").unwrap();
        assert_eq!(titles(&store), vec!["B", "C"]);
        assert_eq!(result.affected_items[0].item.title, "A");
        assert_eq!(
            result.messages[0].content,
            "Item at index 0 deleted. Reload projects to view."
        );
    }

    #[test]
    fn delete_last() {
        let store = store_with(&abc());
        run(&store, "2").unwrap();
        assert_eq!(titles(&store), vec!["A", "B"]);
    }

    #[test]
    fn delete_by_id_survives_shifted_positions() {
        let items = abc();
        let c_id = items[2].id.unwrap().to_string();
        let store = store_with(&items);
        run(&store, "0").unwrap();
        run(&store, &c_id).unwrap();
        assert_eq!(titles(&store), vec!["B"]);
    }

    #[test]
    fn out_of_range_reports_length() {
        let store = store_with(&abc());
        let err = run(&store, "5").unwrap_err();
        assert!(matches!(
            err,
            FolioError::Validation(ValidationError::IndexOutOfRange { index: 5, len: 3 })
        ));
        assert_eq!(titles(&store), vec!["A", "B", "C"]);
    }

    #[test]
    fn negative_index_is_invalid() {
        let err = run(&store(), "-1").unwrap_err();
        assert!(matches!(
            err,
            FolioError::Validation(ValidationError::InvalidIndex(_))
        ));
    }
}
