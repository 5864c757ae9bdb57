use crate::card::ProjectCard;
use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::Backend;

pub fn run<B: Backend + ?Sized>(store: &B) -> Result<CmdResult> {
    let cards = store.read()?.iter().map(ProjectCard::from_item).collect();
    Ok(CmdResult {
        cards,
        ..Default::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::store_with;
    use crate::model::Item;

    #[test]
    fn one_card_per_item_in_order() {
        let store = store_with(&[
            Item::new("A", "a.png", "a", "/a"),
            Item::new("B", "b.png", "b", "/b"),
        ]);
        let result = run(&store).unwrap();
        let titles: Vec<_> = result.cards.iter().map(|c| c.get("title")).collect();
        assert_eq!(titles, vec![Some("A"), Some("B")]);
    }
}
