use crate::codec::{decode_valid, RawItem};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::{parse_selector, resolve};
use crate::model::DisplayItem;
use crate::store::Backend;

/// Replaces the item at `target` (a position or an item id) with `raw`.
///
/// The replaced item's id carries over, so references to it stay valid.
pub fn run<B: Backend + ?Sized>(store: &B, target: &str, raw: RawItem) -> Result<CmdResult> {
    let selector = parse_selector(target)?;
    let mut item = decode_valid(raw)?;

    let mut items = store.read()?;
    let index = resolve(&items, selector)?;
    if let Some(id) = items[index].id {
        item.id = Some(id);
    }
    items[index] = item.clone();
    store.write(&items)?;

    let mut result = CmdResult::default();
    result.affected_items.push(DisplayItem { index, item });
    result.add_message(CmdMessage::success(format!(
        "Item at index {} updated. Reload projects to view.",
        index
    )));
    Ok(result)
}
