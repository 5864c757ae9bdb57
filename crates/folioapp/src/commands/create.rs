use crate::codec::{decode_valid, RawItem};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::DisplayItem;
use crate::store::Backend;

pub fn run<B: Backend + ?Sized>(store: &B, raw: RawItem) -> Result<CmdResult> {
    let item = decode_valid(raw)?;

    let mut items = store.read()?;
    items.push(item.clone());
    store.write(&items)?;

    let mut result = CmdResult::default();
    result.affected_items.push(DisplayItem {
        index: items.len() - 1,
        item,
    });
    result.add_message(CmdMessage::success(
        "Item created successfully. Reload projects to view.",
    ));
    Ok(result)
}
