use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::DisplayItem;
use crate::store::Backend;

pub fn run<B: Backend + ?Sized>(store: &B) -> Result<CmdResult> {
    let listed: Vec<DisplayItem> = store
        .read()?
        .into_iter()
        .enumerate()
        .map(|(index, item)| DisplayItem { index, item })
        .collect();

    let mut result = CmdResult::default();
    if listed.is_empty() {
        result.add_message(CmdMessage::info("No projects found."));
    }
    Ok(result.with_listed_items(listed))
}
