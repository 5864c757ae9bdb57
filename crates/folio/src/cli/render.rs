use colored::Colorize;
use folioapp::api::{CmdMessage, MessageLevel};
use folioapp::card::ProjectCard;
use folioapp::error::Result;
use folioapp::model::DisplayItem;
use serde::Serialize;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
        }
    }
}

/// `  0. Title  href  #tag #tag`
pub(super) fn format_item_row(entry: &DisplayItem) -> String {
    let item = &entry.item;
    let mut row = format!(
        "{} {}  {}",
        format!("{:>3}.", entry.index).yellow(),
        item.title.bold(),
        item.href.dimmed()
    );
    if !item.tags.is_empty() {
        let tags: Vec<String> = item.tags.iter().map(|t| format!("#{}", t)).collect();
        row.push_str(&format!("  {}", tags.join(" ").cyan()));
    }
    row
}

pub(super) fn print_items(items: &[DisplayItem]) {
    for entry in items {
        println!("{}", format_item_row(entry));
    }
}

pub(super) fn print_cards(cards: &[ProjectCard]) {
    for card in cards {
        println!("{}", card.to_html());
    }
}

pub(super) fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
