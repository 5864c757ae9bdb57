//! # Command Layer
//!
//! Each command is one linear read → mutate → write sequence over a [`Backend`]:
//!
//! | command  | input             | mutation              |
//! |----------|-------------------|-----------------------|
//! | create   | item fields       | append                |
//! | update   | index + fields    | replace at index      |
//! | delete   | index             | remove at index       |
//! | list     | (no input)        | none (read only)      |
//! | render   | (no input)        | none (read only)      |
//!
//! Input is parsed and validated before the read wherever that is possible; range
//! checks need the live length and run right after it. Any error aborts the sequence
//! before `write`, so the store keeps whatever it last held. There is no rollback and no
//! retry: a failed `write` is reported and the mutated in-memory copy is dropped.
//!
//! Commands never print. They return [`CmdResult`] with the affected items and leveled
//! messages; the UI decides how to show them.
//!
//! [`Backend`]: crate::store::Backend

use crate::card::ProjectCard;
use crate::model::DisplayItem;
use serde::Serialize;

pub mod create;
pub mod delete;
pub mod list;
pub mod render;
pub mod update;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default, Serialize)]
pub struct CmdResult {
    pub affected_items: Vec<DisplayItem>,
    pub listed_items: Vec<DisplayItem>,
    pub cards: Vec<ProjectCard>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_items(mut self, items: Vec<DisplayItem>) -> Self {
        self.listed_items = items;
        self
    }
}
