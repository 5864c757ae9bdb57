//! # Item Codec & Validation
//!
//! Turns loosely-typed, form-like input into a canonical [`Item`] and enforces the
//! required-field rule before anything reaches a store.
//!
//! ## Normalization
//!
//! - Every text field is trimmed.
//! - An empty or absent `link_text` becomes `"Learn more"`.
//! - `tags` arrive as one comma-separated string: `"a, ,b"` → `["a", "b"]`.
//!
//! ## Ordering
//!
//! Commands decode and validate input *before* reading the collection, so a bad
//! submission never costs a round-trip to the remote store. Index range checks are the
//! exception: they need the live length and run after the read (see [`crate::index`]).

use crate::error::{Result, ValidationError};
use crate::model::{Item, DEFAULT_LINK_TEXT};
use serde::Deserialize;
use uuid::Uuid;

/// Raw field values as a UI collected them. Absent and empty are treated alike.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawItem {
    pub title: Option<String>,
    pub img_src: Option<String>,
    pub img_alt: Option<String>,
    pub description: Option<String>,
    pub href: Option<String>,
    pub link_text: Option<String>,
    pub date: Option<String>,
    pub tags: Option<String>,
}

fn field(value: Option<String>) -> String {
    value.map(|v| v.trim().to_string()).unwrap_or_default()
}

/// Builds a canonical item with a fresh id. Does not validate.
pub fn decode(raw: RawItem) -> Item {
    let link_text = field(raw.link_text);
    Item {
        id: Some(Uuid::new_v4()),
        title: field(raw.title),
        img_src: field(raw.img_src),
        img_alt: field(raw.img_alt),
        description: field(raw.description),
        href: field(raw.href),
        link_text: if link_text.is_empty() {
            DEFAULT_LINK_TEXT.to_string()
        } else {
            link_text
        },
        date: field(raw.date),
        tags: parse_tags(raw.tags.as_deref().unwrap_or_default()),
        source: None,
    }
}

pub fn parse_tags(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn validate(item: &Item) -> Result<()> {
    let required = [&item.title, &item.img_src, &item.href, &item.description];
    if required.iter().any(|f| f.trim().is_empty()) {
        return Err(ValidationError::MissingFields.into());
    }
    Ok(())
}

/// Decode and validate in one step, as every write path does.
pub fn decode_valid(raw: RawItem) -> Result<Item> {
    let item = decode(raw);
    validate(&item)?;
    Ok(item)
}

/// Parses a zero-based position. Only whole, non-negative integers are accepted
/// (`"3"`, `" 3 "`); `"-1"`, `"1.5"`, `"abc"` and `""` are rejected.
pub fn parse_index(raw: &str) -> Result<usize> {
    let invalid = || ValidationError::InvalidIndex(raw.to_string());
    let n: i64 = raw.trim().parse().map_err(|_| invalid())?;
    usize::try_from(n).map_err(|_| invalid().into())
}
