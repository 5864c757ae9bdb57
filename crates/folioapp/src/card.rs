//! # Project Card Contract
//!
//! The portfolio page renders each item as a `<project-card>` custom element. The
//! element only understands string attributes, so this module fixes how an [`Item`]
//! flattens into them:
//!
//! | attribute   | value                                   |
//! |-------------|-----------------------------------------|
//! | `title`     | title, or `Untitled`                    |
//! | `img-src`   | image URL, omitted when empty           |
//! | `img-alt`   | alt text (may be empty)                 |
//! | `description` | description (may be empty)            |
//! | `href`      | link target, or `#`                     |
//! | `link-text` | link label, or `Learn more`             |
//! | `date`      | date, omitted when empty                |
//! | `tags`      | tags joined with `,`                    |

use crate::model::{Item, DEFAULT_LINK_TEXT};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectCard {
    pub attributes: Vec<(&'static str, String)>,
}

fn or_default(value: &str, default: &str) -> String {
    if value.is_empty() {
        default.to_string()
    } else {
        value.to_string()
    }
}

impl ProjectCard {
    pub fn from_item(item: &Item) -> Self {
        let mut attributes = vec![("title", or_default(&item.title, "Untitled"))];
        if !item.img_src.is_empty() {
            attributes.push(("img-src", item.img_src.clone()));
        }
        attributes.push(("img-alt", item.img_alt.clone()));
        attributes.push(("description", item.description.clone()));
        attributes.push(("href", or_default(&item.href, "#")));
        attributes.push(("link-text", or_default(&item.link_text, DEFAULT_LINK_TEXT)));
        if !item.date.is_empty() {
            attributes.push(("date", item.date.clone()));
        }
        attributes.push(("tags", item.tags.join(",")));
        Self { attributes }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    /// The element as a single line of HTML, attribute values escaped.
    pub fn to_html(&self) -> String {
        let attrs: String = self
            .attributes
            .iter()
            .map(|(name, value)| format!(" {}=\"{}\"", name, escape_attr(value)))
            .collect();
        format!("<project-card{}></project-card>", attrs)
    }
}

fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}
