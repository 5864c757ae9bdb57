//! # Domain Model
//!
//! A portfolio is an ordered list of [`Item`]s. The list is always read and written as a
//! whole: there is no per-item storage, so the position of an item in the list is its
//! public address (`folio update 2 ...`).
//!
//! ## Wire Format
//!
//! Items are stored as JSON objects with camelCase keys, the shape the portfolio site's
//! `<project-card>` loader expects:
//!
//! ```text
//! {
//!   "id": "7f0c…",            (optional, see below)
//!   "title": "Blackjack AI",
//!   "imgSrc": "images/blackjack.jpeg",
//!   "imgAlt": "Blackjack clip art",
//!   "description": "RL agent using Monte Carlo and Q-Learning.",
//!   "href": "https://github.com/…",
//!   "linkText": "View repo",
//!   "date": "2025-03-14",
//!   "tags": ["AI", "Reinforcement"]
//! }
//! ```
//!
//! Every field is lenient on read. Documents edited by hand or written by older clients
//! may miss fields or hold `null` or a wrong type (`"tags": null`, `"date": 2025`); such
//! a field reads as its default and one odd item never makes the collection unreadable.
//! An item keeps the object it was read from, so keys folio does not know and values it
//! could not decode survive a rewrite untouched.
//!
//! ## Identity
//!
//! Positions shift on every delete, so an index held across two invocations can point at
//! a different item. Items written by folio carry a stable UUID `id`; commands resolve
//! the index against the collection they just read and then act on that id. Items
//! without an id (legacy data, seeded samples) are still addressable by index and are
//! written back untouched, so `write(read())` never rewrites content.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

pub const DEFAULT_LINK_TEXT: &str = "Learn more";

fn default_link_text() -> String {
    DEFAULT_LINK_TEXT.to_string()
}

const KNOWN_KEYS: [&str; 9] = [
    "id",
    "title",
    "imgSrc",
    "imgAlt",
    "description",
    "href",
    "linkText",
    "date",
    "tags",
];

#[derive(Debug, Clone)]
pub struct Item {
    pub id: Option<Uuid>,
    pub title: String,
    pub img_src: String,
    pub img_alt: String,
    pub description: String,
    pub href: String,
    pub link_text: String,
    pub date: String,
    pub tags: Vec<String>,
    /// The stored object this item was decoded from; `None` for items built in memory.
    /// Keys folio does not model, and values it could not decode, are written back from
    /// here unchanged.
    pub(crate) source: Option<Map<String, Value>>,
}

/// Decodes `key` as `T`; absent, null and wrong-typed values all read as `None`.
fn lenient<T: DeserializeOwned>(object: &Map<String, Value>, key: &str) -> Option<T> {
    object.get(key).and_then(|v| T::deserialize(v).ok())
}

impl Item {
    /// Convenience constructor for the required fields; optional fields take defaults.
    pub fn new(
        title: impl Into<String>,
        img_src: impl Into<String>,
        description: impl Into<String>,
        href: impl Into<String>,
    ) -> Self {
        Self {
            id: Some(Uuid::new_v4()),
            title: title.into(),
            img_src: img_src.into(),
            img_alt: String::new(),
            description: description.into(),
            href: href.into(),
            link_text: default_link_text(),
            date: String::new(),
            tags: Vec::new(),
            source: None,
        }
    }

    fn from_object(object: Map<String, Value>) -> Self {
        let text = |key: &str| lenient::<String>(&object, key).unwrap_or_default();
        Self {
            id: lenient(&object, "id"),
            title: text("title"),
            img_src: text("imgSrc"),
            img_alt: text("imgAlt"),
            description: text("description"),
            href: text("href"),
            link_text: lenient(&object, "linkText").unwrap_or_else(default_link_text),
            date: text("date"),
            tags: lenient(&object, "tags").unwrap_or_default(),
            source: Some(object),
        }
    }

    /// Stored keys folio does not model.
    pub fn extra(&self) -> Map<String, Value> {
        self.source
            .iter()
            .flatten()
            .filter(|(key, _)| !KNOWN_KEYS.contains(&key.as_str()))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }

    fn modeled_fields(&self) -> [(&'static str, Value); 8] {
        [
            ("title", Value::from(self.title.as_str())),
            ("imgSrc", Value::from(self.img_src.as_str())),
            ("imgAlt", Value::from(self.img_alt.as_str())),
            ("description", Value::from(self.description.as_str())),
            ("href", Value::from(self.href.as_str())),
            ("linkText", Value::from(self.link_text.as_str())),
            ("date", Value::from(self.date.as_str())),
            ("tags", Value::from(self.tags.clone())),
        ]
    }

    fn to_object(&self) -> Map<String, Value> {
        let Some(source) = &self.source else {
            let mut object = Map::new();
            if let Some(id) = self.id {
                object.insert("id".to_string(), Value::from(id.to_string()));
            }
            object.extend(
                self.modeled_fields()
                    .into_iter()
                    .map(|(key, value)| (key.to_string(), value)),
            );
            return object;
        };

        // Only fields changed since the read are rewritten.
        let stored = Item::from_object(source.clone());
        let mut object = source.clone();
        if self.id != stored.id {
            match self.id {
                Some(id) => object.insert("id".to_string(), Value::from(id.to_string())),
                None => object.remove("id"),
            };
        }
        for ((key, value), (_, stored_value)) in self
            .modeled_fields()
            .into_iter()
            .zip(stored.modeled_fields())
        {
            if value != stored_value {
                object.insert(key.to_string(), value);
            }
        }
        object
    }
}

impl PartialEq for Item {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.modeled_fields() == other.modeled_fields()
            && self.extra() == other.extra()
    }
}

impl Eq for Item {}

impl Serialize for Item {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_object().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Item {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Map::<String, Value>::deserialize(deserializer).map(Item::from_object)
    }
}

/// Which store an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    #[default]
    Local,
    Remote,
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackendKind::Local => write!(f, "local"),
            BackendKind::Remote => write!(f, "remote"),
        }
    }
}

impl FromStr for BackendKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "local" => Ok(BackendKind::Local),
            "remote" => Ok(BackendKind::Remote),
            other => Err(format!(
                "unknown backend '{}' (expected 'local' or 'remote')",
                other
            )),
        }
    }
}

/// An item paired with its position in the collection it was read from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayItem {
    pub index: usize,
    pub item: Item,
}

/// The collection written to an empty local store on first use.
pub fn sample_items() -> Vec<Item> {
    vec![
        Item {
            id: None,
            title: "Blackjack AI".to_string(),
            img_src: "images/blackjack.jpeg".to_string(),
            img_alt: "Blackjack clip art".to_string(),
            description: "RL agent using Monte Carlo and Q-Learning.".to_string(),
            href: "https://github.com/MaximPodgore/Blackjack-AI".to_string(),
            link_text: "View repo".to_string(),
            date: "2025-03-14".to_string(),
            tags: vec![
                "AI".to_string(),
                "Reinforcement".to_string(),
                "Visualization".to_string(),
            ],
            source: None,
        },
        Item {
            id: None,
            title: "RippleEdits for graphRAG".to_string(),
            img_src: "images/snet.jpeg".to_string(),
            img_alt: "SingularityNET logo".to_string(),
            description: "Benchmark for knowledge edits in RAG systems.".to_string(),
            href: "https://github.com/MaximPodgore/RippleEdits".to_string(),
            link_text: "Project repo".to_string(),
            date: "2025-07-22".to_string(),
            tags: vec![
                "Benchmark".to_string(),
                "RAG".to_string(),
                "Research".to_string(),
            ],
            source: None,
        },
        Item {
            id: None,
            title: "Portfolio Refresh".to_string(),
            img_src: "images/profile.jpg".to_string(),
            img_alt: "Profile image".to_string(),
            description: "Performance-first portfolio with view transitions.".to_string(),
            href: "index.html".to_string(),
            link_text: "Open site".to_string(),
            date: "2025-11-02".to_string(),
            tags: vec![
                "Performance".to_string(),
                "View Transitions".to_string(),
                "Semantic HTML".to_string(),
            ],
            source: None,
        },
    ]
}
