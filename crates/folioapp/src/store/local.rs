use super::kv::KeyValueStore;
use super::Backend;
use crate::error::{FolioError, Result};
use crate::model::{sample_items, Item};
use tracing::{debug, info, warn};

/// Key holding the serialized collection.
pub const PROJECTS_KEY: &str = "projectsData";

/// The collection stored under [`PROJECTS_KEY`] of a key/value store.
///
/// Reads are fail-soft: a value that is not a JSON array of objects reads as an empty
/// collection, with a warning, so a corrupted file never locks the user out. The next
/// successful write replaces the corrupted value. Odd field values inside an item do not
/// count as corruption (see [`Item`]).
pub struct LocalStore<K: KeyValueStore> {
    kv: K,
    seed_samples: bool,
}

impl<K: KeyValueStore> LocalStore<K> {
    pub fn new(kv: K) -> Self {
        Self {
            kv,
            seed_samples: false,
        }
    }

    /// When enabled, the first read of a never-written store stores and returns
    /// the sample projects.
    pub fn with_seed_samples(mut self, seed: bool) -> Self {
        self.seed_samples = seed;
        self
    }

    pub fn kv(&self) -> &K {
        &self.kv
    }
}

impl<K: KeyValueStore> Backend for LocalStore<K> {
    fn read(&self) -> Result<Vec<Item>> {
        // An empty value counts as never written.
        let raw = match self.kv.get(PROJECTS_KEY)? {
            Some(raw) if !raw.trim().is_empty() => raw,
            _ if self.seed_samples => {
                let samples = sample_items();
                self.write(&samples)?;
                info!(count = samples.len(), "seeded local store with sample projects");
                return Ok(samples);
            }
            _ => return Ok(Vec::new()),
        };

        match serde_json::from_str::<Vec<Item>>(&raw) {
            Ok(items) => {
                debug!(count = items.len(), "read local collection");
                Ok(items)
            }
            Err(e) => {
                warn!(
                    key = PROJECTS_KEY,
                    error = %e,
                    "stored collection is not a valid item array; reading it as empty"
                );
                Ok(Vec::new())
            }
        }
    }

    fn write(&self, items: &[Item]) -> Result<()> {
        let content = serde_json::to_string_pretty(items).map_err(FolioError::Serialization)?;
        self.kv.set(PROJECTS_KEY, &content)?;
        debug!(count = items.len(), "wrote local collection");
        Ok(())
    }
}
