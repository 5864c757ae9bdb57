use crate::error::Result;

/// String values under string keys, the shape of browser local storage.
///
/// All methods take `&self`; implementations use interior mutability where needed.
pub trait KeyValueStore {
    /// Returns `Ok(None)` when the key has never been written.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value`, replacing any previous value. Must not leave a partial value behind.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Removes the key. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}
