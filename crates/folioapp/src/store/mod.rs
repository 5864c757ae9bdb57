//! # Storage Layer
//!
//! The whole portfolio is one JSON array. A [`Backend`] knows how to read that array and
//! how to replace it; nothing finer-grained exists. Commands do every mutation in memory
//! between one `read` and one `write`.
//!
//! ## Backends
//!
//! - [`local::LocalStore`]: the array lives under the `projectsData` key of a
//!   [`kv::KeyValueStore`]. Production uses [`fs_kv::FsKv`] (one file per key in the
//!   data directory); tests use [`mem_kv::MemKv`].
//! - [`remote::RemoteStore`]: the array is a hosted JSON document (JSONBin v3 API),
//!   fetched with GET and replaced with PUT through an [`http::HttpTransport`].
//!
//! ## Consistency
//!
//! There is no locking, versioning or conditional write. Two invocations that overlap
//! both read the same array and the later `write` silently discards the earlier one's
//! change. This is the store's contract, not an oversight to paper over in commands.
//!
//! ## Storage Layout (local)
//!
//! ```text
//! <data dir>/
//! ├── projectsData.json       # the collection
//! ├── jsonbinMasterKey.json   # optional remote secret override
//! ├── env.json                # optional, hand-written secret file
//! └── folio.toml              # optional configuration
//! ```

use crate::error::Result;
use crate::model::Item;

pub mod fs_kv;
pub mod http;
pub mod kv;
pub mod local;
pub mod mem_kv;
pub mod remote;

/// Whole-collection persistence.
pub trait Backend {
    /// Reads the full collection.
    fn read(&self) -> Result<Vec<Item>>;

    /// Replaces the full collection.
    fn write(&self, items: &[Item]) -> Result<()>;
}
