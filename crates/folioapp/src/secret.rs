//! # Remote Store Secret
//!
//! A private JSONBin document needs an `X-Master-Key` header. The key is resolved once,
//! when the application context is built, and handed to the remote store by value.
//!
//! ## Resolution Order
//!
//! 1. **Env file**: a JSON object with a string `JSONBIN_MASTER_KEY` field (default
//!    `<data dir>/env.json`). Kept out of version control by the operator.
//! 2. **Local override**: the value stored with `folio secret set`, kept under the
//!    [`OVERRIDE_KEY`] key of the local key/value store.
//! 3. **None**: requests go out unauthenticated; a private document answers 401/403.
//!
//! A missing or malformed env file is not an error. It is skipped with a debug log.

use crate::error::{FolioError, Result};
use crate::store::kv::KeyValueStore;
use serde::Serialize;
use std::fmt;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Key under which `folio secret set` stores its value.
pub const OVERRIDE_KEY: &str = "jsonbinMasterKey";

const ENV_FILE_FIELD: &str = "JSONBIN_MASTER_KEY";

/// A non-empty, trimmed credential. Never printed in full.
#[derive(Clone, PartialEq, Eq)]
pub struct Secret(String);

impl Secret {
    /// Returns `None` for blank input.
    pub fn new(value: &str) -> Option<Self> {
        let value = value.trim();
        if value.is_empty() {
            None
        } else {
            Some(Self(value.to_string()))
        }
    }

    pub fn expose(&self) -> &str {
        &self.0
    }

    /// The last four characters, for status output.
    pub fn hint(&self) -> String {
        let chars: Vec<char> = self.0.chars().collect();
        let tail: String = chars[chars.len().saturating_sub(4)..].iter().collect();
        format!("…{}", tail)
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Secret(****)")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SecretSource {
    EnvFile,
    LocalOverride,
    None,
}

impl fmt::Display for SecretSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SecretSource::EnvFile => write!(f, "env file"),
            SecretSource::LocalOverride => write!(f, "local override"),
            SecretSource::None => write!(f, "none"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ResolvedSecret {
    pub secret: Option<Secret>,
    pub source: SecretSource,
}

/// Reads the master key from an env file, if the file exists and has one.
pub fn load_env_file(path: &Path) -> Option<Secret> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            debug!(path = %path.display(), error = %e, "no env file");
            return None;
        }
    };
    let value: serde_json::Value = match serde_json::from_str(&content) {
        Ok(value) => value,
        Err(e) => {
            debug!(path = %path.display(), error = %e, "ignoring malformed env file");
            return None;
        }
    };
    value
        .get(ENV_FILE_FIELD)
        .and_then(serde_json::Value::as_str)
        .and_then(Secret::new)
}

/// Reads the override stored by [`write_override`].
///
/// The value is normally a JSON string; a hand-edited file holding the bare key is
/// accepted too.
pub fn read_override<K: KeyValueStore>(kv: &K) -> Result<Option<Secret>> {
    let Some(raw) = kv.get(OVERRIDE_KEY)? else {
        return Ok(None);
    };
    let value = serde_json::from_str::<String>(&raw).unwrap_or(raw);
    Ok(Secret::new(&value))
}

pub fn write_override<K: KeyValueStore>(kv: &K, value: &str) -> Result<Secret> {
    let secret =
        Secret::new(value).ok_or_else(|| FolioError::Config("Master key cannot be empty".into()))?;
    let content = serde_json::to_string(secret.expose()).map_err(FolioError::Serialization)?;
    kv.set(OVERRIDE_KEY, &content)?;
    Ok(secret)
}

pub fn clear_override<K: KeyValueStore>(kv: &K) -> Result<()> {
    kv.remove(OVERRIDE_KEY)
}

/// Applies the resolution order described in the module docs.
pub fn resolve<K: KeyValueStore>(env_file: Option<&Path>, kv: &K) -> ResolvedSecret {
    if let Some(secret) = env_file.and_then(load_env_file) {
        return ResolvedSecret {
            secret: Some(secret),
            source: SecretSource::EnvFile,
        };
    }

    match read_override(kv) {
        Ok(Some(secret)) => ResolvedSecret {
            secret: Some(secret),
            source: SecretSource::LocalOverride,
        },
        Ok(None) => ResolvedSecret {
            secret: None,
            source: SecretSource::None,
        },
        Err(e) => {
            warn!(error = %e, "could not read stored master key");
            ResolvedSecret {
                secret: None,
                source: SecretSource::None,
            }
        }
    }
}
