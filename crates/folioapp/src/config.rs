//! # Configuration
//!
//! Folio configuration is loaded with [`confique`] from layered sources.
//!
//! ## Priority
//!
//! 1. **Environment variables**: `FOLIO_BACKEND`, `FOLIO_ENDPOINT`, `FOLIO_ENV_FILE`.
//! 2. **Data directory**: `<data dir>/folio.toml`, next to the stored collection.
//! 3. **User config**: `folio.toml` in the OS config directory (via `directories`).
//! 4. **Compiled defaults**: the `#[config(default = ...)]` values below.
//!
//! Command-line flags (`--backend`) override all of the above; they are applied by the
//! caller after loading.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `backend` | `local` | Store used when no `--backend` flag is given |
//! | `endpoint` | JSONBin document URL | Remote document, without `/latest` |
//! | `env_file` | `env.json` | File with `JSONBIN_MASTER_KEY`; relative to the data dir |
//! | `seed_samples` | `true` | Seed an empty local store with sample projects |

use crate::error::{FolioError, Result};
use crate::model::BackendKind;
use confique::Config;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "folio.toml";
pub const DEFAULT_ENDPOINT: &str = "https://api.jsonbin.io/v3/b/693263ecd0ea881f4013f231";

/// Configuration for folio, stored in `folio.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct FolioConfig {
    /// Store used when no --backend flag is given: "local" or "remote".
    #[config(default = "local", env = "FOLIO_BACKEND")]
    pub backend: String,

    /// URL of the hosted JSON document, without the "/latest" suffix.
    #[config(
        default = "https://api.jsonbin.io/v3/b/693263ecd0ea881f4013f231",
        env = "FOLIO_ENDPOINT"
    )]
    pub endpoint: String,

    /// JSON file providing JSONBIN_MASTER_KEY. Relative paths are resolved
    /// against the data directory.
    #[config(default = "env.json", env = "FOLIO_ENV_FILE")]
    pub env_file: String,

    /// Write the sample projects to the local store the first time it is read.
    #[config(default = true)]
    pub seed_samples: bool,
}

impl Default for FolioConfig {
    fn default() -> Self {
        Self {
            backend: "local".to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            env_file: "env.json".to_string(),
            seed_samples: true,
        }
    }
}

impl FolioConfig {
    /// Loads env vars and then `files` in priority order. Missing files are skipped.
    pub fn load(files: &[PathBuf]) -> Result<Self> {
        let mut builder = Self::builder().env();
        for file in files {
            builder = builder.file(file);
        }
        builder
            .load()
            .map_err(|e| FolioError::Config(e.to_string()))
    }

    pub fn backend_kind(&self) -> Result<BackendKind> {
        self.backend.parse().map_err(FolioError::Config)
    }

    pub fn env_file_path(&self, data_dir: &Path) -> PathBuf {
        let path = Path::new(&self.env_file);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            data_dir.join(path)
        }
    }

    /// A commented `folio.toml` listing every setting with its default.
    pub fn template() -> String {
        confique::toml::template::<Self>(confique::toml::FormatOptions::default())
    }
}
