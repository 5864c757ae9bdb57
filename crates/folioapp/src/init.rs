//! # Context Initialization
//!
//! Everything that is decided once per process happens here, in one place:
//!
//! 1. **Data directory**: `data_override` (the `--data` flag), else the `FOLIO_DATA`
//!    environment variable, else the OS data directory (via `directories`).
//! 2. **Configuration**: [`FolioConfig::load`] over env vars, `<data dir>/folio.toml`
//!    and the user config file.
//! 3. **Backend selection**: `backend_override` (the `--backend` flag), else config.
//! 4. **Secret**: resolved once ([`secret::resolve`]) and moved into the remote store.
//!
//! The resulting [`FolioContext`] carries no hidden global state: a second context built
//! with different inputs is fully independent.

use crate::api::FolioApi;
use crate::config::{FolioConfig, CONFIG_FILENAME};
use crate::error::{FolioError, Result};
use crate::model::BackendKind;
use crate::secret::{self, SecretSource};
use crate::store::fs_kv::FsKv;
use crate::store::http::ReqwestTransport;
use crate::store::local::LocalStore;
use crate::store::remote::RemoteStore;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const DATA_DIR_ENV: &str = "FOLIO_DATA";

pub struct FolioContext {
    pub api: FolioApi<FsKv, ReqwestTransport>,
    pub backend: BackendKind,
    pub config: FolioConfig,
    pub data_dir: PathBuf,
    pub config_files: Vec<PathBuf>,
    pub secret_source: SecretSource,
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "folio", "folio")
}

pub fn resolve_data_dir(data_override: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = data_override {
        return Ok(path);
    }
    if let Some(path) = std::env::var_os(DATA_DIR_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(path));
    }
    project_dirs()
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| FolioError::Config("Could not determine a data directory".to_string()))
}

/// Config files in priority order: the data directory's, then the user's.
pub fn config_files(data_dir: &Path) -> Vec<PathBuf> {
    let mut files = vec![data_dir.join(CONFIG_FILENAME)];
    if let Some(dirs) = project_dirs() {
        let user_file = dirs.config_dir().join(CONFIG_FILENAME);
        if !files.contains(&user_file) {
            files.push(user_file);
        }
    }
    files
}

pub fn initialize(
    data_override: Option<PathBuf>,
    backend_override: Option<BackendKind>,
) -> Result<FolioContext> {
    let data_dir = resolve_data_dir(data_override)?;
    let config_files = config_files(&data_dir);
    let config = FolioConfig::load(&config_files)?;
    let backend = match backend_override {
        Some(kind) => kind,
        None => config.backend_kind()?,
    };
    debug!(data_dir = %data_dir.display(), %backend, "initializing folio");

    let kv = FsKv::new(&data_dir);
    let env_file = config.env_file_path(&data_dir);
    let resolved = secret::resolve(Some(&env_file), &kv);
    debug!(source = %resolved.source, "resolved remote master key");

    let remote = RemoteStore::new(ReqwestTransport::new()?, &config.endpoint, resolved.secret);
    let local = LocalStore::new(kv).with_seed_samples(config.seed_samples);
    let api = FolioApi::new(local, remote, resolved.source);

    Ok(FolioContext {
        api,
        backend,
        config,
        data_dir,
        config_files,
        secret_source: resolved.source,
    })
}
