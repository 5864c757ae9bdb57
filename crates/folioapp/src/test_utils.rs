use crate::store::fs_kv::FsKv;
use crate::store::local::LocalStore;
use std::path::PathBuf;
use tempfile::TempDir;

/// A local store rooted in a fresh temp directory that lives as long as the env.
pub struct TestEnv {
    pub _temp_dir: TempDir,
    pub store: LocalStore<FsKv>,
    pub root: PathBuf,
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

impl TestEnv {
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("failed to create temp dir");
        let root = temp_dir.path().to_path_buf();
        let store = LocalStore::new(FsKv::new(&root));
        Self {
            _temp_dir: temp_dir,
            store,
            root,
        }
    }

    /// Same directory, with sample seeding turned on.
    pub fn seeded() -> Self {
        let env = Self::new();
        let store = LocalStore::new(FsKv::new(&env.root)).with_seed_samples(true);
        Self { store, ..env }
    }
}
