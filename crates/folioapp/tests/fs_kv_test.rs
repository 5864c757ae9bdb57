use folioapp::model::Item;
use folioapp::store::fs_kv::FsKv;
use folioapp::store::kv::KeyValueStore;
use folioapp::store::local::{LocalStore, PROJECTS_KEY};
use folioapp::store::Backend;
use std::fs;
use tempfile::TempDir;

fn setup() -> (TempDir, FsKv) {
    let dir = TempDir::new().unwrap();
    let kv = FsKv::new(dir.path().join("data"));
    (dir, kv)
}

#[test]
fn test_fs_kv_basic_io() {
    let (_dir, kv) = setup();

    assert_eq!(kv.get("greeting").unwrap(), None);

    kv.set("greeting", "hello").unwrap();
    assert_eq!(kv.get("greeting").unwrap().as_deref(), Some("hello"));

    kv.remove("greeting").unwrap();
    assert_eq!(kv.get("greeting").unwrap(), None);

    // Removing an absent key is fine.
    kv.remove("greeting").unwrap();
}

#[test]
fn test_fs_kv_creates_root_lazily() {
    let (_dir, kv) = setup();
    assert!(!kv.root().exists());
    kv.set("k", "v").unwrap();
    assert!(kv.root().is_dir());
}

#[test]
fn test_fs_kv_atomic_write_artifacts() {
    let (_dir, kv) = setup();
    kv.set("k", "first").unwrap();
    kv.set("k", "second").unwrap();

    let on_disk = fs::read_to_string(kv.key_path("k")).unwrap();
    assert_eq!(on_disk, "second");

    for entry in fs::read_dir(kv.root()).unwrap() {
        let path = entry.unwrap().path();
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
    }
}

#[test]
fn test_local_store_on_disk_format() {
    let (_dir, kv) = setup();
    let store = LocalStore::new(kv.clone());
    let mut item = Item::new("Blog", "blog.png", "Posts", "/blog");
    item.tags = vec!["writing".into()];
    store.write(&[item]).unwrap();

    let raw = kv.get(PROJECTS_KEY).unwrap().unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let first = &value[0];
    assert_eq!(first["title"], "Blog");
    assert_eq!(first["imgSrc"], "blog.png");
    assert_eq!(first["linkText"], "Learn more");
    assert_eq!(first["tags"][0], "writing");
}

#[test]
fn test_local_store_survives_hand_edited_corruption() {
    let (_dir, kv) = setup();
    kv.set(PROJECTS_KEY, "[{\"title\": ").unwrap();
    let store = LocalStore::new(kv).with_seed_samples(true);

    assert!(store.read().unwrap().is_empty());

    store
        .write(&[Item::new("Fresh", "f.png", "d", "/f")])
        .unwrap();
    assert_eq!(store.read().unwrap()[0].title, "Fresh");
}
