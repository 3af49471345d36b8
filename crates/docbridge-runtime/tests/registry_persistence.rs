//! Registry lifecycle against the JSON store on a real filesystem.

use std::sync::Arc;

use docbridge_core::{
    CoreError, RepositoryError, RootRegistry, RootsConfig, RootsService, canonical_root_path,
};
use docbridge_runtime::{DriveLetterDiscoverer, HomeMirrorDiscoverer, JsonRootsStore};
use tempfile::tempdir;

fn read_record(path: &std::path::Path) -> RootsConfig {
    serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
}

#[tokio::test]
async fn first_load_writes_record_with_default_root() {
    let data = tempdir().unwrap();
    let drive = tempdir().unwrap();
    let config_path = data.path().join("docbridge/config.json");

    let store = Arc::new(JsonRootsStore::new(&config_path));
    let registry = RootRegistry::load(store, Some(drive.path().to_path_buf()))
        .await
        .unwrap();

    assert_eq!(registry.snapshot().await.len(), 1);
    assert_eq!(
        read_record(&config_path).roots,
        vec![canonical_root_path(&drive.path()).to_string_lossy().into_owned()]
    );
}

#[tokio::test]
async fn add_and_remove_survive_reload() {
    let data = tempdir().unwrap();
    let a = tempdir().unwrap();
    let b = tempdir().unwrap();
    let config_path = data.path().join("config.json");

    {
        let store = Arc::new(JsonRootsStore::new(&config_path));
        let registry = RootRegistry::load(store, None).await.unwrap();
        registry.add(&a.path().to_string_lossy()).await.unwrap();
        registry.add(&b.path().to_string_lossy()).await.unwrap();
        registry.remove(&a.path().to_string_lossy()).await.unwrap();
    }

    let store = Arc::new(JsonRootsStore::new(&config_path));
    let registry = RootRegistry::load(store, None).await.unwrap();
    let roots = registry.snapshot().await;

    assert_eq!(roots.len(), 1);
    assert_eq!(roots[0].path(), canonical_root_path(&b.path()));
}

#[tokio::test]
async fn discovery_merge_appends_after_user_roots() {
    let data = tempdir().unwrap();
    let user_root = tempdir().unwrap();
    let home = tempdir().unwrap();
    let drives = tempdir().unwrap();
    std::fs::create_dir(home.path().join("Google Drive")).unwrap();
    let g = drives.path().join("G");
    std::fs::create_dir_all(g.join("My Drive")).unwrap();

    let config_path = data.path().join("config.json");
    let store = Arc::new(JsonRootsStore::new(&config_path));
    let registry = Arc::new(
        RootRegistry::load(store, Some(user_root.path().to_path_buf()))
            .await
            .unwrap(),
    );
    let service = RootsService::new(Arc::clone(&registry));

    service
        .discover(&HomeMirrorDiscoverer::new(home.path()))
        .await
        .unwrap();
    service
        .discover(&DriveLetterDiscoverer::new(vec![g.clone()]))
        .await
        .unwrap();
    // A second run proposes the same folders and changes nothing.
    let roots = service
        .discover(&DriveLetterDiscoverer::new(vec![g.clone()]))
        .await
        .unwrap();

    let canon = |p: std::path::PathBuf| canonical_root_path(&p);
    let paths: Vec<_> = roots.iter().map(|r| r.path().to_path_buf()).collect();
    assert_eq!(
        paths,
        vec![
            canon(user_root.path().to_path_buf()),
            canon(home.path().join("Google Drive")),
            canon(g.join("My Drive")),
            canon(g),
        ]
    );
    assert_eq!(read_record(&config_path).roots.len(), 4);
}

#[tokio::test]
async fn corrupt_record_fails_load_without_overwrite() {
    let data = tempdir().unwrap();
    let config_path = data.path().join("config.json");
    std::fs::write(&config_path, "not json").unwrap();

    let store = Arc::new(JsonRootsStore::new(&config_path));
    let result = RootRegistry::load(store, None).await;

    assert!(matches!(
        result,
        Err(CoreError::Repository(RepositoryError::Serialization(_)))
    ));
    assert_eq!(std::fs::read_to_string(&config_path).unwrap(), "not json");
}
