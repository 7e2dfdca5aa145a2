//! Integration tests for loading, generating and persisting the catalog.

use std::fs;

use distructions::catalog::{CatalogStore, CATALOG_FILE_NAME};
use distructions::detect::enabled_detectors;
use distructions::error::{exit_code, DxError};

use crate::integration::fixtures::{
    catalog_names, create_empty_project, create_go_project, create_node_project,
    create_project, create_project_with_catalog, read_catalog, standard_scripts, CATALOG,
};

#[test]
fn test_generates_and_persists_on_first_load() {
    let project = create_go_project();
    let store = CatalogStore::new(project.path());

    let catalog = store.load().unwrap();

    assert_eq!(catalog.len(), 3);
    assert!(project.path().join(CATALOG_FILE_NAME).exists());
    assert_eq!(
        catalog_names(project.path()),
        vec!["Go: Run", "Go: Test", "Go: Build"]
    );
}

#[test]
fn test_persisted_schema() {
    let project = create_node_project(&[("dev", "vite")]);
    CatalogStore::new(project.path()).load().unwrap();

    let json = read_catalog(project.path());
    assert!(json["projectName"].is_string());
    assert_eq!(json["commands"][0]["name"], "npm: dev");
    assert_eq!(json["commands"][0]["command"], "npm run dev");
    assert_eq!(json["commands"][0]["description"], "Run npm script: vite");
}

#[test]
fn test_existing_catalog_is_returned_verbatim() {
    let project = create_project_with_catalog("web_app.json");
    // Markers that would produce different entries if detection ran
    fs::write(project.path().join("go.mod"), "module x\n").unwrap();

    let catalog = CatalogStore::new(project.path()).load().unwrap();

    assert_eq!(catalog.project_label(), "web-app");
    assert_eq!(
        catalog.names(),
        vec!["npm: dev", "npm: build", "Docker: Start All", "Greet"]
    );
}

#[test]
fn test_hand_edited_catalog_survives_reload() {
    let project = create_go_project();
    let store = CatalogStore::new(project.path());
    store.load().unwrap();

    let mut json = read_catalog(project.path());
    json["commands"][0]["command"] = "go run ./cmd/server".into();
    fs::write(project.path().join(CATALOG), json.to_string()).unwrap();

    let catalog = store.load().unwrap();
    assert_eq!(catalog.get(0).unwrap().command(), "go run ./cmd/server");
}

#[test]
fn test_empty_directory_persists_nothing() {
    let project = create_empty_project();
    let catalog = CatalogStore::new(project.path()).load().unwrap();

    assert!(catalog.is_empty());
    assert!(!project.path().join(CATALOG).exists());
}

#[test]
fn test_empty_persisted_catalog_is_not_regenerated() {
    let project = create_project_with_catalog("empty.json");
    fs::write(project.path().join("go.mod"), "module x\n").unwrap();

    let catalog = CatalogStore::new(project.path()).load().unwrap();
    assert!(catalog.is_empty());
}

#[test]
fn test_corrupt_catalog_is_fatal_and_kept() {
    let project = create_project_with_catalog("corrupt.json");
    let before = fs::read_to_string(project.path().join(CATALOG)).unwrap();

    let err = CatalogStore::new(project.path()).load().unwrap_err();

    assert!(matches!(err, DxError::CatalogParse { .. }));
    assert_eq!(err.exit_code(), exit_code::INVALID_CATALOG);
    assert_eq!(
        fs::read_to_string(project.path().join(CATALOG)).unwrap(),
        before
    );
}

#[test]
fn test_wrong_schema_is_a_parse_error() {
    let project = create_project_with_catalog("wrong_schema.json");
    let err = CatalogStore::new(project.path()).load().unwrap_err();

    assert!(matches!(err, DxError::CatalogParse { .. }));
}

#[test]
fn test_regenerate_replaces_stale_catalog() {
    let project = create_project_with_catalog("web_app.json");
    fs::write(project.path().join("go.mod"), "module x\n").unwrap();

    let catalog = CatalogStore::new(project.path()).regenerate().unwrap();

    assert_eq!(catalog.names(), vec!["Go: Run", "Go: Test", "Go: Build"]);
    assert_eq!(
        catalog_names(project.path()),
        vec!["Go: Run", "Go: Test", "Go: Build"]
    );
}

#[test]
fn test_declined_generation_writes_nothing() {
    let project = create_node_project(&standard_scripts());
    let store = CatalogStore::new(project.path());

    let err = store.load_with_consent(|_, _| false).unwrap_err();

    assert!(err.is_informational());
    assert_eq!(err.exit_code(), exit_code::SUCCESS);
    assert!(!store.exists());
}

#[test]
fn test_custom_file_name_and_disabled_detectors() {
    let project = create_project(&[
        ("go.mod", "module example.com/demo\n"),
        ("docker-compose.yml", "services:\n  db:\n    image: postgres\n"),
    ]);
    let store = CatalogStore::new(project.path())
        .with_file_name("commands.json")
        .with_detectors(enabled_detectors(&["module".to_string()]));

    let catalog = store.load().unwrap();

    assert_eq!(catalog.len(), 4);
    assert!(project.path().join("commands.json").exists());
    assert!(!project.path().join(CATALOG).exists());
}

#[cfg(unix)]
#[test]
fn test_write_failure_still_returns_catalog() {
    use std::os::unix::fs::PermissionsExt;

    let project = create_go_project();
    fs::set_permissions(project.path(), fs::Permissions::from_mode(0o555)).unwrap();

    // Root ignores directory permissions
    let writable = fs::write(project.path().join("write-check"), "").is_ok();
    let result = CatalogStore::new(project.path()).load();
    fs::set_permissions(project.path(), fs::Permissions::from_mode(0o755)).unwrap();

    if writable {
        return;
    }
    let catalog = result.unwrap();
    assert_eq!(catalog.len(), 3);
    assert!(!project.path().join(CATALOG).exists());
}
