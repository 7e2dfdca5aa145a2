//! Integration tests for command detection.
//!
//! These tests run the built-in detectors against real directories and check
//! the entries each ecosystem contributes.

use std::fs;

use distructions::catalog::CommandEntry;
use distructions::detect::{
    default_detectors, detect_all, detect_runner, enabled_detectors, Runner,
};

use crate::integration::fixtures::{
    create_compose_project, create_empty_project, create_go_project, create_node_project,
    create_project, package_json, standard_scripts,
};

fn names(entries: &[CommandEntry]) -> Vec<&str> {
    entries.iter().map(|e| e.name()).collect()
}

// ==================== Manifest ====================

#[test]
fn test_one_entry_per_script() {
    let project = create_node_project(&standard_scripts());
    let entries = detect_all(project.path(), &default_detectors());

    assert_eq!(entries.len(), standard_scripts().len());
    assert!(entries.iter().all(|e| e.name().starts_with("npm: ")));
    assert!(entries.iter().any(|e| e.command() == "npm run lint"));
}

#[test]
fn test_colliding_script_texts_are_all_kept() {
    let project = create_node_project(&[("a", "echo same"), ("b", "echo same"), ("c", "echo same")]);
    let entries = detect_all(project.path(), &default_detectors());

    assert_eq!(names(&entries), vec!["npm: a", "npm: b", "npm: c"]);
}

#[test]
fn test_lock_file_selects_runner() {
    let project = create_project(&[
        ("package.json", &package_json(&[("dev", "vite")])),
        ("yarn.lock", ""),
    ]);

    assert_eq!(detect_runner(project.path(), None), Runner::Yarn);

    let entries = detect_all(project.path(), &default_detectors());
    assert_eq!(entries[0].name(), "yarn: dev");
    assert_eq!(entries[0].command(), "yarn run dev");
}

#[test]
fn test_package_manager_field_beats_lock_file() {
    let project = create_project(&[
        (
            "package.json",
            r#"{"packageManager": "bun@1.1.0", "scripts": {"dev": "vite"}}"#,
        ),
        ("pnpm-lock.yaml", ""),
    ]);

    let entries = detect_all(project.path(), &default_detectors());
    assert_eq!(entries[0].command(), "bun run dev");
}

#[test]
fn test_malformed_manifest_contributes_nothing() {
    let project = create_project(&[("package.json", "{ not json"), ("go.mod", "module x\n")]);
    let entries = detect_all(project.path(), &default_detectors());

    assert_eq!(names(&entries), vec!["Go: Run", "Go: Test", "Go: Build"]);
}

// ==================== Compose ====================

#[test]
fn test_compose_services() {
    let project = create_compose_project(&["a", "b", "c"]);
    let entries = detect_all(project.path(), &default_detectors());

    assert_eq!(entries.len(), 6);
    assert_eq!(entries[3].name(), "Docker: Start a");
    assert_eq!(entries[5].command(), "docker-compose up c");
}

#[test]
fn test_compose_alternative_file_name() {
    let project = create_project(&[("compose.yaml", "services:\n  web:\n    image: nginx\n")]);
    let entries = detect_all(project.path(), &default_detectors());

    assert_eq!(entries.len(), 4);
}

#[test]
fn test_compose_without_services_contributes_nothing() {
    let project = create_project(&[("docker-compose.yml", "version: '3'\n")]);
    assert!(detect_all(project.path(), &default_detectors()).is_empty());
}

// ==================== Go and Cargo ====================

#[test]
fn test_go_module_only() {
    let project = create_go_project();
    let entries = detect_all(project.path(), &default_detectors());

    let pairs: Vec<(&str, &str)> = entries.iter().map(|e| (e.name(), e.command())).collect();
    assert_eq!(
        pairs,
        vec![
            ("Go: Run", "go run ."),
            ("Go: Test", "go test ./..."),
            ("Go: Build", "go build"),
        ]
    );
}

#[test]
fn test_cargo_workspace_has_no_run_entry() {
    let project = create_project(&[("Cargo.toml", "[workspace]\nmembers = [\"a\"]\n")]);
    let entries = detect_all(project.path(), &default_detectors());

    assert_eq!(names(&entries), vec!["Cargo: Test", "Cargo: Build"]);
}

// ==================== Ordering and Selection ====================

#[test]
fn test_detector_order_is_fixed() {
    let project = create_project(&[
        ("Cargo.toml", "[package]\nname = \"demo\"\nversion = \"0.1.0\"\n"),
        ("go.mod", "module example.com/demo\n"),
        ("docker-compose.yml", "services:\n  db:\n    image: postgres\n"),
        ("package.json", &package_json(&[("dev", "vite")])),
    ]);

    let entries = detect_all(project.path(), &default_detectors());
    let prefixes: Vec<&str> = entries
        .iter()
        .map(|e| e.name().split(':').next().unwrap_or_default())
        .collect();

    let mut deduped = prefixes.clone();
    deduped.dedup();
    assert_eq!(deduped, vec!["npm", "Docker", "Go", "Cargo"]);
}

#[test]
fn test_disabled_detector_is_skipped() {
    let project = create_project(&[
        ("go.mod", "module example.com/demo\n"),
        ("docker-compose.yml", "services:\n  db:\n    image: postgres\n"),
    ]);

    let detectors = enabled_detectors(&["compose".to_string()]);
    let entries = detect_all(project.path(), &detectors);

    assert_eq!(names(&entries), vec!["Go: Run", "Go: Test", "Go: Build"]);
}

#[test]
fn test_empty_directory_detects_nothing() {
    let project = create_empty_project();
    assert!(detect_all(project.path(), &default_detectors()).is_empty());
}

#[test]
fn test_unreadable_marker_is_ignored() {
    // A directory named like a marker file cannot be read as one
    let project = create_empty_project();
    fs::create_dir(project.path().join("package.json")).unwrap();

    assert!(detect_all(project.path(), &default_detectors()).is_empty());
}
