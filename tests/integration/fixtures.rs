//! Test fixtures for integration tests.
//!
//! Helpers that build throwaway project directories with `tempfile`.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Default catalog file name inside a project.
pub const CATALOG: &str = ".project-commands.json";

/// Path to a file under `tests/fixtures/`.
pub fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Read a file under `tests/fixtures/`.
pub fn read_fixture(name: &str) -> String {
    fs::read_to_string(fixture_path(name)).expect("Failed to read fixture")
}

/// Create a temporary project containing the given files.
pub fn create_project(files: &[(&str, &str)]) -> TempDir {
    let temp = TempDir::new().expect("Failed to create temp dir");
    for (name, content) in files {
        let path = temp.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dir");
        }
        fs::write(path, content).expect("Failed to write project file");
    }
    temp
}

/// Create an empty temporary directory.
pub fn create_empty_project() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

/// Create an empty directory that looks version controlled.
pub fn create_empty_repository() -> TempDir {
    let temp = create_empty_project();
    fs::create_dir(temp.path().join(".git")).expect("Failed to create .git");
    temp
}

/// Create a project with only a `go.mod`.
pub fn create_go_project() -> TempDir {
    create_project(&[("go.mod", "module example.com/demo\n\ngo 1.22\n")])
}

/// Create a project whose package.json holds `scripts`.
pub fn create_node_project(scripts: &[(&str, &str)]) -> TempDir {
    create_project(&[("package.json", &package_json(scripts))])
}

/// Create a project with a docker-compose.yml listing `services`.
pub fn create_compose_project(services: &[&str]) -> TempDir {
    create_project(&[("docker-compose.yml", &compose_file(services))])
}

/// Create a project with a persisted catalog copied from `tests/fixtures/`.
pub fn create_project_with_catalog(fixture: &str) -> TempDir {
    create_project(&[(CATALOG, &read_fixture(fixture))])
}

/// Build package.json content.
pub fn package_json(scripts: &[(&str, &str)]) -> String {
    let scripts: serde_json::Map<String, serde_json::Value> = scripts
        .iter()
        .map(|(name, cmd)| (name.to_string(), serde_json::Value::from(*cmd)))
        .collect();
    serde_json::json!({ "name": "demo", "scripts": scripts }).to_string()
}

/// Build docker-compose.yml content.
pub fn compose_file(services: &[&str]) -> String {
    let mut content = String::from("services:\n");
    for service in services {
        content.push_str(&format!("  {service}:\n    image: busybox\n"));
    }
    content
}

/// Read the persisted catalog of a project as JSON.
pub fn read_catalog(dir: &Path) -> serde_json::Value {
    let content = fs::read_to_string(dir.join(CATALOG)).expect("Failed to read catalog");
    serde_json::from_str(&content).expect("Catalog is not valid JSON")
}

/// Entry names of a persisted catalog, in order.
pub fn catalog_names(dir: &Path) -> Vec<String> {
    read_catalog(dir)["commands"]
        .as_array()
        .expect("commands is not an array")
        .iter()
        .map(|e| e["name"].as_str().unwrap_or_default().to_string())
        .collect()
}

/// Standard npm scripts used across tests.
pub fn standard_scripts() -> Vec<(&'static str, &'static str)> {
    vec![
        ("dev", "vite"),
        ("build", "vite build"),
        ("test", "vitest"),
        ("lint", "eslint ."),
    ]
}
