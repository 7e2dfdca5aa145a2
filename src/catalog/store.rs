//! Load-or-generate persistence for the command catalog.
//!
//! The catalog lives in a JSON file next to the project. When the file is
//! missing, the detectors run and a non-empty result is written back so the
//! user can edit it; an existing file is always taken as-is.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, warn};

use super::label::project_label;
use super::types::Catalog;
use crate::detect::{default_detectors, detect_all, Detector};
use crate::error::{DxError, Result};

/// Default file name of the persisted catalog.
pub const CATALOG_FILE_NAME: &str = ".project-commands.json";

/// Reads, generates and writes the catalog of one project directory.
pub struct CatalogStore {
    project_dir: PathBuf,
    file_name: String,
    detectors: Vec<Box<dyn Detector>>,
}

impl CatalogStore {
    /// Create a store for `project_dir` with the built-in detectors.
    pub fn new(project_dir: impl Into<PathBuf>) -> Self {
        Self {
            project_dir: project_dir.into(),
            file_name: CATALOG_FILE_NAME.to_string(),
            detectors: default_detectors(),
        }
    }

    /// Replace the detectors used for generation.
    pub fn with_detectors(mut self, detectors: Vec<Box<dyn Detector>>) -> Self {
        self.detectors = detectors;
        self
    }

    /// Use a different catalog file name inside the project directory.
    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = file_name.into();
        self
    }

    /// Get the project directory.
    pub fn project_dir(&self) -> &Path {
        &self.project_dir
    }

    /// Path of the persisted catalog file.
    pub fn catalog_path(&self) -> PathBuf {
        self.project_dir.join(&self.file_name)
    }

    /// Check whether a persisted catalog exists.
    pub fn exists(&self) -> bool {
        self.catalog_path().exists()
    }

    /// Load the persisted catalog, generating it first if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`DxError::CatalogRead`] or [`DxError::CatalogParse`] when a
    /// persisted file exists but cannot be used. Detection problems are never
    /// errors.
    pub fn load(&self) -> Result<Catalog> {
        self.load_with_consent(|_, _| true)
    }

    /// Like [`load`](Self::load), but asks `confirm` before writing a newly
    /// generated, non-empty catalog.
    ///
    /// # Errors
    ///
    /// Returns [`DxError::GenerationDeclined`] when `confirm` answers `false`,
    /// plus the errors of [`load`](Self::load).
    pub fn load_with_consent<F>(&self, confirm: F) -> Result<Catalog>
    where
        F: FnOnce(&Path, &Catalog) -> bool,
    {
        let path = self.catalog_path();

        if !path.exists() {
            let catalog = self.generate();

            if catalog.is_empty() {
                info!(dir = %self.project_dir.display(), "no commands detected, nothing persisted");
                return Ok(catalog);
            }

            if !confirm(&path, &catalog) {
                return Err(DxError::GenerationDeclined);
            }

            match self.save(&catalog) {
                Ok(()) => info!(
                    path = %path.display(),
                    count = catalog.len(),
                    "generated command catalog"
                ),
                Err(e) => {
                    warn!(error = %e, "could not persist generated catalog");
                    return Ok(catalog);
                }
            }
        }

        self.read()
    }

    /// Delete the persisted catalog and load again, which re-runs detection.
    ///
    /// # Errors
    ///
    /// Returns [`DxError::CatalogWrite`] if the old file cannot be removed.
    pub fn regenerate(&self) -> Result<Catalog> {
        self.remove()?;
        self.load()
    }

    /// Delete the persisted catalog. Returns whether a file was removed.
    ///
    /// # Errors
    ///
    /// Returns [`DxError::CatalogWrite`] if the file exists but cannot be removed.
    pub fn remove(&self) -> Result<bool> {
        let path = self.catalog_path();
        match fs::remove_file(&path) {
            Ok(()) => {
                debug!(path = %path.display(), "removed persisted catalog");
                Ok(true)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(source) => Err(DxError::CatalogWrite { path, source }),
        }
    }

    /// Run the detectors against the project directory without touching disk.
    pub fn generate(&self) -> Catalog {
        let mut catalog = Catalog::new(project_label(&self.project_dir));
        catalog.extend(detect_all(&self.project_dir, &self.detectors));
        catalog
    }

    /// Read and parse the persisted catalog.
    ///
    /// # Errors
    ///
    /// Returns [`DxError::CatalogRead`] or [`DxError::CatalogParse`].
    pub fn read(&self) -> Result<Catalog> {
        let path = self.catalog_path();
        let content = fs::read_to_string(&path).map_err(|source| DxError::CatalogRead {
            path: path.clone(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|e| DxError::catalog_parse(&path, &e))
    }

    /// Write the catalog as pretty-printed JSON.
    ///
    /// The content goes to a sibling temporary file which then replaces the
    /// target, so the target is never left half-written.
    ///
    /// # Errors
    ///
    /// Returns [`DxError::CatalogWrite`] if writing or renaming fails.
    pub fn save(&self, catalog: &Catalog) -> Result<()> {
        let path = self.catalog_path();
        let content = to_pretty_json(catalog).map_err(|e| DxError::CatalogWrite {
            path: path.clone(),
            source: std::io::Error::new(std::io::ErrorKind::InvalidData, e),
        })?;

        let tmp_path = self.project_dir.join(format!("{}.tmp", self.file_name));
        let result = fs::write(&tmp_path, content).and_then(|()| fs::rename(&tmp_path, &path));

        if let Err(source) = result {
            let _ = fs::remove_file(&tmp_path);
            return Err(DxError::CatalogWrite { path, source });
        }

        Ok(())
    }
}

/// Serialize with four-space indentation and a trailing newline.
fn to_pretty_json(catalog: &Catalog) -> serde_json::Result<String> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    catalog.serialize(&mut serializer)?;
    buf.push(b'\n');
    // serde_json only emits UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
