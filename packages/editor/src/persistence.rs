//! # Persistence Gateway
//!
//! Moves whole documents in and out of the store:
//!
//! - **save / restore** through a [`PersistencePort`] under a fixed key
//! - **export** to a downloadable JSON artifact stamped with time and format version
//! - **import** of an arbitrary JSON text, validated before anything changes
//!
//! Restore is fail-open: a corrupt or unreadable record is logged and the
//! store keeps its current document.

use chrono::{DateTime, SecondsFormat, Utc};
use pagesmith_model::{utils::slugify, Document};
use serde_json::Value;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::errors::{ImportError, PersistenceError};
use crate::mutations::Action;
use crate::store::Store;

/// Key the current project is stored under
pub const PROJECT_KEY: &str = "pagesmith-project";

/// Format version written into exported artifacts
pub const EXPORT_FORMAT_VERSION: &str = "1.0.0";

pub const EXPORT_MIME_TYPE: &str = "application/json";

/// Key/value text storage
pub trait PersistencePort {
    fn save(&mut self, key: &str, value: &str) -> std::io::Result<()>;

    /// `Ok(None)` when nothing is stored under `key`
    fn load(&self, key: &str) -> std::io::Result<Option<String>>;
}

/// In-memory storage for tests
#[derive(Debug, Default)]
pub struct MemoryPersistence {
    pub entries: HashMap<String, String>,
}

impl MemoryPersistence {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PersistencePort for MemoryPersistence {
    fn save(&mut self, key: &str, value: &str) -> std::io::Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn load(&self, key: &str) -> std::io::Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }
}

/// One `<key>.json` file per key inside `dir`
#[derive(Debug, Clone)]
pub struct FilePersistence {
    dir: PathBuf,
}

impl FilePersistence {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl PersistencePort for FilePersistence {
    fn save(&mut self, key: &str, value: &str) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.dir)?;
        std::fs::write(self.path_for(key), value)
    }

    fn load(&self, key: &str) -> std::io::Result<Option<String>> {
        match std::fs::read_to_string(self.path_for(key)) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }
}

/// A document ready to be written out as a download
#[derive(Debug, Clone, PartialEq)]
pub struct ExportArtifact {
    pub file_name: String,
    pub mime_type: &'static str,
    /// Copy of the present with `exportedAt` and `version` set
    pub document: Document,
}

impl ExportArtifact {
    pub fn to_json(&self) -> Result<String, PersistenceError> {
        Ok(serde_json::to_string_pretty(&self.document)?)
    }
}

pub struct Gateway<P: PersistencePort> {
    port: P,
    key: String,
}

impl<P: PersistencePort> Gateway<P> {
    pub fn new(port: P) -> Self {
        Self::with_key(port, PROJECT_KEY)
    }

    pub fn with_key(port: P, key: impl Into<String>) -> Self {
        Self {
            port,
            key: key.into(),
        }
    }

    pub fn port(&self) -> &P {
        &self.port
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Write the present document under the project key
    pub fn save(&mut self, store: &Store) -> Result<(), PersistenceError> {
        let json = serde_json::to_string_pretty(store.present())?;
        self.port.save(&self.key, &json)?;
        debug!("Saved project under {} ({} bytes)", self.key, json.len());
        Ok(())
    }

    /// Load the stored project into `store`
    ///
    /// Returns `true` when a stored document was loaded. Missing, unreadable
    /// or malformed records leave the store as it was.
    pub fn restore(&self, store: &mut Store) -> bool {
        let text = match self.port.load(&self.key) {
            Ok(Some(text)) => text,
            Ok(None) => {
                debug!("No stored project under {}", self.key);
                return false;
            }
            Err(e) => {
                warn!("Could not read stored project: {}", e);
                return false;
            }
        };

        match serde_json::from_str::<Document>(&text) {
            Ok(document) => {
                store.dispatch(Action::LoadProject(document));
                info!("Restored project from {}", self.key);
                true
            }
            Err(e) => {
                warn!("Ignoring malformed stored project: {}", e);
                false
            }
        }
    }

    pub fn export(&self, store: &Store) -> ExportArtifact {
        self.export_at(store, Utc::now())
    }

    /// Export with a fixed timestamp
    pub fn export_at(&self, store: &Store, at: DateTime<Utc>) -> ExportArtifact {
        let mut document = store.present().clone();
        document.metadata.exported_at = Some(at.to_rfc3339_opts(SecondsFormat::Secs, true));
        document.metadata.version = Some(EXPORT_FORMAT_VERSION.to_string());

        ExportArtifact {
            file_name: export_file_name(&document.metadata.title, at),
            mime_type: EXPORT_MIME_TYPE,
            document,
        }
    }

    /// Validate `text` as a project file and load it
    pub fn import(&self, store: &mut Store, text: &str) -> Result<(), ImportError> {
        let value: Value = serde_json::from_str(text)
            .map_err(|e| ImportError::InvalidProject(format!("not valid JSON: {}", e)))?;
        self.import_value(store, value)
    }

    pub fn import_value(&self, store: &mut Store, value: Value) -> Result<(), ImportError> {
        let mut document = parse_project(value)?;

        // Export stamps describe the file, not the live document
        document.metadata.exported_at = None;
        document.metadata.version = None;

        info!(
            "Importing project {:?} ({} pages)",
            document.metadata.title,
            document.pages.len()
        );
        store.dispatch(Action::LoadProject(document));
        Ok(())
    }
}

fn parse_project(value: Value) -> Result<Document, ImportError> {
    if !value.get("metadata").is_some_and(Value::is_object) {
        return Err(ImportError::InvalidProject(
            "missing \"metadata\" object".to_string(),
        ));
    }
    if !value.get("pages").is_some_and(Value::is_array) {
        return Err(ImportError::InvalidProject("missing \"pages\" array".to_string()));
    }

    serde_json::from_value(value).map_err(|e| ImportError::InvalidProject(e.to_string()))
}

/// `{slug(title) or "project"}-{YYYYMMDD-HHMMSS}.json`
pub fn export_file_name(title: &str, at: DateTime<Utc>) -> String {
    let slug = slugify(title);
    let stem = if slug.is_empty() { "project" } else { slug.as_str() };
    format!("{}-{}.json", stem, at.format("%Y%m%d-%H%M%S"))
}
