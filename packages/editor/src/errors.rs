//! Error types for the editor

use thiserror::Error;

/// Rejected import payload; the store is left untouched
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ImportError {
    #[error("Invalid project file: {0}")]
    InvalidProject(String),
}

#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("Unknown template: {0}")]
    UnknownTemplate(String),

    #[error("Template {id} is malformed: {source}")]
    Malformed {
        id: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Error, Debug)]
pub enum EditorError {
    #[error("Registry error: {0}")]
    Registry(#[from] pagesmith_model::RegistryError),

    #[error(transparent)]
    Import(#[from] ImportError),

    #[error("Persistence error: {0}")]
    Persistence(#[from] PersistenceError),

    #[error("Template error: {0}")]
    Template(#[from] TemplateError),
}
