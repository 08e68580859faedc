use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LabelerError {
    // --- Filesystem ---
    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("input directory {} does not exist", .0.display())]
    DirectoryNotFound(PathBuf),

    #[error("cannot create output directory {}: {source}", path.display())]
    OutputDir {
        path: PathBuf,
        source: std::io::Error,
    },

    // --- Catalog ---
    #[error("malformed catalog {}: {reason}", path.display())]
    MalformedCatalog { path: PathBuf, reason: String },

    // --- Report ---
    #[error("cannot serialize category report: {0}")]
    Report(#[from] serde_json::Error),

    // --- Config ---
    #[error("invalid configuration: {0}")]
    ConfigError(String),
}

pub type Result<T> = std::result::Result<T, LabelerError>;
