use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PatchError {
    #[error("Project validation failed: {0}")]
    ProjectValidation(String),

    #[error("Version catalog not found: {}", .0.display())]
    CatalogNotFound(PathBuf),

    #[error("Failed to read catalog '{}': {source}", path.display())]
    CatalogRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write catalog '{}': {source}", path.display())]
    CatalogWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parsing failed: {0}")]
    TomlParsing(String),
}

pub type Result<T> = std::result::Result<T, PatchError>;
