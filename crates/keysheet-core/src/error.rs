//! Error types for Keysheet core.

use thiserror::Error;

/// Errors that can occur while loading and processing cheatsheet documents
#[derive(Error, Debug)]
pub enum KeysheetError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid document: {0}")]
    InvalidDocument(String),
}

pub type Result<T> = std::result::Result<T, KeysheetError>;
