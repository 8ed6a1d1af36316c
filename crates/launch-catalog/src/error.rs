//! Catalog layer error types

use launch_domain::DomainError;
use thiserror::Error;

/// Catalog layer errors
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Invalid record in snapshot: {0}")]
    InvalidRecord(#[from] DomainError),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Snapshot I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
