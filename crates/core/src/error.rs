use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BundlescopeError {
    #[error("Directory does not exist: {}", .0.display())]
    DirectoryNotFound(PathBuf),
    #[error("No discovery strategy found bundles in {}", .0.display())]
    DiscoveryExhausted(PathBuf),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON serialization/deserialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<Box<dyn std::error::Error + Send + Sync>> for BundlescopeError {
    fn from(err: Box<dyn std::error::Error + Send + Sync>) -> Self {
        BundlescopeError::Internal(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, BundlescopeError>;
