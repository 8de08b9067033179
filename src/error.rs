use thiserror::Error;

use std::path::PathBuf;

#[derive(Debug, Error)]
pub enum MonbanError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse policy {path}: {source}")]
    PolicyParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid policy: {0}")]
    InvalidPolicy(#[from] serde_json::Error),

    #[error("unknown resource type: {value}")]
    UnknownResourceType { value: String },
}
