// crates/cli/src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Engine(#[from] tidbit_scan_engine::error::EngineError),

    #[error("Cannot resolve path: {0}")]
    PathResolution(String),

    #[error("Cannot inspect file '{path}': {source}")]
    Sniff {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("File '{path}' is not a plain text file")]
    NotText { path: PathBuf },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;
