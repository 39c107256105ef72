use std::path::PathBuf;

use thiserror::Error;

/// Structural problems with an incident file
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("unsupported file format for {path:?} (expected .json or .csv)")]
    UnsupportedFormat { path: PathBuf },

    #[error("unknown format {0:?} (expected json or csv)")]
    UnknownFormat(String),

    #[error("missing required column: {0}")]
    MissingColumn(String),

    #[error("expected a JSON array of records")]
    NotAnArray,

    #[error("record {index} is not a JSON object")]
    NotAnObject { index: usize },
}
