pub mod error;
pub mod input;
pub mod output;

pub use error::*;
pub use input::*;
pub use output::*;

use std::path::Path;
use std::str::FromStr;

/// Flat file layout for incident records
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    /// Array of objects, one per record
    Json,
    /// Header row followed by one row per record
    Csv,
}

impl FileFormat {
    /// Pick the format from a file extension
    pub fn from_path(path: &Path) -> Result<Self, IngestError> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| ext.parse().ok())
            .ok_or_else(|| IngestError::UnsupportedFormat {
                path: path.to_path_buf(),
            })
    }
}

impl FromStr for FileFormat {
    type Err = IngestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(FileFormat::Json),
            "csv" => Ok(FileFormat::Csv),
            _ => Err(IngestError::UnknownFormat(s.to_string())),
        }
    }
}
