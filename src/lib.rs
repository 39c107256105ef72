pub mod dictionaries;
pub mod io;
pub mod models;
pub mod normalizers;
pub mod pipeline;
pub mod rewriters;
pub mod stages;

pub use io::{
    read_records, require_fields, write_records, CleaningReport, FileFormat, IngestError,
};
pub use models::{CellValue, Field, Record, RecordSet, TimeOfDay};
pub use normalizers::{normalize_field, NormalizerConfig};
pub use pipeline::{analyze, run, Analysis, ColumnStats, PipelineConfig};
pub use stages::{
    execute_render, filter_unresolved, normalize, FilterConfig, FilterResult,
    NormalizationResult, RenderConfig,
};
