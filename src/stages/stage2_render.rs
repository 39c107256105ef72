use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::info;

use crate::io::{write_records, CleaningReport, FileFormat};
use crate::models::RecordSet;

/// Configuration for Stage 2 rendering
#[derive(Debug, Clone, Default)]
pub struct RenderConfig {
    /// Output format; taken from the output extension when unset
    pub format: Option<FileFormat>,
    /// Whether to write the run report
    pub write_report: bool,
}

/// Result of Stage 2 rendering
#[derive(Debug)]
pub struct RenderResult {
    /// Path of the cleaned record set
    pub output_path: PathBuf,
    /// Format it was written in
    pub format: FileFormat,
    /// Path to the run report (if written)
    pub report_path: Option<PathBuf>,
}

/// Execute Stage 2: Rendering
///
/// Produces up to two artifacts:
/// 1. The cleaned record set, as JSON or CSV
/// 2. The run report, as JSON
pub fn execute_render(
    records: &RecordSet,
    report: &CleaningReport,
    output: &Path,
    report_output: Option<&Path>,
    config: &RenderConfig,
) -> Result<RenderResult> {
    let format = match config.format {
        Some(format) => format,
        None => FileFormat::from_path(output)?,
    };

    info!("Writing {} records to {:?} as {:?}", records.len(), output, format);
    write_records(records, output, format)?;

    let mut report_path = None;
    if config.write_report {
        if let Some(path) = report_output {
            info!("Writing run report to {:?}", path);
            report.write_json(path)?;
            report_path = Some(path.to_path_buf());
        }
    }

    Ok(RenderResult {
        output_path: output.to_path_buf(),
        format,
        report_path,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CellValue, Record};
    use crate::stages::{FilterResult, NormalizationResult};

    fn sample() -> (RecordSet, CleaningReport) {
        let records = RecordSet::new(
            vec!["Species".to_string()],
            vec![Record::from_pairs([("Species", CellValue::text("White Shark"))])],
        );
        let report = CleaningReport::new(
            &NormalizationResult::default(),
            &FilterResult {
                kept: 1,
                ..Default::default()
            },
        );
        (records, report)
    }

    #[test]
    fn test_render_with_report() {
        let (records, report) = sample();
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("cleaned.csv");
        let report_output = dir.path().join("report.json");
        let config = RenderConfig {
            format: None,
            write_report: true,
        };

        let result =
            execute_render(&records, &report, &output, Some(&report_output), &config).unwrap();
        assert_eq!(result.format, FileFormat::Csv);
        assert_eq!(result.report_path, Some(report_output.clone()));
        assert_eq!(
            std::fs::read_to_string(&output).unwrap(),
            "Species\nWhite Shark\n"
        );
        assert!(report_output.exists());
    }

    #[test]
    fn test_format_override() {
        let (records, report) = sample();
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("cleaned.out");
        let config = RenderConfig {
            format: Some(FileFormat::Json),
            write_report: false,
        };

        let result = execute_render(&records, &report, &output, None, &config).unwrap();
        assert_eq!(result.format, FileFormat::Json);
        assert!(result.report_path.is_none());
        let written: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(written[0]["Species"], serde_json::json!("White Shark"));
    }

    #[test]
    fn test_unknown_extension_without_format() {
        let (records, report) = sample();
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("cleaned.out");
        let result = execute_render(&records, &report, &output, None, &RenderConfig::default());
        assert!(result.is_err());
        assert!(!output.exists());
    }
}
