use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use super::FileFormat;
use crate::models::{Field, RecordSet};
use crate::stages::{FilterResult, NormalizationResult};

/// Write a record set in the given format, columns in record-set order
pub fn write_records(records: &RecordSet, path: &Path, format: FileFormat) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create file: {:?}", path))?;
    match format {
        FileFormat::Json => serde_json::to_writer_pretty(file, &records_to_json(records))
            .context("Failed to write JSON")?,
        FileFormat::Csv => write_csv(records, file)?,
    }
    Ok(())
}

/// Records as a JSON array of objects
pub fn records_to_json(records: &RecordSet) -> serde_json::Value {
    let rows = records
        .records
        .iter()
        .map(|record| {
            let object: serde_json::Map<String, serde_json::Value> = records
                .columns
                .iter()
                .map(|column| (column.clone(), record.get(column).to_json()))
                .collect();
            serde_json::Value::Object(object)
        })
        .collect();
    serde_json::Value::Array(rows)
}

/// Records as CSV with a header row; null cells are written empty
pub fn write_csv<W: std::io::Write>(records: &RecordSet, writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer
        .write_record(&records.columns)
        .context("Failed to write CSV header")?;
    for record in &records.records {
        csv_writer
            .write_record(records.columns.iter().map(|c| record.get(c).to_field()))
            .context("Failed to write CSV record")?;
    }
    csv_writer.flush().context("Failed to flush CSV")?;
    Ok(())
}

/// Summary of one cleaning run
#[derive(Debug, Clone, Serialize)]
pub struct CleaningReport {
    pub run_id: String,
    pub generated_at: String,
    pub input_records: usize,
    pub output_records: usize,
    pub dropped_records: usize,
    pub dropped_by_species: BTreeMap<String, usize>,
    pub normalized_fields: Vec<Field>,
    pub skipped_fields: Vec<Field>,
    pub pruned_columns: Vec<String>,
    pub unmapped_countries: Vec<String>,
}

impl CleaningReport {
    /// Build a report from the results of the column pass and the row filter
    pub fn new(normalization: &NormalizationResult, filter: &FilterResult) -> Self {
        Self {
            run_id: uuid::Uuid::new_v4().to_string(),
            generated_at: chrono::Utc::now().to_rfc3339(),
            input_records: normalization.records,
            output_records: filter.kept,
            dropped_records: filter.dropped,
            dropped_by_species: filter.dropped_by_label.clone(),
            normalized_fields: normalization.fields.clone(),
            skipped_fields: normalization.skipped.clone(),
            pruned_columns: normalization.pruned_columns.clone(),
            unmapped_countries: normalization.unmapped_countries.iter().cloned().collect(),
        }
    }

    /// Write as JSON to a file
    pub fn write_json(&self, path: &Path) -> Result<()> {
        let file = std::fs::File::create(path)
            .with_context(|| format!("Failed to create file: {:?}", path))?;
        serde_json::to_writer_pretty(file, self).context("Failed to write JSON")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::{parse_csv_records, parse_json_records};
    use crate::models::{CellValue, Record};

    fn sample_set() -> RecordSet {
        RecordSet::new(
            vec!["Date".to_string(), "Age".to_string(), "Species".to_string()],
            vec![
                Record::from_pairs([
                    ("Date", CellValue::text("09 Sep 2023")),
                    ("Age", CellValue::Number(50.0)),
                    ("Species", CellValue::text("Tiger Shark")),
                ]),
                Record::from_pairs([
                    ("Date", CellValue::text("01 Jan 1902")),
                    ("Species", CellValue::text("Bull Shark, Juvenile")),
                ]),
            ],
        )
    }

    #[test]
    fn test_records_to_json_keeps_column_order() {
        let json = records_to_json(&sample_set());
        let first = json[0].as_object().unwrap();
        let keys: Vec<&str> = first.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["Date", "Age", "Species"]);
        assert_eq!(json[0]["Age"], serde_json::json!(50));
        assert_eq!(json[1]["Age"], serde_json::Value::Null);
    }

    #[test]
    fn test_write_csv() {
        let mut buffer = Vec::new();
        write_csv(&sample_set(), &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert_eq!(
            text,
            "Date,Age,Species\n09 Sep 2023,50,Tiger Shark\n01 Jan 1902,,\"Bull Shark, Juvenile\"\n"
        );
    }

    #[test]
    fn test_write_records_reads_back() {
        let dir = tempfile::tempdir().unwrap();

        let json_path = dir.path().join("cleaned.json");
        write_records(&sample_set(), &json_path, FileFormat::Json).unwrap();
        let content = std::fs::read_to_string(&json_path).unwrap();
        assert_eq!(parse_json_records(&content).unwrap(), sample_set_with_nulls());

        let csv_path = dir.path().join("cleaned.csv");
        write_records(&sample_set(), &csv_path, FileFormat::Csv).unwrap();
        let file = std::fs::File::open(&csv_path).unwrap();
        let set = parse_csv_records(file).unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.records[1].get("Age"), &CellValue::Null);
    }

    // JSON output writes every column, so absent cells come back as explicit nulls
    fn sample_set_with_nulls() -> RecordSet {
        let mut set = sample_set();
        set.records[1].set("Age", CellValue::Null);
        set
    }

    #[test]
    fn test_report() {
        let mut normalization = NormalizationResult {
            records: 5,
            fields: vec![Field::Date, Field::Species],
            ..Default::default()
        };
        normalization.unmapped_countries.insert("Atlantis".to_string());
        let mut filter = FilterResult {
            kept: 3,
            dropped: 2,
            ..Default::default()
        };
        filter.dropped_by_label.insert("NA".to_string(), 2);

        let report = CleaningReport::new(&normalization, &filter);
        assert_eq!(report.input_records, 5);
        assert_eq!(report.output_records, 3);
        assert_eq!(report.dropped_by_species.get("NA"), Some(&2));
        assert_eq!(report.unmapped_countries, vec!["Atlantis"]);
        assert!(uuid::Uuid::parse_str(&report.run_id).is_ok());

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");
        report.write_json(&path).unwrap();
        let written: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written["dropped_records"], serde_json::json!(2));
        assert_eq!(written["normalized_fields"], serde_json::json!(["Date", "Species"]));
    }
}
