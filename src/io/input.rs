use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, warn};

use super::{FileFormat, IngestError};
use crate::models::{CellValue, Field, Record, RecordSet};

/// Read an incident file, picking the parser from the file extension
pub fn read_records(path: &Path) -> Result<RecordSet> {
    let format = FileFormat::from_path(path)?;
    let mut records = match format {
        FileFormat::Json => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read file: {:?}", path))?;
            parse_json_records(&content)?
        }
        FileFormat::Csv => {
            let file = std::fs::File::open(path)
                .with_context(|| format!("Failed to open file: {:?}", path))?;
            parse_csv_records(file)?
        }
    };
    for header in records.canonicalize_headers() {
        warn!("Header {:?} duplicates an existing column, left unrenamed", header);
    }
    debug!(
        "Read {} records with {} columns from {:?}",
        records.len(),
        records.columns.len(),
        path
    );
    Ok(records)
}

/// Parse a JSON array of objects. Columns are collected in first-seen order.
pub fn parse_json_records(json: &str) -> Result<RecordSet> {
    let value: serde_json::Value =
        serde_json::from_str(json).context("Failed to parse incident JSON")?;
    let rows = value.as_array().ok_or(IngestError::NotAnArray)?;

    let mut set = RecordSet::default();
    for (index, row) in rows.iter().enumerate() {
        let object = row
            .as_object()
            .ok_or(IngestError::NotAnObject { index })?;
        let mut record = Record::new();
        for (column, cell) in object {
            set.ensure_column(column);
            record.set(column.as_str(), CellValue::from_json(cell));
        }
        set.records.push(record);
    }
    Ok(set)
}

/// Parse CSV with a header row. Empty cells become null.
pub fn parse_csv_records<R: std::io::Read>(reader: R) -> Result<RecordSet> {
    let mut csv_reader = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
    let columns: Vec<String> = csv_reader
        .headers()
        .context("Failed to read CSV header")?
        .iter()
        .map(str::to_string)
        .collect();

    let mut records = Vec::new();
    for (index, row) in csv_reader.records().enumerate() {
        let row = row.with_context(|| format!("Failed to read CSV record {}", index))?;
        let record = Record::from_pairs(
            columns
                .iter()
                .zip(row.iter())
                .map(|(column, raw)| (column.as_str(), CellValue::from_raw(raw))),
        );
        records.push(record);
    }
    Ok(RecordSet::new(columns, records))
}

/// Fail unless every listed field has a column
pub fn require_fields(records: &RecordSet, fields: &[Field]) -> Result<(), IngestError> {
    match fields.iter().find(|f| !records.has_column(f.column())) {
        Some(field) => Err(IngestError::MissingColumn(field.column().to_string())),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_json_records() {
        let json = r#"[
            {"Date": "09-Sep-2023", "Age": 30, "Species ": "Tiger shark", "Time": null},
            {"Date": "1900", "Age": "adult", "Location": "Durban"}
        ]"#;
        let set = parse_json_records(json).unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.columns, vec!["Date", "Age", "Species ", "Time", "Location"]);
        assert_eq!(set.records[0].get("Age"), &CellValue::Number(30.0));
        assert_eq!(set.records[0].get("Time"), &CellValue::Null);
        assert_eq!(set.records[1].get("Time"), &CellValue::Null);
        assert_eq!(set.records[1].get("Location"), &CellValue::text("Durban"));
    }

    #[test]
    fn test_parse_json_rejects_bad_shapes() {
        let err = parse_json_records(r#"{"Date": "1900"}"#).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<IngestError>(),
            Some(IngestError::NotAnArray)
        ));

        let err = parse_json_records(r#"[{"Date": "1900"}, 3]"#).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<IngestError>(),
            Some(IngestError::NotAnObject { index: 1 })
        ));

        assert!(parse_json_records("not json").is_err());
    }

    #[test]
    fn test_parse_csv_records() {
        let csv = "Date,Age,Species ,Time\n09-Sep-2023,30,Tiger shark,\n1900,adult,,night\n";
        let set = parse_csv_records(csv.as_bytes()).unwrap();
        assert_eq!(set.columns, vec!["Date", "Age", "Species ", "Time"]);
        assert_eq!(set.len(), 2);
        assert_eq!(set.records[0].get("Age"), &CellValue::text("30"));
        assert_eq!(set.records[0].get("Time"), &CellValue::Null);
        assert_eq!(set.records[1].get("Species "), &CellValue::Null);
    }

    #[test]
    fn test_read_records_canonicalizes_headers() {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        writeln!(file, "Date,Sex ,Species ").unwrap();
        writeln!(file, "1900,M,White shark").unwrap();

        let set = read_records(file.path()).unwrap();
        assert!(set.has_column("Sex"));
        assert!(set.has_column("Species"));
        assert_eq!(set.records[0].field(Field::Species), &CellValue::text("White shark"));
    }

    #[test]
    fn test_read_records_keeps_duplicate_padded_header() {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        writeln!(file, "Species,Species ").unwrap();
        writeln!(file, "White shark,Tiger shark").unwrap();

        let set = read_records(file.path()).unwrap();
        assert_eq!(set.columns, vec!["Species", "Species "]);
        assert_eq!(set.records[0].field(Field::Species), &CellValue::text("White shark"));
        assert_eq!(set.records[0].get("Species "), &CellValue::text("Tiger shark"));
    }

    #[test]
    fn test_read_records_unsupported_extension() {
        let file = tempfile::Builder::new().suffix(".xlsx").tempfile().unwrap();
        let err = read_records(file.path()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<IngestError>(),
            Some(IngestError::UnsupportedFormat { .. })
        ));
    }

    #[test]
    fn test_require_fields() {
        let set = parse_json_records(r#"[{"Date": "1900", "Species": "White shark"}]"#).unwrap();
        assert!(require_fields(&set, &[Field::Date, Field::Species]).is_ok());
        assert!(matches!(
            require_fields(&set, &[Field::Species, Field::Age]),
            Err(IngestError::MissingColumn(column)) if column == "Age"
        ));
    }
}
