//! End-to-end cleaning: column pass, then row filter.

use std::collections::HashSet;

use crate::io::CleaningReport;
use crate::models::{CellValue, Field, RecordSet, TimeOfDay, UNDEFINED, UNKNOWN_TYPE};
use crate::normalizers::{normalize_field, NormalizerConfig};
use crate::stages::{filter_unresolved, normalize, preview_filter, FilterConfig, FilterResult};

/// Configuration for a full cleaning run
#[derive(Debug, Clone, Default)]
pub struct PipelineConfig {
    pub normalizer: NormalizerConfig,
    pub filter: FilterConfig,
}

/// Normalize every configured column, then drop unresolved records.
///
/// The filter only starts once the column pass has finished for every
/// record, parallel or not.
pub fn run(records: &mut RecordSet, config: &PipelineConfig) -> CleaningReport {
    let normalization = normalize(records, &config.normalizer);
    let filter = filter_unresolved(records, &config.filter);
    CleaningReport::new(&normalization, &filter)
}

/// How one column resolves, without modifying the record set
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnStats {
    pub field: Field,
    /// Distinct non-null raw values
    pub distinct_raw: usize,
    /// Distinct non-null values after normalization
    pub distinct_canonical: usize,
    /// Cells that normalize to null or an unknown marker
    pub unresolved: usize,
}

/// Dry-run summary of a record set
#[derive(Debug, Clone)]
pub struct Analysis {
    pub records: usize,
    pub columns: Vec<ColumnStats>,
    pub missing: Vec<Field>,
    /// What the row filter would drop
    pub filter: FilterResult,
}

/// Collect per-column resolution statistics and a filter preview
pub fn analyze(records: &RecordSet, config: &PipelineConfig) -> Analysis {
    let mut columns = Vec::new();
    let mut normalized = records.clone();
    for &field in &config.normalizer.fields {
        if !records.has_column(field.column()) {
            continue;
        }
        let mut raw = HashSet::new();
        let mut canonical = HashSet::new();
        let mut unresolved = 0;
        for record in normalized.records.iter_mut() {
            let value = record.field(field);
            if let Some(text) = value.to_text() {
                raw.insert(text.into_owned());
            }
            let cleaned = normalize_field(field, value);
            if is_unresolved(&cleaned) {
                unresolved += 1;
            }
            if let Some(text) = cleaned.to_text() {
                canonical.insert(text.into_owned());
            }
            record.set_field(field, cleaned);
        }
        columns.push(ColumnStats {
            field,
            distinct_raw: raw.len(),
            distinct_canonical: canonical.len(),
            unresolved,
        });
    }

    Analysis {
        records: records.len(),
        columns,
        missing: records.missing_fields(),
        filter: preview_filter(&normalized, &config.filter),
    }
}

fn is_unresolved(value: &CellValue) -> bool {
    match value {
        CellValue::Null => true,
        CellValue::Text(s) => {
            s.trim().is_empty()
                || s == TimeOfDay::Unknown.as_str()
                || s == UNDEFINED
                || s == UNKNOWN_TYPE
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Record;

    fn sample_set() -> RecordSet {
        let rows = [
            ("09-Sep-2023", "14h30", "Tiger shark, 2m"),
            ("1900-1905", "Not stated", "no shark involvement"),
            ("1900", "night", "Invalid"),
            ("Before 1900", "", "White shark"),
        ];
        RecordSet::new(
            vec!["Date".to_string(), "Time".to_string(), "Species".to_string()],
            rows.iter()
                .map(|(date, time, species)| {
                    Record::from_pairs([
                        ("Date", CellValue::from_raw(date)),
                        ("Time", CellValue::from_raw(time)),
                        ("Species", CellValue::from_raw(species)),
                    ])
                })
                .collect(),
        )
    }

    #[test]
    fn test_run() {
        let mut set = sample_set();
        let report = run(&mut set, &PipelineConfig::default());

        assert_eq!(report.input_records, 4);
        assert_eq!(report.output_records, 2);
        assert_eq!(report.dropped_records, 2);
        assert_eq!(report.dropped_by_species.get("not a shark"), Some(&1));
        assert_eq!(report.dropped_by_species.get("NA"), Some(&1));
        assert_eq!(set.len(), 2);
        assert_eq!(set.records[0].field(Field::Time), &CellValue::text("Afternoon"));
        assert_eq!(set.records[1].field(Field::Date), &CellValue::text("01 Jan 1899"));
        assert_eq!(set.records[1].field(Field::Time), &CellValue::text("unknown"));
    }

    #[test]
    fn test_analyze_leaves_records_untouched() {
        let set = sample_set();
        let analysis = analyze(&set, &PipelineConfig::default());
        assert_eq!(set, sample_set());

        assert_eq!(analysis.records, 4);
        assert_eq!(analysis.filter.dropped, 2);
        assert!(analysis.missing.contains(&Field::Country));

        let time = analysis
            .columns
            .iter()
            .find(|c| c.field == Field::Time)
            .unwrap();
        assert_eq!(time.distinct_raw, 3);
        assert_eq!(time.distinct_canonical, 3);
        assert_eq!(time.unresolved, 2);

        let species = analysis
            .columns
            .iter()
            .find(|c| c.field == Field::Species)
            .unwrap();
        assert_eq!(species.distinct_raw, 4);
        assert_eq!(species.unresolved, 0);
    }
}
