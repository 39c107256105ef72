use std::collections::BTreeMap;

use serde::Serialize;
use tracing::{debug, info};

use crate::dictionaries::SPECIES_SENTINELS;
use crate::models::{CellValue, Field, Record, RecordSet};

/// Label under which records without any species value are counted
pub const MISSING_SPECIES: &str = "<missing>";

/// Configuration for the Stage 1 row filter
#[derive(Debug, Clone)]
pub struct FilterConfig {
    /// Species labels that mark a record as unresolved
    pub sentinels: Vec<String>,
    /// Whether null or blank species also drop the record
    pub drop_missing: bool,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            sentinels: SPECIES_SENTINELS.iter().map(|s| s.to_string()).collect(),
            drop_missing: true,
        }
    }
}

impl FilterConfig {
    /// Why a record would be dropped, or `None` if it is kept
    pub fn drop_reason(&self, record: &Record) -> Option<String> {
        let species = record.field(Field::Species);
        if species.is_blank() {
            return self.drop_missing.then(|| MISSING_SPECIES.to_string());
        }
        match species {
            CellValue::Text(label) if self.sentinels.iter().any(|s| s == label) => {
                Some(label.clone())
            }
            _ => None,
        }
    }
}

/// Result of Stage 1 filtering
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FilterResult {
    /// Records kept
    pub kept: usize,
    /// Records dropped
    pub dropped: usize,
    /// Dropped records per species label
    pub dropped_by_label: BTreeMap<String, usize>,
}

impl FilterResult {
    fn tally(&mut self, reason: Option<String>) -> bool {
        match reason {
            Some(label) => {
                self.dropped += 1;
                *self.dropped_by_label.entry(label).or_default() += 1;
                false
            }
            None => {
                self.kept += 1;
                true
            }
        }
    }
}

/// Execute Stage 1: drop records whose species did not resolve.
///
/// Must run after the Species column has been normalized for every record.
/// This is the only stage that removes records; the result carries the
/// counts needed to audit it.
pub fn filter_unresolved(records: &mut RecordSet, config: &FilterConfig) -> FilterResult {
    let mut result = FilterResult::default();
    records
        .records
        .retain(|record| result.tally(config.drop_reason(record)));

    for (label, count) in &result.dropped_by_label {
        debug!("Dropped {} records with species {:?}", count, label);
    }
    info!(
        "Row filter kept {} records, dropped {}",
        result.kept, result.dropped
    );
    result
}

/// Count what [`filter_unresolved`] would drop without touching the records
pub fn preview_filter(records: &RecordSet, config: &FilterConfig) -> FilterResult {
    let mut result = FilterResult::default();
    for record in &records.records {
        result.tally(config.drop_reason(record));
    }
    result
}
