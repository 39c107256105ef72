use std::collections::BTreeSet;

use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::dictionaries::PRUNED_COLUMNS;
use crate::models::{Field, Record, RecordSet, OCEAN_COLUMN};
use crate::normalizers::{normalize_field, ocean_for_country, NormalizerConfig};

/// Result of Stage 0 normalization
#[derive(Debug, Clone, Default)]
pub struct NormalizationResult {
    /// Records visited
    pub records: usize,
    /// Columns that were normalized, in visiting order
    pub fields: Vec<Field>,
    /// Requested columns absent from the record set
    pub skipped: Vec<Field>,
    /// Bookkeeping columns removed before normalizing
    pub pruned_columns: Vec<String>,
    /// Distinct normalized countries with no ocean mapping
    pub unmapped_countries: BTreeSet<String>,
}

/// Perform Stage 0: column normalization
///
/// This stage:
/// 1. Drops bookkeeping columns (when configured)
/// 2. Rewrites every configured column in place with its normalizer
/// 3. Derives the Ocean column from Country (when configured)
///
/// Columns are independent of each other, so records may be processed in
/// any order; with `parallel` set they are spread over the rayon pool.
pub fn normalize(records: &mut RecordSet, config: &NormalizerConfig) -> NormalizationResult {
    let pruned_columns = if config.prune_columns {
        prune_columns(records)
    } else {
        Vec::new()
    };

    let (fields, skipped): (Vec<Field>, Vec<Field>) = config
        .fields
        .iter()
        .copied()
        .partition(|f| records.has_column(f.column()));
    for field in &skipped {
        warn!("Column {:?} not present, skipping", field.column());
    }

    let add_ocean = config.add_ocean && records.has_column(Field::Country.column());
    if config.add_ocean && !add_ocean {
        warn!("No Country column, Ocean column not derived");
    }

    debug!(
        "Normalizing {} records over {} columns (parallel: {})",
        records.len(),
        fields.len(),
        config.parallel
    );
    if config.parallel {
        records
            .records
            .par_iter_mut()
            .for_each(|record| normalize_record(record, &fields, add_ocean));
    } else {
        for record in records.records.iter_mut() {
            normalize_record(record, &fields, add_ocean);
        }
    }

    let mut unmapped_countries = BTreeSet::new();
    if add_ocean {
        records.ensure_column(OCEAN_COLUMN);
        unmapped_countries = collect_unmapped_countries(&records.records);
        for country in &unmapped_countries {
            debug!("No ocean mapping for country {:?}", country);
        }
    }

    info!(
        "Normalized {} columns across {} records ({} unmapped countries)",
        fields.len(),
        records.len(),
        unmapped_countries.len()
    );

    NormalizationResult {
        records: records.len(),
        fields,
        skipped,
        pruned_columns,
        unmapped_countries,
    }
}

/// Remove bookkeeping columns. Returns the columns that were present.
pub fn prune_columns(records: &mut RecordSet) -> Vec<String> {
    let pruned: Vec<String> = PRUNED_COLUMNS
        .iter()
        .filter(|column| records.drop_column(column))
        .map(|column| column.to_string())
        .collect();
    if !pruned.is_empty() {
        debug!("Pruned columns: {:?}", pruned);
    }
    pruned
}

fn normalize_record(record: &mut Record, fields: &[Field], add_ocean: bool) {
    for &field in fields {
        let cleaned = normalize_field(field, record.field(field));
        record.set_field(field, cleaned);
    }
    if add_ocean {
        let ocean = ocean_for_country(record.field(Field::Country));
        record.set(OCEAN_COLUMN, ocean);
    }
}

fn collect_unmapped_countries(records: &[Record]) -> BTreeSet<String> {
    records
        .iter()
        .filter(|r| r.get(OCEAN_COLUMN).is_null())
        .filter_map(|r| r.field(Field::Country).to_text())
        .map(|country| country.into_owned())
        .collect()
}
