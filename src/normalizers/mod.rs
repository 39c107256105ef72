//! Per-column normalizers.
//!
//! Every normalizer is a pure, total function from a raw cell to its
//! canonical cell: no I/O, no logging, no errors. Running one on its own
//! output returns the same value.

pub mod age;
pub mod categorical;
pub mod date;
pub mod ocean;
pub mod species;
pub mod text;
pub mod time;

pub use age::*;
pub use categorical::*;
pub use date::*;
pub use ocean::*;
pub use species::*;
pub use text::*;
pub use time::*;

use crate::models::{CellValue, Field};

/// Configuration for the column pass
#[derive(Debug, Clone)]
pub struct NormalizerConfig {
    /// Columns to normalize, visited in this order
    pub fields: Vec<Field>,
    /// Derive the Ocean column from Country
    pub add_ocean: bool,
    /// Drop bookkeeping columns before normalizing
    pub prune_columns: bool,
    /// Normalize records on the rayon pool
    pub parallel: bool,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            fields: Field::ALL.to_vec(),
            add_ocean: true,
            prune_columns: true,
            parallel: false,
        }
    }
}

impl NormalizerConfig {
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

/// Normalize one cell of the given column
pub fn normalize_field(field: Field, value: &CellValue) -> CellValue {
    match field {
        Field::Date => normalize_date(value),
        Field::Type => normalize_type(value),
        Field::Country | Field::State | Field::Location => normalize_place(value),
        Field::Sex => normalize_sex(value),
        Field::Age => normalize_age(value),
        Field::Time => normalize_time(value),
        Field::Activity => normalize_activity(value),
        Field::Injury => normalize_injury(value),
        Field::Species => normalize_species(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = NormalizerConfig::default();
        assert_eq!(config.fields.len(), 11);
        assert_eq!(config.fields.last(), Some(&Field::Species));
        assert!(config.add_ocean);
        assert!(config.prune_columns);
        assert!(!config.parallel);
    }

    #[test]
    fn test_dispatch() {
        assert_eq!(
            normalize_field(Field::Date, &CellValue::text("09-Sep-2023")),
            CellValue::text("09 Sep 2023")
        );
        assert_eq!(
            normalize_field(Field::Time, &CellValue::text("14h30")),
            CellValue::text("Afternoon")
        );
        assert_eq!(
            normalize_field(Field::Age, &CellValue::text("adult")),
            CellValue::Number(50.0)
        );
        assert_eq!(
            normalize_field(Field::State, &CellValue::text("western cape")),
            CellValue::text("Western Cape")
        );
        assert_eq!(
            normalize_field(Field::Species, &CellValue::text("Tiger shark, 2m")),
            CellValue::text("Tiger Shark")
        );
    }

    #[test]
    fn test_every_field_handles_null() {
        for field in Field::ALL {
            let out = normalize_field(field, &CellValue::Null);
            match field {
                Field::Time => assert_eq!(out, CellValue::text("unknown")),
                _ => assert_eq!(out, CellValue::Null, "{field:?}"),
            }
        }
    }

    #[test]
    fn test_every_field_idempotent() {
        let samples = [
            (Field::Date, "Reported 1900-1905"),
            (Field::Type, "Questionable"),
            (Field::Country, " south AFRICA?"),
            (Field::State, "New South Wales"),
            (Field::Sex, "M x 2"),
            (Field::Age, "7 or 8"),
            (Field::Time, "Late afternoon"),
            (Field::Location, "Muizenberg, False Bay."),
            (Field::Activity, "Boogie boarding"),
            (Field::Injury, "Bitten on calf. Recovered"),
            (Field::Species, "Tiger shark, 2m"),
        ];
        for (field, raw) in samples {
            let once = normalize_field(field, &CellValue::text(raw));
            assert_eq!(normalize_field(field, &once), once, "{field:?} {raw}");
        }
    }
}
