use std::collections::HashMap;

use serde::Serialize;

use super::CellValue;

/// The incident columns covered by the normalization pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Field {
    Date,
    Type,
    Country,
    State,
    Sex,
    Age,
    Time,
    Location,
    Activity,
    Injury,
    Species,
}

impl Field {
    /// Fixed order in which the driver visits columns
    pub const ALL: [Field; 11] = [
        Field::Date,
        Field::Type,
        Field::Country,
        Field::State,
        Field::Sex,
        Field::Age,
        Field::Time,
        Field::Location,
        Field::Activity,
        Field::Injury,
        Field::Species,
    ];

    /// Column header as it appears in the incident file
    pub fn column(&self) -> &'static str {
        match self {
            Field::Date => "Date",
            Field::Type => "Type",
            Field::Country => "Country",
            Field::State => "State",
            Field::Sex => "Sex",
            Field::Age => "Age",
            Field::Time => "Time",
            Field::Location => "Location",
            Field::Activity => "Activity",
            Field::Injury => "Injury",
            Field::Species => "Species",
        }
    }

    /// Look up a field by its column header. Headers in the wild carry
    /// stray padding (`"Species "`), so surrounding whitespace is ignored.
    pub fn from_column(name: &str) -> Option<Field> {
        let name = name.trim();
        Field::ALL.iter().copied().find(|f| f.column() == name)
    }
}

/// Derived column holding the ocean/sea for the incident country
pub const OCEAN_COLUMN: &str = "Ocean";

/// One incident row
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Record {
    values: HashMap<String, CellValue>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a record from `(column, value)` pairs
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<CellValue>,
    {
        Self {
            values: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Value of a column; missing columns read as null
    pub fn get(&self, column: &str) -> &CellValue {
        static NULL: CellValue = CellValue::Null;
        self.values.get(column).unwrap_or(&NULL)
    }

    pub fn field(&self, field: Field) -> &CellValue {
        self.get(field.column())
    }

    pub fn set(&mut self, column: impl Into<String>, value: CellValue) {
        self.values.insert(column.into(), value);
    }

    pub fn set_field(&mut self, field: Field, value: CellValue) {
        self.set(field.column(), value);
    }

    pub fn remove(&mut self, column: &str) -> Option<CellValue> {
        self.values.remove(column)
    }

    pub fn contains(&self, column: &str) -> bool {
        self.values.contains_key(column)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// An ordered set of incident records sharing one column layout
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordSet {
    /// Column headers in file order
    pub columns: Vec<String>,
    /// Rows in file order
    pub records: Vec<Record>,
}

impl RecordSet {
    pub fn new(columns: Vec<String>, records: Vec<Record>) -> Self {
        Self { columns, records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn has_column(&self, column: &str) -> bool {
        self.columns.iter().any(|c| c == column)
    }

    /// Append a column header if it is not already present
    pub fn ensure_column(&mut self, column: &str) {
        if !self.has_column(column) {
            self.columns.push(column.to_string());
        }
    }

    /// Drop a column from the header and from every record.
    /// Returns whether the column was present.
    pub fn drop_column(&mut self, column: &str) -> bool {
        let before = self.columns.len();
        self.columns.retain(|c| c != column);
        for record in &mut self.records {
            record.remove(column);
        }
        self.columns.len() != before
    }

    /// Rename padded headers (`"Species "`) to their canonical field names.
    ///
    /// A padded header whose canonical name is already taken is left as is,
    /// so neither column's cells are overwritten. Those headers are returned.
    pub fn canonicalize_headers(&mut self) -> Vec<String> {
        let mut conflicts = Vec::new();
        for i in 0..self.columns.len() {
            let Some(field) = Field::from_column(&self.columns[i]) else {
                continue;
            };
            let canonical = field.column();
            if self.columns[i] == canonical {
                continue;
            }
            if self.has_column(canonical) {
                conflicts.push(self.columns[i].clone());
                continue;
            }
            let original = std::mem::replace(&mut self.columns[i], canonical.to_string());
            for record in &mut self.records {
                if let Some(value) = record.remove(&original) {
                    record.set(canonical, value);
                }
            }
        }
        conflicts
    }

    /// Fields the pipeline covers that are absent from the header
    pub fn missing_fields(&self) -> Vec<Field> {
        Field::ALL
            .iter()
            .copied()
            .filter(|f| !self.has_column(f.column()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_from_column() {
        assert_eq!(Field::from_column("Species "), Some(Field::Species));
        assert_eq!(Field::from_column("Sex"), Some(Field::Sex));
        assert_eq!(Field::from_column("pdf"), None);
    }

    #[test]
    fn test_missing_column_reads_null() {
        let record = Record::from_pairs([("Date", "1900")]);
        assert_eq!(record.get("Species"), &CellValue::Null);
        assert_eq!(record.field(Field::Date), &CellValue::text("1900"));
    }

    #[test]
    fn test_canonicalize_headers() {
        let mut set = RecordSet::new(
            vec!["Sex ".to_string(), "Species ".to_string(), "pdf".to_string()],
            vec![Record::from_pairs([("Sex ", "M"), ("Species ", "White shark")])],
        );
        assert!(set.canonicalize_headers().is_empty());

        assert_eq!(set.columns, vec!["Sex", "Species", "pdf"]);
        assert_eq!(set.records[0].get("Species"), &CellValue::text("White shark"));
        assert!(!set.records[0].contains("Species "));
    }

    #[test]
    fn test_canonicalize_headers_keeps_both_when_taken() {
        let mut set = RecordSet::new(
            vec!["Species".to_string(), "Species ".to_string()],
            vec![Record::from_pairs([
                ("Species", "White shark"),
                ("Species ", "Tiger shark"),
            ])],
        );
        assert_eq!(set.canonicalize_headers(), vec!["Species "]);

        assert_eq!(set.columns, vec!["Species", "Species "]);
        assert_eq!(set.records[0].get("Species"), &CellValue::text("White shark"));
        assert_eq!(set.records[0].get("Species "), &CellValue::text("Tiger shark"));
    }

    #[test]
    fn test_drop_column() {
        let mut set = RecordSet::new(
            vec!["href".to_string(), "Date".to_string()],
            vec![Record::from_pairs([("href", "x"), ("Date", "1900")])],
        );
        assert!(set.drop_column("href"));
        assert!(!set.drop_column("href"));
        assert_eq!(set.columns, vec!["Date"]);
        assert!(!set.records[0].contains("href"));
    }
}
