//! Dataset loading
//!
//! Reads the joint college dataset from a delimited file, validates the
//! schema up front, and deduplicates rows by institution name.

use anyhow::{Context, Result};
use std::collections::HashSet;
use std::path::Path;

use super::schema;
use super::{CollegeRecord, PayerStatus, Residency};

/// The loaded college dataset. Read-only for the rest of the session:
/// ranking borrows the records, it never mutates or reorders them.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Vec<CollegeRecord>,
}

impl Dataset {
    /// Load the dataset from a CSV file.
    ///
    /// The header row is validated against [`schema::REQUIRED_COLUMNS`]
    /// before any row is deserialized. Duplicate institution names are
    /// dropped, first occurrence wins, input order is preserved.
    pub fn from_csv(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_path(path)
            .with_context(|| format!("Failed to open dataset file: {:?}", path))?;

        let headers = reader.headers()?.clone();
        schema::validate_headers(&headers)
            .with_context(|| format!("Dataset schema mismatch in {:?}", path))?;

        let mut records = Vec::new();
        let mut seen = HashSet::new();
        let mut duplicates = 0usize;

        for (row_num, result) in reader.deserialize::<CollegeRecord>().enumerate() {
            let record =
                result.with_context(|| format!("Failed to parse dataset row {}", row_num + 1))?;

            if !seen.insert(record.name.clone()) {
                tracing::debug!("Dropping duplicate institution: {}", record.name);
                duplicates += 1;
                continue;
            }
            records.push(record);
        }

        tracing::info!(
            "Loaded {} colleges from {:?} ({} duplicates dropped)",
            records.len(),
            path,
            duplicates
        );

        Ok(Self { records })
    }

    /// Build a dataset from already-parsed records, deduplicating by
    /// institution name (first occurrence wins).
    pub fn from_records(raw: Vec<CollegeRecord>) -> Self {
        let mut records = Vec::with_capacity(raw.len());
        let mut seen = HashSet::new();
        for record in raw {
            if seen.insert(record.name.clone()) {
                records.push(record);
            }
        }
        Self { records }
    }

    pub fn records(&self) -> &[CollegeRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All states present in the dataset, sorted and deduplicated.
    /// Used by form collaborators to populate the jurisdiction choices.
    pub fn states(&self) -> Vec<String> {
        let mut states: Vec<String> = self.records.iter().map(|r| r.state.clone()).collect();
        states.sort();
        states.dedup();
        states
    }

    /// All MSI categories present in the dataset, sorted and deduplicated
    pub fn msi_types(&self) -> Vec<String> {
        let mut types: Vec<String> = self.records.iter().map(|r| r.msi_type.clone()).collect();
        types.sort();
        types.dedup();
        types
    }

    /// Smallest cost-of-attendance in the dataset for the given residency.
    /// Form collaborators use this as the documented floor for the
    /// max-tuition input. `None` when the dataset is empty.
    pub fn min_cost(&self, residency: Residency) -> Option<f64> {
        self.records
            .iter()
            .map(|r| r.cost(residency))
            .fold(None, |acc, c| Some(acc.map_or(c, |m: f64| m.min(c))))
    }

    /// Smallest median debt in the dataset for the given payer status,
    /// the floor for the max-debt input. `None` when the dataset is empty.
    pub fn min_debt(&self, payer: PayerStatus) -> Option<f64> {
        self.records
            .iter()
            .map(|r| r.debt(payer))
            .fold(None, |acc, d| Some(acc.map_or(d, |m: f64| m.min(d))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::test_fixtures::record;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_csv(records: &[CollegeRecord]) -> NamedTempFile {
        let file = NamedTempFile::new().unwrap();
        let mut writer = csv::Writer::from_writer(file.reopen().unwrap());
        for r in records {
            writer.serialize(r).unwrap();
        }
        writer.flush().unwrap();
        file
    }

    #[test]
    fn test_from_csv_roundtrip() {
        let mut a = record("Alpha College", "CA");
        a.cost_in_state = 12_500.0;
        let b = record("Beta University", "NY");

        let file = write_csv(&[a, b]);
        let dataset = Dataset::from_csv(file.path()).unwrap();

        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.records()[0].name, "Alpha College");
        assert_eq!(dataset.records()[0].cost_in_state, 12_500.0);
        assert_eq!(dataset.records()[1].state, "NY");
    }

    #[test]
    fn test_duplicates_first_wins() {
        let first = record("Alpha College", "CA");
        let mut second = record("Alpha College", "NY");
        second.cost_in_state = 1.0;

        let file = write_csv(&[first, second, record("Beta University", "TX")]);
        let dataset = Dataset::from_csv(file.path()).unwrap();

        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.records()[0].state, "CA");
        assert_eq!(dataset.records()[0].cost_in_state, 15_000.0);
    }

    #[test]
    fn test_missing_column_fails_fast() {
        let file = NamedTempFile::new().unwrap();
        writeln!(file.reopen().unwrap(), "Institution_Name_x,State\nAlpha,CA").unwrap();

        let err = Dataset::from_csv(file.path()).unwrap_err();
        assert!(format!("{:#}", err).contains("missing"));
    }

    #[test]
    fn test_empty_gap_cells_deserialize_as_none() {
        let mut r = record("Alpha College", "CA");
        r.gap_center_based_care = None;
        r.gap_full_ttd = None;

        let file = write_csv(&[r]);
        let dataset = Dataset::from_csv(file.path()).unwrap();
        assert_eq!(dataset.records()[0].parent_gap(), None);
    }

    #[test]
    fn test_form_floors_and_choices() {
        let mut a = record("Alpha College", "CA");
        a.cost_in_state = 8_000.0;
        a.debt_independent = 5_000.0;
        let mut b = record("Beta University", "NY");
        b.cost_in_state = 20_000.0;

        let dataset = Dataset::from_records(vec![a, b, record("Gamma College", "CA")]);

        assert_eq!(dataset.states(), vec!["CA".to_string(), "NY".to_string()]);
        assert_eq!(dataset.min_cost(Residency::InState), Some(8_000.0));
        assert_eq!(dataset.min_debt(PayerStatus::Independent), Some(5_000.0));
    }

    #[test]
    fn test_empty_dataset_has_no_floors() {
        let dataset = Dataset::from_records(Vec::new());
        assert!(dataset.is_empty());
        assert_eq!(dataset.min_cost(Residency::OutOfState), None);
        assert_eq!(dataset.min_debt(PayerStatus::Dependent), None);
    }
}
