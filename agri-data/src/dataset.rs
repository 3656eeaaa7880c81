use crate::error::{DataError, Result};
use crate::record::{AgricultureRecord, RawMeasure};
use csv::ReaderBuilder;
use std::sync::Arc;

/// Column headers for the CSV form of the dataset. These are the same
/// literal key strings used in the JSON form.
pub const COUNTRY_HEADER: &str = "Country";
pub const YEAR_HEADER: &str = "Year";
pub const CROP_NAME_HEADER: &str = "Crop Name";
pub const PRODUCTION_HEADER: &str = "Crop Production (UOM:t(Tonnes))";
pub const YIELD_HEADER: &str = "Yield Of Crops (UOM:Kg/Ha(KilogramperHectare))";

/// An immutable record list with a stable identity.
///
/// Cloning a `Dataset` shares the underlying allocation; summary caches key
/// off that identity via [`Dataset::same_source`], so rebuilding the record
/// list (even with identical contents) reads as new input.
#[derive(Debug, Clone)]
pub struct Dataset(Arc<Vec<AgricultureRecord>>);

impl Dataset {
    pub fn new(records: Vec<AgricultureRecord>) -> Self {
        Dataset(Arc::new(records))
    }

    pub fn records(&self) -> &[AgricultureRecord] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True when both handles point at the same record allocation.
    pub fn same_source(&self, other: &Dataset) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl From<Vec<AgricultureRecord>> for Dataset {
    fn from(records: Vec<AgricultureRecord>) -> Self {
        Dataset::new(records)
    }
}

/// Parse a JSON array of agriculture records.
///
/// Numeric cells may arrive as strings, numbers, or null; no value-level
/// validation happens here. Structural mismatches are the only failures.
pub fn records_from_json(data: &str) -> Result<Vec<AgricultureRecord>> {
    let records = serde_json::from_str::<Vec<AgricultureRecord>>(data)?;
    log_unparseable_measures(&records);
    Ok(records)
}

/// Debug-only note on rows whose numeric cells will not parse; summarization
/// absorbs them, so this never affects outputs.
fn log_unparseable_measures(records: &[AgricultureRecord]) {
    let unparseable = records
        .iter()
        .filter(|r| r.production_tonnes().is_none() || r.yield_kg_ha().is_none())
        .count();
    if unparseable > 0 {
        log::debug!(
            "{unparseable} of {} records have unparseable numeric cells",
            records.len()
        );
    }
}

/// Parse the CSV form of the dataset.
///
/// The header row must carry the country, year, and crop name columns; the
/// production and yield columns are optional and absent or blank cells load
/// as [`RawMeasure::Missing`].
pub fn records_from_csv(data: &str) -> Result<Vec<AgricultureRecord>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(data.as_bytes());

    let headers = reader.headers()?.clone();
    let position_of = |name: &str| headers.iter().position(|header| header == name);
    let country_idx =
        position_of(COUNTRY_HEADER).ok_or(DataError::MissingColumn(COUNTRY_HEADER))?;
    let year_idx = position_of(YEAR_HEADER).ok_or(DataError::MissingColumn(YEAR_HEADER))?;
    let crop_name_idx =
        position_of(CROP_NAME_HEADER).ok_or(DataError::MissingColumn(CROP_NAME_HEADER))?;
    let production_idx = position_of(PRODUCTION_HEADER);
    let yield_idx = position_of(YIELD_HEADER);

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        let text_cell = |idx: usize| row.get(idx).unwrap_or("").to_string();
        let measure_cell = |idx: Option<usize>| match idx.and_then(|i| row.get(i)) {
            Some(cell) if !cell.trim().is_empty() => RawMeasure::Text(cell.to_string()),
            _ => RawMeasure::Missing,
        };
        records.push(AgricultureRecord {
            country: text_cell(country_idx),
            year: text_cell(year_idx),
            crop_name: text_cell(crop_name_idx),
            production: measure_cell(production_idx),
            crop_yield: measure_cell(yield_idx),
        });
    }
    log_unparseable_measures(&records);
    Ok(records)
}

#[cfg(test)]
mod test {
    use super::{records_from_csv, records_from_json, Dataset};
    use crate::error::DataError;
    use crate::record::RawMeasure;

    const JSON_RESULT: &str = r#"[
        {
            "Country": "India",
            "Year": "1955",
            "Crop Name": "Rice",
            "Crop Production (UOM:t(Tonnes))": 27559000,
            "Yield Of Crops (UOM:Kg/Ha(KilogramperHectare))": "868"
        },
        {
            "Country": "India",
            "Year": "1955",
            "Crop Name": "Wheat",
            "Crop Production (UOM:t(Tonnes))": "",
            "Yield Of Crops (UOM:Kg/Ha(KilogramperHectare))": null
        }
    ]"#;

    const CSV_RESULT: &str = "\
Country,Year,Crop Name,Crop Production (UOM:t(Tonnes)),Yield Of Crops (UOM:Kg/Ha(KilogramperHectare))
India,1955,Rice,27559000,868
India,1955,Wheat,,
";

    #[test]
    fn test_records_from_json() {
        let records = records_from_json(JSON_RESULT).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].crop_name, "Rice");
        assert_eq!(records[0].production_tonnes(), Some(27559000.0));
        assert_eq!(records[0].yield_kg_ha(), Some(868.0));
        // blank string and null both read as unparseable
        assert_eq!(records[1].production_tonnes(), None);
        assert_eq!(records[1].crop_yield, RawMeasure::Missing);
    }

    #[test]
    fn test_records_from_json_rejects_non_array() {
        assert!(matches!(
            records_from_json(r#"{"Country": "India"}"#),
            Err(DataError::Json(_))
        ));
    }

    #[test]
    fn test_records_from_csv() {
        let records = records_from_csv(CSV_RESULT).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].year, "1955");
        assert_eq!(records[0].production_tonnes(), Some(27559000.0));
        assert_eq!(records[1].production, RawMeasure::Missing);
        assert_eq!(records[1].crop_yield, RawMeasure::Missing);
    }

    #[test]
    fn test_records_from_csv_missing_column() {
        let data = "Country,Year\nIndia,1955\n";
        assert!(matches!(
            records_from_csv(data),
            Err(DataError::MissingColumn("Crop Name"))
        ));
    }

    #[test]
    fn test_dataset_identity() {
        let records = records_from_json(JSON_RESULT).unwrap();
        let first = Dataset::new(records.clone());
        let shared = first.clone();
        let rebuilt = Dataset::new(records);
        assert!(first.same_source(&shared));
        assert!(!first.same_source(&rebuilt));
        assert_eq!(first.records(), rebuilt.records());
    }
}
