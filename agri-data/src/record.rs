use serde::{Deserialize, Serialize};

/// Represents a raw numeric cell from the source dataset.
/// - `Number(f64)`: the value arrived as a JSON number
/// - `Text(String)`: the value arrived as a string (may or may not be numeric)
/// - `Missing`: the field was absent or null
#[derive(Debug, Default, PartialEq, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawMeasure {
    Number(f64),
    Text(String),
    #[default]
    Missing,
}

impl RawMeasure {
    /// Interpret the cell as a finite float.
    ///
    /// Text cells are trimmed and must parse in full; anything else
    /// (missing, blank, non-numeric, non-finite) yields `None`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            RawMeasure::Number(value) if value.is_finite() => Some(*value),
            RawMeasure::Number(_) => None,
            RawMeasure::Text(text) => text.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
            RawMeasure::Missing => None,
        }
    }
}

/// A single observation row: one country/year/crop production and yield entry.
///
/// Field bindings use the literal key strings of the source data, which
/// embed their units of measure in the key itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgricultureRecord {
    #[serde(rename = "Country")]
    pub country: String,
    #[serde(rename = "Year")]
    pub year: String,
    #[serde(rename = "Crop Name")]
    pub crop_name: String,
    #[serde(rename = "Crop Production (UOM:t(Tonnes))", default)]
    pub production: RawMeasure,
    #[serde(rename = "Yield Of Crops (UOM:Kg/Ha(KilogramperHectare))", default)]
    pub crop_yield: RawMeasure,
}

impl AgricultureRecord {
    /// Production in tonnes, if the cell holds a parseable number.
    pub fn production_tonnes(&self) -> Option<f64> {
        self.production.as_f64()
    }

    /// Yield in kilograms per hectare, if the cell holds a parseable number.
    pub fn yield_kg_ha(&self) -> Option<f64> {
        self.crop_yield.as_f64()
    }

    /// The year as an integer, if the year string parses as one.
    pub fn year_number(&self) -> Option<i64> {
        parse_year(&self.year)
    }
}

/// Parse a year string as an integer. Years are carried as strings in the
/// source data and are not guaranteed to be numeric.
pub fn parse_year(year: &str) -> Option<i64> {
    year.trim().parse::<i64>().ok()
}
