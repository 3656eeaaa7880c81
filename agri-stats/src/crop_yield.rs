use crate::palette::ChartPalette;
use agri_data::record::AgricultureRecord;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Average yield for one crop, with the palette slot assigned to its bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CropYieldSummary {
    pub crop_name: String,
    pub average_yield: f64,
    pub color_index: usize,
}

/// Summarize average yield per crop.
///
/// Groups records by crop name in a single pass, preserving first-seen crop
/// order; that order drives both the output sequence and the palette slot,
/// keeping bar colors stable across re-renders of unchanged data. A yield
/// cell that is missing or does not parse contributes exactly zero to the
/// sum while still counting toward the mean's divisor.
pub fn summarize(records: &[AgricultureRecord], palette: &ChartPalette) -> Vec<CropYieldSummary> {
    let mut crop_order: Vec<&str> = Vec::new();
    let mut totals: HashMap<&str, (f64, usize)> = HashMap::new();
    for record in records {
        let crop = record.crop_name.as_str();
        if !totals.contains_key(crop) {
            crop_order.push(crop);
        }
        let entry = totals.entry(crop).or_insert((0.0, 0));
        entry.0 += record.yield_kg_ha().unwrap_or(0.0);
        entry.1 += 1;
    }

    crop_order
        .iter()
        .enumerate()
        .map(|(index, crop)| {
            let (sum, count) = totals[crop];
            CropYieldSummary {
                crop_name: (*crop).to_string(),
                average_yield: sum / count as f64,
                color_index: index % palette.len(),
            }
        })
        .collect()
}
