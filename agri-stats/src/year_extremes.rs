use agri_data::record::{parse_year, AgricultureRecord};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;

/// Statistics computed for a single year: the crops with the highest and
/// lowest production across every record observed in that year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearExtremeSummary {
    pub year: String,
    pub max_production_crop: String,
    pub min_production_crop: String,
}

/// Summarize production extremes per year.
///
/// Groups records into per-year buckets in a single pass, then scans each
/// bucket once for its max and min production crop. Records whose production
/// cell does not parse as a number are skipped for extreme selection; when a
/// whole bucket is unparseable both crop names stay empty. Ties keep the
/// first record scanned.
///
/// Output is ordered ascending by the integer value of the year; years that
/// do not parse as integers sort after all that do, in first-seen order.
pub fn summarize(records: &[AgricultureRecord]) -> Vec<YearExtremeSummary> {
    let mut year_order: Vec<&str> = Vec::new();
    let mut buckets: HashMap<&str, Vec<&AgricultureRecord>> = HashMap::new();
    for record in records {
        let year = record.year.as_str();
        if !buckets.contains_key(year) {
            year_order.push(year);
        }
        buckets.entry(year).or_default().push(record);
    }

    let mut summaries: Vec<YearExtremeSummary> = year_order
        .iter()
        .map(|year| {
            let bucket = &buckets[year];
            let mut max_production = f64::NEG_INFINITY;
            let mut min_production = f64::INFINITY;
            let mut max_production_crop = String::new();
            let mut min_production_crop = String::new();
            for record in bucket {
                let Some(production) = record.production_tonnes() else {
                    continue;
                };
                if production > max_production {
                    max_production = production;
                    max_production_crop = record.crop_name.clone();
                }
                if production < min_production {
                    min_production = production;
                    min_production_crop = record.crop_name.clone();
                }
            }
            if max_production == f64::NEG_INFINITY {
                log::debug!("no parseable production values for year {year}");
            }
            YearExtremeSummary {
                year: (*year).to_string(),
                max_production_crop,
                min_production_crop,
            }
        })
        .collect();

    // stable sort keeps first-seen order among non-integer years
    summaries.sort_by(|a, b| compare_years(&a.year, &b.year));
    summaries
}

fn compare_years(a: &str, b: &str) -> Ordering {
    match (parse_year(a), parse_year(b)) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
