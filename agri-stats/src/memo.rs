use crate::crop_yield::{self, CropYieldSummary};
use crate::palette::ChartPalette;
use crate::year_extremes::{self, YearExtremeSummary};
use agri_data::dataset::Dataset;

/// Both derived summaries for one dataset.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Summaries {
    pub year_extremes: Vec<YearExtremeSummary>,
    pub crop_yields: Vec<CropYieldSummary>,
}

impl Summaries {
    /// Compute both summaries from scratch.
    pub fn compute(dataset: &Dataset, palette: &ChartPalette) -> Self {
        Summaries {
            year_extremes: year_extremes::summarize(dataset.records()),
            crop_yields: crop_yield::summarize(dataset.records(), palette),
        }
    }
}

/// Reference-keyed summary cache.
///
/// Repeated rendering passes hand the same dataset handle back in; the cache
/// recomputes only when the handle points at a new allocation, matching the
/// identity contract of [`Dataset::same_source`]. Single-threaded: callers
/// hold it `&mut` for the lifetime of a view.
#[derive(Debug, Default)]
pub struct SummaryCache {
    input: Option<Dataset>,
    summaries: Summaries,
}

impl SummaryCache {
    pub fn new() -> Self {
        SummaryCache::default()
    }

    /// Summaries for `dataset`, reusing the previous result when the handle
    /// is the same input as last time.
    pub fn summaries(&mut self, dataset: &Dataset, palette: &ChartPalette) -> &Summaries {
        let cached = self
            .input
            .as_ref()
            .is_some_and(|held| held.same_source(dataset));
        if !cached {
            log::debug!("recomputing summaries for {} records", dataset.len());
            self.summaries = Summaries::compute(dataset, palette);
            self.input = Some(dataset.clone());
        }
        &self.summaries
    }
}

#[cfg(test)]
mod tests {
    use super::{Summaries, SummaryCache};
    use crate::palette::ChartPalette;
    use agri_data::dataset::Dataset;
    use agri_data::record::{AgricultureRecord, RawMeasure};

    fn dataset(crop: &str) -> Dataset {
        Dataset::new(vec![AgricultureRecord {
            country: "India".to_string(),
            year: "1950".to_string(),
            crop_name: crop.to_string(),
            production: RawMeasure::Number(10.0),
            crop_yield: RawMeasure::Number(100.0),
        }])
    }

    #[test]
    fn test_cache_hit_on_same_handle() {
        let palette = ChartPalette::default();
        let data = dataset("Rice");
        let mut cache = SummaryCache::new();
        let first = cache.summaries(&data, &palette).clone();
        let second = cache.summaries(&data.clone(), &palette).clone();
        assert_eq!(first, second);
        assert_eq!(first, Summaries::compute(&data, &palette));
    }

    #[test]
    fn test_cache_recomputes_on_new_input() {
        let palette = ChartPalette::default();
        let mut cache = SummaryCache::new();
        let rice = dataset("Rice");
        assert_eq!(
            cache.summaries(&rice, &palette).crop_yields[0].crop_name,
            "Rice"
        );
        let wheat = dataset("Wheat");
        assert_eq!(
            cache.summaries(&wheat, &palette).crop_yields[0].crop_name,
            "Wheat"
        );
    }
}
