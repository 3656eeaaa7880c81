//! Dataset summarization commands.
//!
//! Each command loads a dataset (JSON or CSV, or the bundled sample when no
//! input is given), runs the relevant aggregation, and writes the result as
//! JSON to stdout or a file. The aggregation crates stay free of I/O; all
//! file handling lives here.

use agri_data::dataset::{self, Dataset};
use agri_stats::crop_yield::{self, CropYieldSummary};
use agri_stats::palette::ChartPalette;
use agri_stats::year_extremes::{self, YearExtremeSummary};
use anyhow::Context;
use clap::Args;
use log::info;
use serde::Serialize;
use std::path::PathBuf;

/// Sample dataset bundled into the binary, used when no input is given.
const SAMPLE_DATASET_JSON: &str = include_str!("../../fixtures/agriculture.json");

#[derive(Args)]
pub struct IoArgs {
    /// Input dataset path (.csv selects the CSV loader, anything else JSON);
    /// omitted means the bundled sample dataset
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Output path for the JSON summary (stdout when omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,
}

/// A crop yield entry enriched with its resolved hex color, so chart
/// tooling downstream does not need to know the palette.
#[derive(Serialize)]
struct CropYieldRow {
    #[serde(flatten)]
    summary: CropYieldSummary,
    color: String,
}

#[derive(Serialize)]
struct SummaryDocument {
    year_extremes: Vec<YearExtremeSummary>,
    crop_yields: Vec<CropYieldRow>,
}

pub fn run_year_extremes(io: &IoArgs) -> anyhow::Result<()> {
    let data = load_dataset(io)?;
    let summaries = year_extremes::summarize(data.records());
    info!("Summarized {} records into {} years", data.len(), summaries.len());
    write_output(io, &summaries)
}

pub fn run_crop_yields(io: &IoArgs) -> anyhow::Result<()> {
    let data = load_dataset(io)?;
    let palette = ChartPalette::default();
    let rows = crop_yield_rows(&data, &palette);
    info!("Summarized {} records into {} crops", data.len(), rows.len());
    write_output(io, &rows)
}

pub fn run_summarize(io: &IoArgs) -> anyhow::Result<()> {
    let data = load_dataset(io)?;
    let palette = ChartPalette::default();
    let document = SummaryDocument {
        year_extremes: year_extremes::summarize(data.records()),
        crop_yields: crop_yield_rows(&data, &palette),
    };
    info!(
        "Summarized {} records into {} years and {} crops",
        data.len(),
        document.year_extremes.len(),
        document.crop_yields.len()
    );
    write_output(io, &document)
}

fn crop_yield_rows(data: &Dataset, palette: &ChartPalette) -> Vec<CropYieldRow> {
    crop_yield::summarize(data.records(), palette)
        .into_iter()
        .map(|summary| CropYieldRow {
            color: palette.color_for(summary.color_index).to_string(),
            summary,
        })
        .collect()
}

fn load_dataset(io: &IoArgs) -> anyhow::Result<Dataset> {
    let records = match &io.input {
        Some(path) => {
            let data = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            if path
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"))
            {
                dataset::records_from_csv(&data)?
            } else {
                dataset::records_from_json(&data)?
            }
        }
        None => dataset::records_from_json(SAMPLE_DATASET_JSON)?,
    };
    info!("Loaded {} records", records.len());
    Ok(Dataset::new(records))
}

fn write_output<T: Serialize>(io: &IoArgs, value: &T) -> anyhow::Result<()> {
    let rendered = if io.pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    match &io.output {
        Some(path) => {
            std::fs::write(path, rendered)
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!("Output written to {}", path.display());
        }
        None => println!("{rendered}"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{crop_yield_rows, SAMPLE_DATASET_JSON};
    use agri_data::dataset::{records_from_json, Dataset};
    use agri_stats::palette::ChartPalette;
    use agri_stats::year_extremes;

    #[test]
    fn test_sample_dataset_summarizes() {
        let records = records_from_json(SAMPLE_DATASET_JSON).unwrap();
        let data = Dataset::new(records);
        let years = year_extremes::summarize(data.records());
        assert!(!years.is_empty());
        // every bundled year has at least one parseable production value
        assert!(years.iter().all(|y| !y.max_production_crop.is_empty()));

        let rows = crop_yield_rows(&data, &ChartPalette::default());
        assert!(!rows.is_empty());
        let rendered = serde_json::to_value(&rows).unwrap();
        let first = &rendered[0];
        assert!(first.get("crop_name").is_some());
        assert!(first.get("average_yield").is_some());
        assert!(first.get("color").is_some());
    }
}
