//! Command implementations for the agri CLI.
//!
//! Provides subcommands for summarizing agriculture datasets into the
//! derived forms consumed by table and chart tooling.

use clap::Subcommand;

pub mod summarize;

#[derive(Subcommand)]
pub enum Command {
    /// Report the max- and min-production crop for every year
    YearExtremes {
        #[command(flatten)]
        io: summarize::IoArgs,
    },

    /// Report the average yield per crop with its assigned chart color
    CropYields {
        #[command(flatten)]
        io: summarize::IoArgs,
    },

    /// Report both summaries in one document
    Summarize {
        #[command(flatten)]
        io: summarize::IoArgs,
    },
}

pub fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::YearExtremes { io } => summarize::run_year_extremes(&io),
        Command::CropYields { io } => summarize::run_crop_yields(&io),
        Command::Summarize { io } => summarize::run_summarize(&io),
    }
}
