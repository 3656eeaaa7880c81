//! Agri CLI - Command line tool for summarizing Indian agriculture statistics.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "agri-cli",
    version,
    about = "Indian agriculture statistics toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: agri_cmd::Command,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    agri_cmd::run(cli.command)
}
