mod dataset;
mod report;
mod stats;

use crate::dataset::Dataset;
use crate::stats::Summary;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(version, about)]
struct CLI {
    /// Dataset values; defaults to the built-in sample set.
    #[arg(long, value_delimiter = ',')]
    values: Option<Vec<u8>>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the minimum, maximum, mean and median of the dataset.
    Report {
        /// Render the report as JSON instead of labelled lines.
        #[arg(long)]
        json: bool,
    },

    /// Sort the dataset in descending order and print it.
    Sort,

    /// Print the dataset in its given order.
    Show,
}

fn main() {
    env_logger::Builder::new()
        .format_timestamp_millis()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    if let Err(error) = run_cli() {
        log::error!("{error:#?}");
        std::process::exit(1);
    }
}

fn run_cli() -> Result<()> {
    let args = CLI::parse();
    log::info!("{args:#?}");

    let mut data = match args.values {
        Some(vals) => Dataset::new(vals).context("failed to construct dataset")?,
        None => Dataset::sample_set(),
    };
    log::debug!("analyzing {} values", data.len());

    let stdout = std::io::stdout();
    let mut writer = stdout.lock();

    match args.command {
        Command::Report { json } => {
            let summary = Summary::compute(&mut data);
            if json {
                report::print_summary_json(&mut writer, &summary)?;
            } else {
                report::print_statistics(&mut writer, &summary)?;
            }
        }
        Command::Sort => {
            stats::sort_descending(&mut data);
            report::print_array(&mut writer, &data)?;
        }
        Command::Show => {
            report::print_array(&mut writer, &data)?;
        }
    }

    Ok(())
}
