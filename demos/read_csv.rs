use anyhow::{Context, Result};
use clap::{Arg, ArgAction, Command, ValueHint};
use log::LevelFilter;
use std::path::PathBuf;

use csv_matrix::{ReaderConfig, TabularReader};

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or("CSV_MATRIX_LOG", "error,csv_matrix=info"))
        .init();

    let matches = Command::new("read_csv")
        .version(clap::crate_version!())
        .about("Load a numeric CSV file and print it as a matrix")
        .arg(
            Arg::new("input")
                .help("Path to the CSV file (header line followed by numeric rows)")
                .required(true)
                .value_parser(clap::value_parser!(PathBuf))
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help("Optional JSON reader configuration")
                .value_parser(clap::value_parser!(PathBuf))
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .help("Do not report read progress")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let input = matches
        .get_one::<PathBuf>("input")
        .context("missing input path")?;

    let mut config = match matches.get_one::<PathBuf>("config") {
        Some(path) => ReaderConfig::from_json_file(path)?,
        None => ReaderConfig::default(),
    };
    if matches.get_flag("quiet") {
        config.log_progress = false;
    }

    let mut reader = TabularReader::<f64>::open_with_config(input, config)
        .with_context(|| format!("Failed to scan {}", input.display()))?;
    log::info!(
        "{} columns, {} rows in {}",
        reader.cols(),
        reader.rows(),
        input.display()
    );

    let plain = reader
        .read_data(false)
        .context("Failed to read data without row numbers")?;
    let indexed = reader
        .read_data(true)
        .context("Failed to read data with row numbers")?;

    println!("Headers: {}\n", reader.header());
    println!("Without row numbers:\n{}", plain);
    println!("With row numbers:\n{}", indexed);

    Ok(())
}
