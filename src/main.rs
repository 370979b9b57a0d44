use clap::Parser;
use kata_lab::utils::logger;
use kata_lab::{
    find_duplicates, render_duplicates, write_report, CliConfig, Exercise, DEFAULT_DUPLICATES_INPUT,
};
use std::io::Write;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting kata-lab CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match config.exercise {
        Exercise::Fizzbuzz { up_to } => {
            tracing::info!("Classifying 1..={}", up_to);
            write_report(&mut out, up_to)?;
        }
        Exercise::Duplicates { values, json } => {
            let input = if values.is_empty() {
                DEFAULT_DUPLICATES_INPUT.to_vec()
            } else {
                values
            };
            tracing::info!("Scanning {} values for duplicates", input.len());

            let duplicates = find_duplicates(&input);
            tracing::info!("Found {} duplicated values", duplicates.len());

            writeln!(out, "{}", render_duplicates(&duplicates, json)?)?;
        }
    }

    Ok(())
}
