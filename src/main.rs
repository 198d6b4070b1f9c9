use anyhow::Result;
use clap::Parser;
use log::{error, info};

use benchmark_runner::csv_parser::{self, ResultWriter};
use benchmark_runner::datastructures::*;
use benchmark_runner::optimizer::Metaheuristics;
use benchmark_runner::trial_runner;

/// Exit code when the experiment design or the results file is unusable.
const LOAD_FAILURE: exitcode::ExitCode = 1;

fn main() -> Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbosity.log_level_filter())
        .init();
    let config = match Config::from_cli(&args) {
        Ok(config) => {
            CONFIG.set(config).ok();
            Config::global()
        }
        Err(err) => {
            error!("Invalid configuration: {err:#}");
            std::process::exit(exitcode::CONFIG);
        }
    };
    let rows = match csv_parser::load_experiment(&config.input) {
        Ok(rows) => rows,
        Err(err) => {
            error!("Could not load {:?}: {err}", config.input);
            std::process::exit(LOAD_FAILURE);
        }
    };
    info!("Running {} trials from {:?}", rows.len(), config.input);
    let mut writer = match ResultWriter::create(&config.output) {
        Ok(writer) => writer,
        Err(err) => {
            error!("Could not create {:?}: {err}", config.output);
            std::process::exit(LOAD_FAILURE);
        }
    };
    let summary = trial_runner::run_experiment(
        &rows,
        &config.catalog()?,
        &Metaheuristics::new(config.generations),
        &config.trial_settings(),
        &mut writer,
    )?;
    info!("{summary}");
    println!(
        "Simulations completed. Results saved in {}",
        config.output.display()
    );
    Ok(())
}
