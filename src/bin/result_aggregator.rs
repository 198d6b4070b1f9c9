use anyhow::Result;
use clap::Parser;
use log::error;

use benchmark_runner::aggregator;
use benchmark_runner::datastructures::AggregatorArgs;

fn main() -> Result<()> {
    let args = AggregatorArgs::parse();
    env_logger::Builder::new()
        .filter_level(args.verbosity.log_level_filter())
        .init();
    let counts = match aggregator::aggregate(&args.results) {
        Ok(counts) => counts,
        Err(err) => {
            error!("Could not open {:?}: {err}", args.results);
            std::process::exit(1);
        }
    };
    if !counts.is_empty() {
        println!("{}", aggregator::format_counts(&counts));
    }
    Ok(())
}
