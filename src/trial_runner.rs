use core::fmt;
use std::io::Write;

use itertools::Itertools;
use log::{error, info};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::{
    catalog::ConfigCatalog,
    csv_parser::ResultWriter,
    datastructures::{ExperimentRow, ResultRow, TrialSettings},
    error::BenchError,
    optimizer::Optimizer,
};

/// Tally of one batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Trials written to the results table.
    pub completed: usize,
    /// Trials that failed and were left out.
    pub skipped: usize,
}

impl fmt::Display for BatchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} trials completed, {} skipped",
            self.completed, self.skipped
        )
    }
}

/// Runs the trial described by `row` and measures how far the best value
/// found lies from the problem's theoretical minimum.
///
/// Serial rows evolve a single population. Parallel rows evolve
/// `settings.num_islands` independently seeded islands concurrently and keep
/// the best champion among them.
pub fn run_trial<O: Optimizer + ?Sized, R: Rng + ?Sized>(
    row: &ExperimentRow,
    catalog: &ConfigCatalog,
    optimizer: &O,
    settings: &TrialSettings,
    rng: &mut R,
) -> Result<ResultRow, BenchError> {
    let problem = catalog.resolve_problem(&row.block)?;
    let theoretical_minimum = catalog.theoretical_minimum(&row.block)?;
    let algorithm = catalog.resolve_algorithm(&row.algorithm)?;

    let best_f = if row.is_parallel() {
        let seeds = (0..settings.num_islands)
            .map(|_| rng.gen::<u64>())
            .collect_vec();
        let champions = optimizer.evolve_archipelago(
            &problem,
            &algorithm,
            settings.population_size,
            &seeds,
        )?;
        champions.into_iter().fold(f64::INFINITY, f64::min)
    } else {
        optimizer.evolve(
            &problem,
            &algorithm.with_verbosity(0),
            settings.population_size,
            rng.gen(),
        )?
    };

    Ok(ResultRow {
        block: row.block.clone(),
        algorithm: row.algorithm.clone(),
        parallelization: row.parallelization.clone(),
        repetition: row.repetition,
        absolute_error: (best_f - theoretical_minimum).abs(),
    })
}

/// Runs every row and writes the successful trials to `writer`.
///
/// A failing trial is logged and skipped; only failures to write the results
/// abort the batch.
pub fn run_experiment<O: Optimizer + ?Sized, W: Write>(
    rows: &[ExperimentRow],
    catalog: &ConfigCatalog,
    optimizer: &O,
    settings: &TrialSettings,
    writer: &mut ResultWriter<W>,
) -> Result<BatchSummary, BenchError> {
    let mut rng = match settings.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };
    let mut summary = BatchSummary::default();
    writer.write_header()?;
    for row in rows {
        match run_trial(row, catalog, optimizer, settings, &mut rng) {
            Ok(result) => {
                info!(
                    "{} {} {} #{}: error {}",
                    result.block,
                    result.algorithm,
                    result.parallelization,
                    result.repetition,
                    result.absolute_error
                );
                writer.write_row(&result)?;
                summary.completed += 1;
            }
            Err(err) => {
                error!(
                    "Error in row: {} {} {} - {err}",
                    row.block, row.algorithm, row.parallelization
                );
                summary.skipped += 1;
            }
        }
    }
    Ok(summary)
}
