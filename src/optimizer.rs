use std::thread;

use itertools::Itertools;
use log::debug;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::{
    catalog::{Algorithm, AlgorithmDescriptor, ProblemDescriptor},
    error::OptimizerError,
};

pub mod population;
pub mod pso;
pub mod sga;

pub use population::Population;
pub use pso::Pso;
pub use sga::Sga;

/// Capability to evolve populations of a benchmark problem.
///
/// Implementors only need [`evolve`](Optimizer::evolve); the archipelago
/// variant runs one `evolve` per island on its own thread.
pub trait Optimizer: Sync {
    /// Evolves a fresh random population of `population_size` individuals
    /// and returns its champion objective value.
    fn evolve(
        &self,
        problem: &ProblemDescriptor,
        algorithm: &AlgorithmDescriptor,
        population_size: usize,
        seed: u64,
    ) -> Result<f64, OptimizerError>;

    /// Evolves one independent island per seed concurrently and blocks until
    /// all of them finished. Champions are returned in island order.
    fn evolve_archipelago(
        &self,
        problem: &ProblemDescriptor,
        algorithm: &AlgorithmDescriptor,
        population_size: usize,
        seeds: &[u64],
    ) -> Result<Vec<f64>, OptimizerError> {
        if seeds.is_empty() {
            return Err(OptimizerError::NoIslands);
        }
        thread::scope(|s| {
            let handles = seeds
                .iter()
                .map(|&seed| {
                    s.spawn(move || {
                        self.evolve(problem, algorithm, population_size, seed)
                    })
                })
                .collect_vec();
            handles
                .into_iter()
                .enumerate()
                .map(|(island, handle)| {
                    handle
                        .join()
                        .map_err(|_| OptimizerError::IslandPanicked(island))?
                })
                .collect()
        })
    }
}

/// The built-in optimizer backed by [`Sga`] and [`Pso`].
#[derive(Debug, Clone, PartialEq)]
pub struct Metaheuristics {
    /// Generations per evolve call.
    pub generations: u32,
    pub sga: Sga,
    pub pso: Pso,
}

impl Default for Metaheuristics {
    fn default() -> Self {
        Self {
            generations: 1,
            sga: Sga::default(),
            pso: Pso::default(),
        }
    }
}

impl Metaheuristics {
    pub fn new(generations: u32) -> Self {
        Self {
            generations,
            ..Self::default()
        }
    }
}

impl Optimizer for Metaheuristics {
    fn evolve(
        &self,
        problem: &ProblemDescriptor,
        algorithm: &AlgorithmDescriptor,
        population_size: usize,
        seed: u64,
    ) -> Result<f64, OptimizerError> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut population =
            Population::random(problem, population_size, &mut rng)?;
        match algorithm.algorithm {
            Algorithm::Sga => self.sga.evolve(
                problem,
                &mut population,
                self.generations,
                algorithm.verbosity,
                &mut rng,
            ),
            Algorithm::Pso => self.pso.evolve(
                problem,
                &mut population,
                self.generations,
                algorithm.verbosity,
                &mut rng,
            ),
        }
        let champion = population.champion_f();
        debug!(
            "{} on {} (seed {seed}): champion {champion}",
            algorithm.algorithm, problem.problem
        );
        if champion.is_finite() {
            Ok(champion)
        } else {
            Err(OptimizerError::NonFiniteObjective(champion))
        }
    }
}

#[cfg(test)]
mod tests;
