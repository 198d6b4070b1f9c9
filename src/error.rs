use std::io;

use thiserror::Error;

/// Errors raised while loading an experiment, running a trial or writing
/// its result.
#[derive(Debug, Error)]
pub enum BenchError {
    /// A file could not be opened, read or written.
    #[error("{0}")]
    Io(#[from] io::Error),
    /// The repetition field of an experiment row is not an integer.
    #[error("line {line}: invalid repetition `{value}`")]
    Parse { line: usize, value: String },
    /// The block does not name one of the benchmark problems.
    #[error("unknown problem: {0}")]
    UnknownProblem(String),
    /// The algorithm name is neither `SGA` nor `PSO`.
    #[error("unknown algorithm: {0}")]
    UnknownAlgorithm(String),
    /// No known minimum exists for a Lennard-Jones cluster of this size.
    #[error("unsupported Lennard-Jones atom count {0}, expected 3 to 15")]
    UnsupportedAtomCount(usize),
    /// The optimizer failed while evolving a population.
    #[error("{0}")]
    Optimizer(#[from] OptimizerError),
}

/// Error returned from an [`Optimizer`](crate::optimizer::Optimizer).
#[derive(Debug, Error, PartialEq)]
pub enum OptimizerError {
    /// A population needs at least one individual.
    #[error("population size must be positive")]
    EmptyPopulation,
    /// An archipelago needs at least one island.
    #[error("archipelago has no islands")]
    NoIslands,
    /// The objective returned NaN or an infinite value.
    #[error("objective value is not finite: {0}")]
    NonFiniteObjective(f64),
    /// An island thread panicked before it finished evolving.
    #[error("island {0} panicked during evolution")]
    IslandPanicked(usize),
}
