use core::fmt;
use std::str::FromStr;

use crate::benchmarks;
use crate::error::BenchError;

/// Default particle count of the Lennard-Jones cluster.
pub const DEFAULT_LENNARD_JONES_ATOMS: usize = 5;

/// The fixed benchmark suite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Problem {
    Ackley,
    Griewank,
    LennardJones,
    Rastrigin,
    Rosenbrock,
    Schwefel,
}

impl Problem {
    pub const ALL: [Problem; 6] = [
        Problem::Ackley,
        Problem::Griewank,
        Problem::LennardJones,
        Problem::Rastrigin,
        Problem::Rosenbrock,
        Problem::Schwefel,
    ];

    /// Name used in the experiment file.
    pub fn name(&self) -> &'static str {
        match self {
            Problem::Ackley => "ackley",
            Problem::Griewank => "griewank",
            Problem::LennardJones => "lennard_jones",
            Problem::Rastrigin => "rastrigin",
            Problem::Rosenbrock => "rosenbrock",
            Problem::Schwefel => "schwefel",
        }
    }

    /// Known global minimum used as ground truth for the absolute error.
    ///
    /// `None` for a Lennard-Jones cluster whose size has no tabulated
    /// minimum.
    pub fn theoretical_minimum(
        &self,
        lennard_jones_atoms: usize,
    ) -> Option<f64> {
        match self {
            Problem::Ackley
            | Problem::Griewank
            | Problem::Rastrigin
            | Problem::Rosenbrock => Some(0.0),
            Problem::Schwefel => Some(-418.9829),
            Problem::LennardJones => {
                benchmarks::lennard_jones_minimum(lennard_jones_atoms)
            }
        }
    }

    /// Box constraints, identical for every decision variable.
    pub fn bounds(&self) -> (f64, f64) {
        match self {
            Problem::Ackley => (-15.0, 30.0),
            Problem::Griewank => (-600.0, 600.0),
            Problem::LennardJones => (-3.0, 3.0),
            Problem::Rastrigin => (-5.12, 5.12),
            Problem::Rosenbrock => (-5.0, 10.0),
            Problem::Schwefel => (-500.0, 500.0),
        }
    }

    fn default_dimension(&self, lennard_jones_atoms: usize) -> usize {
        match self {
            Problem::Rosenbrock => 2,
            Problem::LennardJones => {
                benchmarks::lennard_jones_dimension(lennard_jones_atoms)
            }
            _ => 1,
        }
    }
}

impl FromStr for Problem {
    type Err = BenchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Problem::ALL
            .into_iter()
            .find(|p| p.name() == s)
            .ok_or_else(|| BenchError::UnknownProblem(s.to_string()))
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A resolved benchmark problem ready to be optimized.
#[derive(Debug, Clone, PartialEq)]
pub struct ProblemDescriptor {
    pub problem: Problem,
    pub dimension: usize,
    pub theoretical_minimum: f64,
}

impl ProblemDescriptor {
    pub fn bounds(&self) -> (f64, f64) {
        self.problem.bounds()
    }

    pub fn evaluate(&self, x: &[f64]) -> f64 {
        match self.problem {
            Problem::Ackley => benchmarks::ackley(x),
            Problem::Griewank => benchmarks::griewank(x),
            Problem::LennardJones => benchmarks::lennard_jones(x),
            Problem::Rastrigin => benchmarks::rastrigin(x),
            Problem::Rosenbrock => benchmarks::rosenbrock(x),
            Problem::Schwefel => benchmarks::schwefel(x),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Simple genetic algorithm.
    Sga,
    /// Particle swarm optimization.
    Pso,
}

impl Algorithm {
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Sga => "SGA",
            Algorithm::Pso => "PSO",
        }
    }
}

impl FromStr for Algorithm {
    type Err = BenchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SGA" => Ok(Algorithm::Sga),
            "PSO" => Ok(Algorithm::Pso),
            _ => Err(BenchError::UnknownAlgorithm(s.to_string())),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// An algorithm together with how chatty it is while evolving.
///
/// A `verbosity` of `k > 0` logs the champion every `k` generations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlgorithmDescriptor {
    pub algorithm: Algorithm,
    pub verbosity: u32,
}

impl AlgorithmDescriptor {
    pub fn with_verbosity(self, verbosity: u32) -> Self {
        Self { verbosity, ..self }
    }
}

/// Static lookup from the names in the experiment file to problems and
/// algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigCatalog {
    lennard_jones_atoms: usize,
}

impl Default for ConfigCatalog {
    fn default() -> Self {
        Self {
            lennard_jones_atoms: DEFAULT_LENNARD_JONES_ATOMS,
        }
    }
}

impl ConfigCatalog {
    /// Fails unless the cluster size has a tabulated minimum.
    pub fn new(lennard_jones_atoms: usize) -> Result<Self, BenchError> {
        if benchmarks::lennard_jones_minimum(lennard_jones_atoms).is_none() {
            return Err(BenchError::UnsupportedAtomCount(lennard_jones_atoms));
        }
        Ok(Self {
            lennard_jones_atoms,
        })
    }

    pub fn lennard_jones_atoms(&self) -> usize {
        self.lennard_jones_atoms
    }

    pub fn resolve_problem(
        &self,
        name: &str,
    ) -> Result<ProblemDescriptor, BenchError> {
        let problem: Problem = name.parse()?;
        Ok(ProblemDescriptor {
            problem,
            dimension: problem.default_dimension(self.lennard_jones_atoms),
            theoretical_minimum: self.minimum_of(problem)?,
        })
    }

    pub fn resolve_algorithm(
        &self,
        name: &str,
    ) -> Result<AlgorithmDescriptor, BenchError> {
        Ok(AlgorithmDescriptor {
            algorithm: name.parse()?,
            verbosity: 0,
        })
    }

    pub fn theoretical_minimum(&self, name: &str) -> Result<f64, BenchError> {
        self.minimum_of(name.parse()?)
    }

    fn minimum_of(&self, problem: Problem) -> Result<f64, BenchError> {
        problem
            .theoretical_minimum(self.lennard_jones_atoms)
            .ok_or(BenchError::UnsupportedAtomCount(self.lennard_jones_atoms))
    }
}
