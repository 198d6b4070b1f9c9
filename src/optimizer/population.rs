use rand::Rng;
use rand_distr::{Distribution, Uniform};

use crate::{catalog::ProblemDescriptor, error::OptimizerError};

/// Decision vectors of one island together with their objective values.
///
/// The champion is the best individual ever stored in the population, so it
/// survives even if the individual itself is later replaced.
#[derive(Debug, Clone)]
pub struct Population {
    individuals: Vec<Vec<f64>>,
    fitness: Vec<f64>,
    champion_x: Vec<f64>,
    champion_f: f64,
}

impl Population {
    /// Samples `size` individuals uniformly inside the problem bounds.
    pub fn random<R: Rng + ?Sized>(
        problem: &ProblemDescriptor,
        size: usize,
        rng: &mut R,
    ) -> Result<Self, OptimizerError> {
        if size == 0 {
            return Err(OptimizerError::EmptyPopulation);
        }
        let (lower, upper) = problem.bounds();
        let distribution = Uniform::new_inclusive(lower, upper);
        let mut population = Self {
            individuals: Vec::with_capacity(size),
            fitness: Vec::with_capacity(size),
            champion_x: Vec::new(),
            champion_f: f64::INFINITY,
        };
        for _ in 0..size {
            let x: Vec<f64> = (0..problem.dimension)
                .map(|_| distribution.sample(rng))
                .collect();
            let f = evaluate(problem, &x);
            population.update_champion(&x, f);
            population.individuals.push(x);
            population.fitness.push(f);
        }
        Ok(population)
    }

    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    pub fn individuals(&self) -> &[Vec<f64>] {
        &self.individuals
    }

    pub fn fitness(&self) -> &[f64] {
        &self.fitness
    }

    pub fn champion_x(&self) -> &[f64] {
        &self.champion_x
    }

    pub fn champion_f(&self) -> f64 {
        self.champion_f
    }

    /// Index of the individual with the lowest objective value.
    pub fn best_idx(&self) -> usize {
        self.extreme_idx(|candidate, current| candidate < current)
    }

    /// Index of the individual with the highest objective value.
    pub fn worst_idx(&self) -> usize {
        self.extreme_idx(|candidate, current| candidate > current)
    }

    /// Replaces individual `idx`, keeping the champion up to date.
    pub fn set(&mut self, idx: usize, x: Vec<f64>, f: f64) {
        self.update_champion(&x, f);
        self.individuals[idx] = x;
        self.fitness[idx] = f;
    }

    fn extreme_idx(&self, better: impl Fn(f64, f64) -> bool) -> usize {
        self.fitness
            .iter()
            .enumerate()
            .fold(0, |best, (i, &f)| {
                if better(f, self.fitness[best]) {
                    i
                } else {
                    best
                }
            })
    }

    fn update_champion(&mut self, x: &[f64], f: f64) {
        if f < self.champion_f || self.champion_x.is_empty() {
            self.champion_f = f;
            self.champion_x = x.to_vec();
        }
    }
}

/// Evaluates `x`; NaN and infinite objective values rank as the worst
/// possible value.
pub fn evaluate(problem: &ProblemDescriptor, x: &[f64]) -> f64 {
    let f = problem.evaluate(x);
    if f.is_finite() {
        f
    } else {
        f64::INFINITY
    }
}
