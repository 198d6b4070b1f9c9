use log::debug;
use rand::Rng;
use rand_distr::{Distribution, Uniform};

use super::population::{evaluate, Population};
use crate::catalog::ProblemDescriptor;

/// Particle swarm with constriction coefficients and a global best
/// neighbourhood.
#[derive(Debug, Clone, PartialEq)]
pub struct Pso {
    /// Constriction factor applied to the whole velocity update.
    pub omega: f64,
    /// Attraction towards the particle's own best position.
    pub cognitive: f64,
    /// Attraction towards the swarm's best position.
    pub social: f64,
    /// Velocity cap as a fraction of the bound width.
    pub max_velocity: f64,
}

impl Default for Pso {
    fn default() -> Self {
        Self {
            omega: 0.7298,
            cognitive: 2.05,
            social: 2.05,
            max_velocity: 0.5,
        }
    }
}

impl Pso {
    pub fn evolve<R: Rng + ?Sized>(
        &self,
        problem: &ProblemDescriptor,
        population: &mut Population,
        generations: u32,
        verbosity: u32,
        rng: &mut R,
    ) {
        let (lower, upper) = problem.bounds();
        let v_max = self.max_velocity * (upper - lower);
        let initial_velocity = Uniform::new_inclusive(-v_max, v_max);
        let mut velocities = population
            .individuals()
            .iter()
            .map(|x| {
                x.iter()
                    .map(|_| initial_velocity.sample(rng))
                    .collect::<Vec<_>>()
            })
            .collect::<Vec<_>>();
        let mut best_x = population.individuals().to_vec();
        let mut best_f = population.fitness().to_vec();

        for generation in 1..=generations {
            for (idx, velocity) in velocities.iter_mut().enumerate() {
                let mut x = population.individuals()[idx].clone();
                let global = population.champion_x();
                for (d, (xd, vd)) in
                    x.iter_mut().zip(velocity.iter_mut()).enumerate()
                {
                    let r1 = rng.gen::<f64>();
                    let r2 = rng.gen::<f64>();
                    *vd = self.omega
                        * (*vd
                            + self.cognitive * r1 * (best_x[idx][d] - *xd)
                            + self.social * r2 * (global[d] - *xd));
                    *vd = vd.clamp(-v_max, v_max);
                    *xd += *vd;
                    if *xd < lower || *xd > upper {
                        *xd = xd.clamp(lower, upper);
                        *vd = 0.0;
                    }
                }
                let f = evaluate(problem, &x);
                if f < best_f[idx] {
                    best_f[idx] = f;
                    best_x[idx] = x.clone();
                }
                population.set(idx, x, f);
            }
            if verbosity > 0 && generation % verbosity == 0 {
                debug!(
                    "PSO generation {generation}: champion {}",
                    population.champion_f()
                );
            }
        }
    }
}
