use log::debug;
use rand::Rng;

use super::population::{evaluate, Population};
use crate::catalog::ProblemDescriptor;

/// Simple genetic algorithm: tournament selection, exponential crossover,
/// polynomial mutation and elitist reinsertion.
#[derive(Debug, Clone, PartialEq)]
pub struct Sga {
    pub crossover_rate: f64,
    pub mutation_rate: f64,
    /// Distribution index of the polynomial mutation.
    pub mutation_eta: f64,
    pub tournament_size: usize,
    /// Number of parents carried over in place of the worst offspring.
    pub elitism: usize,
}

impl Default for Sga {
    fn default() -> Self {
        Self {
            crossover_rate: 0.9,
            mutation_rate: 0.02,
            mutation_eta: 1.0,
            tournament_size: 2,
            elitism: 1,
        }
    }
}

impl Sga {
    pub fn evolve<R: Rng + ?Sized>(
        &self,
        problem: &ProblemDescriptor,
        population: &mut Population,
        generations: u32,
        verbosity: u32,
        rng: &mut R,
    ) {
        let size = population.len();
        for generation in 1..=generations {
            let parents = (0..size)
                .map(|_| self.tournament(population, rng))
                .collect::<Vec<_>>();
            let mut offspring = Vec::with_capacity(size);
            for pair in parents.chunks(2) {
                let first = &population.individuals()[pair[0]];
                let second = &population.individuals()[pair[pair.len() - 1]];
                let (mut a, mut b) = (first.clone(), second.clone());
                if pair.len() == 2 && rng.gen::<f64>() < self.crossover_rate {
                    a = self.exponential_crossover(first, second, rng);
                    b = self.exponential_crossover(second, first, rng);
                }
                offspring.push(a);
                if offspring.len() < size {
                    offspring.push(b);
                }
            }
            let (lower, upper) = problem.bounds();
            let mut scored = offspring
                .into_iter()
                .map(|mut x| {
                    self.polynomial_mutation(&mut x, lower, upper, rng);
                    let f = evaluate(problem, &x);
                    (x, f)
                })
                .collect::<Vec<_>>();
            scored.sort_by(|(_, f1), (_, f2)| f1.total_cmp(f2));

            let mut elite = (0..size).collect::<Vec<_>>();
            elite.sort_by(|&i, &j| {
                population.fitness()[i].total_cmp(&population.fitness()[j])
            });
            let elites = elite
                .into_iter()
                .take(self.elitism.min(size))
                .map(|i| {
                    (
                        population.individuals()[i].clone(),
                        population.fitness()[i],
                    )
                })
                .collect::<Vec<_>>();
            let keep = size - elites.len();
            scored.truncate(keep);
            scored.extend(elites);

            for (idx, (x, f)) in scored.into_iter().enumerate() {
                population.set(idx, x, f);
            }
            if verbosity > 0 && generation % verbosity == 0 {
                debug!(
                    "SGA generation {generation}: champion {}",
                    population.champion_f()
                );
            }
        }
    }

    fn tournament<R: Rng + ?Sized>(
        &self,
        population: &Population,
        rng: &mut R,
    ) -> usize {
        let size = population.len();
        (0..self.tournament_size.max(1))
            .map(|_| rng.gen_range(0..size))
            .min_by(|&i, &j| {
                population.fitness()[i].total_cmp(&population.fitness()[j])
            })
            .unwrap_or(0)
    }

    /// Copies a contiguous, wrapping run of genes from `donor` into a copy of
    /// `base`; the run keeps growing with probability `crossover_rate`.
    fn exponential_crossover<R: Rng + ?Sized>(
        &self,
        base: &[f64],
        donor: &[f64],
        rng: &mut R,
    ) -> Vec<f64> {
        let dim = base.len();
        let mut child = base.to_vec();
        if dim == 0 {
            return child;
        }
        let mut n = rng.gen_range(0..dim);
        let mut copied = 0;
        loop {
            child[n] = donor[n];
            n = (n + 1) % dim;
            copied += 1;
            if copied >= dim || rng.gen::<f64>() >= self.crossover_rate {
                break;
            }
        }
        child
    }

    fn polynomial_mutation<R: Rng + ?Sized>(
        &self,
        x: &mut [f64],
        lower: f64,
        upper: f64,
        rng: &mut R,
    ) {
        let width = upper - lower;
        let power = 1.0 / (self.mutation_eta + 1.0);
        for gene in x.iter_mut() {
            if rng.gen::<f64>() >= self.mutation_rate {
                continue;
            }
            let delta1 = (*gene - lower) / width;
            let delta2 = (upper - *gene) / width;
            let r = rng.gen::<f64>();
            let deltaq = if r < 0.5 {
                let xy = 1.0 - delta1;
                let val = 2.0 * r
                    + (1.0 - 2.0 * r) * xy.powf(self.mutation_eta + 1.0);
                val.powf(power) - 1.0
            } else {
                let xy = 1.0 - delta2;
                let val = 2.0 * (1.0 - r)
                    + 2.0 * (r - 0.5) * xy.powf(self.mutation_eta + 1.0);
                1.0 - val.powf(power)
            };
            *gene = (*gene + deltaq * width).clamp(lower, upper);
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;
    use crate::catalog::ConfigCatalog;

    #[test]
    fn test_champion_never_worsens() {
        let problem = ConfigCatalog::default()
            .resolve_problem("rastrigin")
            .unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut population =
            Population::random(&problem, 30, &mut rng).unwrap();
        let initial = population.champion_f();
        Sga::default()
            .evolve(&problem, &mut population, 20, 0, &mut rng);
        assert_eq!(population.len(), 30);
        assert!(population.champion_f() <= initial);
    }

    #[test]
    fn test_offspring_stay_in_bounds() {
        let problem =
            ConfigCatalog::default().resolve_problem("ackley").unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut population =
            Population::random(&problem, 11, &mut rng).unwrap();
        let sga = Sga {
            mutation_rate: 1.0,
            ..Sga::default()
        };
        sga.evolve(&problem, &mut population, 5, 1, &mut rng);
        let (lower, upper) = problem.bounds();
        assert!(population
            .individuals()
            .iter()
            .flatten()
            .all(|&x| (lower..=upper).contains(&x)));
    }

    #[test]
    fn test_exponential_crossover_copies_donor_genes() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let sga = Sga {
            crossover_rate: 1.0,
            ..Sga::default()
        };
        let child = sga.exponential_crossover(&[0.0; 4], &[1.0; 4], &mut rng);
        assert_eq!(child, vec![1.0; 4]);
    }
}
