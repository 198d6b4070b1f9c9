use crate::{
    catalog::{
        AlgorithmDescriptor, ConfigCatalog, ProblemDescriptor, Problem,
    },
    error::OptimizerError,
    optimizer::{Metaheuristics, Optimizer},
};

fn resolve(
    problem: &str,
    algorithm: &str,
) -> (ProblemDescriptor, AlgorithmDescriptor) {
    let catalog = ConfigCatalog::default();
    (
        catalog.resolve_problem(problem).unwrap(),
        catalog.resolve_algorithm(algorithm).unwrap(),
    )
}

struct PanickingOptimizer;

impl Optimizer for PanickingOptimizer {
    fn evolve(
        &self,
        _problem: &ProblemDescriptor,
        _algorithm: &AlgorithmDescriptor,
        _population_size: usize,
        seed: u64,
    ) -> Result<f64, OptimizerError> {
        if seed == 2 {
            panic!("island blew up");
        }
        Ok(seed as f64)
    }
}

#[test]
fn test_same_seed_same_champion() {
    let optimizer = Metaheuristics::new(10);
    for algorithm in ["SGA", "PSO"] {
        let (problem, algorithm) = resolve("rastrigin", algorithm);
        let first = optimizer.evolve(&problem, &algorithm, 30, 42).unwrap();
        let second = optimizer.evolve(&problem, &algorithm, 30, 42).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn test_every_problem_yields_a_champion_above_minimum() {
    let optimizer = Metaheuristics::default();
    for problem in Problem::ALL {
        let (problem, algorithm) = resolve(problem.name(), "SGA");
        let champion = optimizer.evolve(&problem, &algorithm, 30, 1).unwrap();
        assert!(champion.is_finite());
        // The Schwefel table entry lies below the reachable minimum.
        assert!(champion >= problem.theoretical_minimum - 1e-6);
    }
}

#[test]
fn test_lennard_jones_swarm_survives_collapsed_atoms() {
    // Clamping to the box stacks atoms on the same corner over many
    // generations, which makes the cluster energy NaN.
    let optimizer = Metaheuristics::new(50);
    let (problem, algorithm) = resolve("lennard_jones", "PSO");
    for seed in 0..20 {
        let champion = optimizer.evolve(&problem, &algorithm, 30, seed);
        assert!(champion.is_ok(), "seed {seed}: {champion:?}");
        assert!(champion.unwrap() >= problem.theoretical_minimum - 1e-6);
    }
}

#[test]
fn test_archipelago_matches_serial_islands() {
    let optimizer = Metaheuristics::new(5);
    let (problem, algorithm) = resolve("ackley", "PSO");
    let seeds = [1, 2, 3, 4];
    let champions = optimizer
        .evolve_archipelago(&problem, &algorithm, 30, &seeds)
        .unwrap();
    assert_eq!(champions.len(), 4);
    for (seed, champion) in seeds.iter().zip(&champions) {
        assert_eq!(
            optimizer.evolve(&problem, &algorithm, 30, *seed).unwrap(),
            *champion
        );
    }
}

#[test]
fn test_archipelago_without_islands() {
    let (problem, algorithm) = resolve("ackley", "SGA");
    assert_eq!(
        Metaheuristics::default()
            .evolve_archipelago(&problem, &algorithm, 30, &[]),
        Err(OptimizerError::NoIslands)
    );
}

#[test]
fn test_archipelago_reports_panicked_island() {
    let (problem, algorithm) = resolve("ackley", "SGA");
    assert_eq!(
        PanickingOptimizer.evolve_archipelago(
            &problem,
            &algorithm,
            30,
            &[0, 1, 2, 3]
        ),
        Err(OptimizerError::IslandPanicked(2))
    );
}

#[test]
fn test_empty_population() {
    let (problem, algorithm) = resolve("griewank", "PSO");
    assert_eq!(
        Metaheuristics::default().evolve(&problem, &algorithm, 0, 0),
        Err(OptimizerError::EmptyPopulation)
    );
}
