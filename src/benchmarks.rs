use std::f64::consts::{E, PI};

use itertools::Itertools;

/// Constant of the offset Schwefel function, `f(420.9687, ...) = 0`.
pub const SCHWEFEL_OFFSET: f64 = 418.982_887_272_433_8;

pub fn ackley(x: &[f64]) -> f64 {
    let n = x.len() as f64;
    let sum_sq: f64 = x.iter().map(|xi| xi * xi).sum();
    let sum_cos: f64 = x.iter().map(|xi| (2.0 * PI * xi).cos()).sum();
    -20.0 * (-0.2 * (sum_sq / n).sqrt()).exp() - (sum_cos / n).exp()
        + 20.0
        + E
}

pub fn griewank(x: &[f64]) -> f64 {
    let sum: f64 = x.iter().map(|xi| xi * xi).sum::<f64>() / 4000.0;
    let prod: f64 = x
        .iter()
        .enumerate()
        .map(|(i, xi)| (xi / ((i + 1) as f64).sqrt()).cos())
        .product();
    1.0 + sum - prod
}

pub fn rastrigin(x: &[f64]) -> f64 {
    let n = x.len() as f64;
    10.0 * n
        + x.iter()
            .map(|xi| xi * xi - 10.0 * (2.0 * PI * xi).cos())
            .sum::<f64>()
}

pub fn rosenbrock(x: &[f64]) -> f64 {
    x.windows(2)
        .map(|w| 100.0 * (w[1] - w[0] * w[0]).powi(2) + (1.0 - w[0]).powi(2))
        .sum()
}

pub fn schwefel(x: &[f64]) -> f64 {
    SCHWEFEL_OFFSET * x.len() as f64
        - x.iter().map(|xi| xi * xi.abs().sqrt().sin()).sum::<f64>()
}

/// Lennard-Jones cluster energy with unit well depth and distance.
///
/// The first atom sits at the origin, the second on the x axis and the third
/// in the xy plane, so `x` holds `3 * atoms - 6` coordinates.
pub fn lennard_jones(x: &[f64]) -> f64 {
    let atoms = atom_positions(x);
    4.0 * atoms
        .iter()
        .tuple_combinations()
        .map(|(a, b)| {
            let r2: f64 = a.iter().zip(b).map(|(p, q)| (p - q).powi(2)).sum();
            let sixth = 1.0 / r2.powi(3);
            sixth * sixth - sixth
        })
        .sum::<f64>()
}

/// Putative global minima of clusters with 3 to 15 atoms.
const LENNARD_JONES_MINIMA: [f64; 13] = [
    -3.0, -6.0, -9.103852, -12.712062, -16.505384, -19.821489, -24.113360,
    -28.422532, -32.765970, -37.967600, -44.326801, -47.845157, -52.322627,
];

/// Number of decision variables of a cluster with `atoms` atoms.
pub fn lennard_jones_dimension(atoms: usize) -> usize {
    (3 * atoms).saturating_sub(6)
}

/// Lowest known energy of a cluster with `atoms` atoms, if tabulated.
pub fn lennard_jones_minimum(atoms: usize) -> Option<f64> {
    LENNARD_JONES_MINIMA.get(atoms.checked_sub(3)?).copied()
}

fn atom_positions(x: &[f64]) -> Vec<[f64; 3]> {
    let mut atoms = vec![[0.0; 3]];
    if let Some(&x0) = x.first() {
        atoms.push([x0, 0.0, 0.0]);
    }
    if x.len() >= 3 {
        atoms.push([x[1], x[2], 0.0]);
    }
    atoms.extend(
        x.iter()
            .skip(3)
            .tuples()
            .map(|(&a, &b, &c)| [a, b, c]),
    );
    atoms
}
