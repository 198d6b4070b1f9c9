use std::{
    fs,
    process::{Command, Output},
};

mod common;
use common::*;

fn benchmark_runner(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_benchmark_runner"))
        .args(args)
        .output()
        .unwrap()
}

fn result_aggregator(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_result_aggregator"))
        .args(args)
        .output()
        .unwrap()
}

#[test]
fn test_invalid_design_leaves_no_results() {
    let output_path = scratch_path("invalid_design.csv");
    let output = benchmark_runner(&[
        "-i",
        "data/test/invalid_repetition.csv",
        "-o",
        output_path.to_str().unwrap(),
    ]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("tres"));
    assert!(!output_path.exists());
}

#[test]
fn test_missing_design() {
    let output_path = scratch_path("missing_design.csv");
    let output = benchmark_runner(&[
        "-i",
        "data/test/missing.csv",
        "-o",
        output_path.to_str().unwrap(),
    ]);
    assert_eq!(output.status.code(), Some(1));
    assert!(!output_path.exists());
}

#[test]
fn test_skipped_rows_still_succeed() {
    let output_path = scratch_path("skipped_rows.csv");
    let output = benchmark_runner(&[
        "-i",
        "data/test/experimento_diseno.csv",
        "-o",
        output_path.to_str().unwrap(),
        "--seed",
        "1",
    ]);
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.matches("Error in row").count(), 2);
    assert!(stderr.contains("foo"));
    assert!(String::from_utf8_lossy(&output.stdout)
        .contains("Simulations completed. Results saved in"));

    let results = fs::read_to_string(&output_path).unwrap();
    assert_eq!(results.lines().count(), 5);
    assert!(results.starts_with("Bloque,Algoritmo,Paralelizacion,"));
    fs::remove_file(output_path).unwrap();
}

#[test]
fn test_unsupported_atom_count_is_a_config_error() {
    let output_path = scratch_path("unsupported_atoms.csv");
    let output = benchmark_runner(&[
        "-i",
        "data/test/experimento_diseno.csv",
        "-o",
        output_path.to_str().unwrap(),
        "--lennard-jones-atoms",
        "2",
    ]);
    assert_eq!(output.status.code(), Some(exitcode::CONFIG));
    assert!(String::from_utf8_lossy(&output.stderr).contains("atom count 2"));
    assert!(!output_path.exists());
}

#[test]
fn test_missing_config_file() {
    let output = benchmark_runner(&["-c", "data/test/missing_config.json"]);
    assert_eq!(output.status.code(), Some(exitcode::CONFIG));
    assert!(String::from_utf8_lossy(&output.stderr)
        .contains("missing_config.json"));
}

#[test]
fn test_aggregator_counts() {
    let output = result_aggregator(&["data/test/resultados.csv"]);
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "ackley|SGA|Secuencial => 3 observaciones\n\
         rastrigin|PSO|Paralela => 2 observaciones\n"
    );
}

#[test]
fn test_aggregator_missing_file() {
    let output = result_aggregator(&["data/test/missing.csv"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
}
