use benchmark_runner::{csv_parser, error::BenchError};

#[test]
fn test_experiment_design() {
    let rows = csv_parser::load_experiment("data/test/experimento_diseno.csv")
        .unwrap();
    assert_eq!(rows.len(), 6);
    assert_eq!(rows[0].block, "ackley");
    assert!(!rows[0].is_parallel());
    assert_eq!(rows[1].algorithm, "PSO");
    assert!(rows[1].is_parallel());
    assert_eq!(rows[1].repetition, 3);
    assert_eq!(rows[2].block, "foo");
}

#[test]
fn test_invalid_repetition_aborts_load() {
    let err = csv_parser::load_experiment("data/test/invalid_repetition.csv")
        .unwrap_err();
    assert!(matches!(err, BenchError::Parse { line: 3, .. }));
}

#[test]
fn test_missing_design() {
    let err = csv_parser::load_experiment("data/test/does_not_exist.csv")
        .unwrap_err();
    assert!(matches!(err, BenchError::Io(_)));
}
