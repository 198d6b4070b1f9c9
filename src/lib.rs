#![warn(missing_docs)]
//! Benchmark metaheuristic optimizers against a fixed suite of test functions.
//!
//! An experiment design lists one trial per line: the benchmark problem
//! (block), the algorithm, whether the trial runs serially or as a parallel
//! archipelago, and a repetition index. Every trial reports the absolute
//! error between the best objective value found and the problem's known
//! global minimum.
//!
//! The crate ships two executables: `benchmark_runner` runs a design and
//! writes the results table, `result_aggregator` counts the observations per
//! configuration of such a table.
//!
//! Example
//! ```rust
//! use benchmark_runner::catalog::ConfigCatalog;
//! use benchmark_runner::csv_parser::{self, ResultWriter};
//! use benchmark_runner::datastructures::TrialSettings;
//! use benchmark_runner::optimizer::Metaheuristics;
//! use benchmark_runner::trial_runner;
//! # use anyhow::Result;
//!
//! fn example() -> Result<()> {
//!     // header line, then block,algorithm,parallelization,repetition
//!     let rows = csv_parser::parse_experiment(
//!         "Bloque,Algoritmo,Paralelizacion,Repeticion\n\
//!          ackley,SGA,Secuencial,1\n\
//!          rastrigin,PSO,Paralela,1\n"
//!             .as_bytes(),
//!     )?;
//!     let mut writer = ResultWriter::new(Vec::new());
//!     let summary = trial_runner::run_experiment(
//!         &rows,
//!         &ConfigCatalog::default(),
//!         &Metaheuristics::default(), // one generation per evolution
//!         &TrialSettings::default(),  // 30 individuals, 4 islands
//!         &mut writer,
//!     )?;
//!     assert_eq!(summary.completed, 2);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

/// Problems and algorithms addressable from an experiment design.
#[allow(missing_docs)]
pub mod catalog;

/// Objective functions of the benchmark suite.
#[allow(missing_docs)]
pub mod benchmarks;

/// Loading experiment designs and writing result tables.
pub mod csv_parser;

/// Counting observations per configuration in a result table.
pub mod aggregator;

/// Rows, settings and configuration shared by the executables.
#[allow(missing_docs)]
pub mod datastructures;

/// Error types.
#[allow(missing_docs)]
pub mod error;

/// The optimizer capability and its built-in metaheuristics.
#[allow(missing_docs)]
pub mod optimizer;

/// Running single trials and whole experiment batches.
pub mod trial_runner;
