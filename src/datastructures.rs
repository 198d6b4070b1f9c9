use core::fmt;
use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use clap_verbosity_flag::Verbosity;
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};

use crate::catalog::{ConfigCatalog, DEFAULT_LENNARD_JONES_ATOMS};

/// Label of the parallelization column that selects the island run.
pub const PARALLEL_LABEL: &str = "Paralela";

/// Header of the results file.
pub const RESULT_HEADER: &str =
    "Bloque,Algoritmo,Paralelizacion,Repeticion,ErrorAbsoluto";

pub static CONFIG: OnceCell<Config> = OnceCell::new();

/// One planned trial of the experiment design.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExperimentRow {
    pub block: String,
    pub algorithm: String,
    pub parallelization: String,
    /// Informational only.
    pub repetition: i32,
}

impl ExperimentRow {
    /// Any label other than [`PARALLEL_LABEL`] means a serial run.
    pub fn is_parallel(&self) -> bool {
        self.parallelization == PARALLEL_LABEL
    }
}

/// Outcome of one trial, written as one line of the results file.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultRow {
    pub block: String,
    pub algorithm: String,
    pub parallelization: String,
    pub repetition: i32,
    pub absolute_error: f64,
}

impl fmt::Display for ResultRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{},{},{}",
            self.block,
            self.algorithm,
            self.parallelization,
            self.repetition,
            self.absolute_error
        )
    }
}

/// Experiment protocol constants shared by every trial of a batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrialSettings {
    pub population_size: usize,
    pub num_islands: usize,
    /// Base seed of the batch RNG; `None` seeds it once from entropy.
    pub seed: Option<u64>,
}

impl Default for TrialSettings {
    fn default() -> Self {
        Self {
            population_size: default_population_size(),
            num_islands: default_num_islands(),
            seed: None,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Config {
    #[serde(default = "default_input")]
    pub input: PathBuf,
    #[serde(default = "default_output")]
    pub output: PathBuf,
    #[serde(default = "default_population_size")]
    pub population_size: usize,
    #[serde(default = "default_num_islands")]
    pub num_islands: usize,
    #[serde(default = "default_generations")]
    pub generations: u32,
    #[serde(default = "default_lennard_jones_atoms")]
    pub lennard_jones_atoms: usize,
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: default_input(),
            output: default_output(),
            population_size: default_population_size(),
            num_islands: default_num_islands(),
            generations: default_generations(),
            lennard_jones_atoms: default_lennard_jones_atoms(),
            seed: None,
        }
    }
}

impl Config {
    pub fn from_cli(args: &Args) -> Result<Config> {
        let mut config: Config = match &args.config {
            Some(config_path) => {
                let config_str = fs::read_to_string(config_path)
                    .with_context(|| format!("reading {config_path:?}"))?;
                serde_json::from_str(&config_str)
                    .with_context(|| format!("parsing {config_path:?}"))?
            }
            None => Config::default(),
        };
        if let Some(input) = &args.input {
            config.input = input.to_path_buf();
        }
        if let Some(output) = &args.output {
            config.output = output.to_path_buf();
        }
        if let Some(population_size) = args.population_size {
            config.population_size = population_size;
        }
        if let Some(num_islands) = args.num_islands {
            config.num_islands = num_islands;
        }
        if let Some(generations) = args.generations {
            config.generations = generations;
        }
        if let Some(atoms) = args.lennard_jones_atoms {
            config.lennard_jones_atoms = atoms;
        }
        if args.seed.is_some() {
            config.seed = args.seed;
        }
        config.catalog()?;
        Ok(config)
    }

    pub fn catalog(&self) -> Result<ConfigCatalog> {
        ConfigCatalog::new(self.lennard_jones_atoms)
            .context("invalid lennard_jones_atoms")
    }

    pub fn global() -> &'static Config {
        CONFIG.get().expect("config is not initialized")
    }

    pub fn trial_settings(&self) -> TrialSettings {
        TrialSettings {
            population_size: self.population_size,
            num_islands: self.num_islands,
            seed: self.seed,
        }
    }
}

fn default_input() -> PathBuf {
    PathBuf::from("experimento_diseno.csv")
}

fn default_output() -> PathBuf {
    PathBuf::from("resultados.csv")
}

fn default_population_size() -> usize {
    30
}

fn default_num_islands() -> usize {
    4
}

fn default_generations() -> u32 {
    1
}

fn default_lennard_jones_atoms() -> usize {
    DEFAULT_LENNARD_JONES_ATOMS
}

#[derive(Parser)]
#[command(author, version, about)]
pub struct Args {
    /// Path to a json config
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    /// CSV file with the experiment design
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,
    /// CSV file the absolute errors are written to
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
    /// Individuals per population (and per island)
    #[arg(short, long)]
    pub population_size: Option<usize>,
    /// Islands evolved concurrently for parallel rows
    #[arg(short = 'n', long)]
    pub num_islands: Option<usize>,
    /// Generations per evolution
    #[arg(short, long)]
    pub generations: Option<u32>,
    /// Number of atoms of the Lennard-Jones cluster
    #[arg(long, value_name = "ATOMS")]
    pub lennard_jones_atoms: Option<usize>,
    /// Base seed for reproducible runs
    #[arg(short, long)]
    pub seed: Option<u64>,
    #[command(flatten)]
    pub verbosity: Verbosity,
}

#[derive(Parser)]
#[command(author, version, about)]
pub struct AggregatorArgs {
    /// Results file written by the benchmark runner
    #[arg(default_value = "resultados.csv")]
    pub results: PathBuf,
    #[command(flatten)]
    pub verbosity: Verbosity,
}
