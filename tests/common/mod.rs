use std::{env, path::PathBuf, process};

/// A path in the temp dir that no other test (or test process) uses.
pub fn scratch_path(name: &str) -> PathBuf {
    env::temp_dir().join(format!("benchmark_runner_{}_{name}", process::id()))
}
