use std::{
    collections::BTreeMap,
    fs,
    io::{BufRead, BufReader},
    path::Path,
};

use itertools::Itertools;

use crate::error::BenchError;

/// Separator of the composite `block|algorithm|parallelization` key.
pub const KEY_SEPARATOR: &str = "|";

/// Observation counts keyed by configuration, in ascending key order.
pub type AggregateCount = BTreeMap<String, usize>;

/// Counts the result rows of the file at `path` per configuration.
pub fn aggregate<P: AsRef<Path>>(
    path: P,
) -> Result<AggregateCount, BenchError> {
    let file = fs::File::open(path)?;
    count_observations(BufReader::new(file))
}

/// Counts result lines per configuration, skipping the header.
///
/// Only the first three comma delimited fields form the key; whatever
/// follows the third comma is ignored. Lines with fewer than three commas are
/// skipped silently.
pub fn count_observations<R: BufRead>(
    reader: R,
) -> Result<AggregateCount, BenchError> {
    let mut counts = AggregateCount::new();
    for line in reader.lines().skip(1) {
        if let Some(key) = configuration_key(&line?) {
            *counts.entry(key).or_insert(0) += 1;
        }
    }
    Ok(counts)
}

/// Builds the composite key of one result line.
pub fn configuration_key(line: &str) -> Option<String> {
    let (block, algorithm, parallelization, _) =
        line.splitn(4, ',').collect_tuple()?;
    Some([block, algorithm, parallelization].join(KEY_SEPARATOR))
}

/// Renders one `key => count observaciones` line per configuration.
pub fn format_counts(counts: &AggregateCount) -> String {
    counts
        .iter()
        .map(|(key, count)| format!("{key} => {count} observaciones"))
        .join("\n")
}
