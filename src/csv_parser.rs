use std::{
    fs,
    io::{self, BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use log::{debug, warn};

use crate::{
    datastructures::{ExperimentRow, ResultRow, RESULT_HEADER},
    error::BenchError,
};

/// Reads the experiment design at `path`.
///
/// The first line is a header and is discarded without validation. Every
/// other line holds `block,algorithm,parallelization,repetition`; quoting is
/// not supported and fields are not trimmed. A non-numeric repetition aborts
/// the whole load.
pub fn load_experiment<P: AsRef<Path>>(
    path: P,
) -> Result<Vec<ExperimentRow>, BenchError> {
    let file = fs::File::open(path.as_ref())?;
    let rows = parse_experiment(BufReader::new(file))?;
    debug!("Loaded {} rows from {:?}", rows.len(), path.as_ref());
    Ok(rows)
}

/// Parses an experiment design, see [`load_experiment`].
pub fn parse_experiment<R: BufRead>(
    reader: R,
) -> Result<Vec<ExperimentRow>, BenchError> {
    let mut rows = Vec::new();
    for (idx, line) in reader.lines().enumerate().skip(1) {
        let line = line?;
        let line = line.strip_suffix('\r').unwrap_or(&line);
        if line.is_empty() {
            continue;
        }
        rows.push(parse_row(line, idx + 1)?);
    }
    Ok(rows)
}

fn parse_row(
    line: &str,
    line_number: usize,
) -> Result<ExperimentRow, BenchError> {
    let mut fields = line.split(',');
    let mut next_field = || fields.next().unwrap_or_default().to_string();
    let block = next_field();
    let algorithm = next_field();
    let parallelization = next_field();
    let repetition_str = next_field();
    let repetition =
        repetition_str
            .trim()
            .parse()
            .map_err(|_| BenchError::Parse {
                line: line_number,
                value: repetition_str.clone(),
            })?;
    if line.matches(',').count() < 3 {
        warn!("line {line_number}: expected 4 fields in `{line}`");
    }
    Ok(ExperimentRow {
        block,
        algorithm,
        parallelization,
        repetition,
    })
}

/// Appends result lines to the results table.
///
/// Every row is flushed right away so an interrupted batch keeps all
/// completed trials.
pub struct ResultWriter<W: Write> {
    out: W,
}

impl ResultWriter<BufWriter<fs::File>> {
    /// Creates (or truncates) the results file at `path`.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self, BenchError> {
        Ok(Self::new(BufWriter::new(fs::File::create(path)?)))
    }
}

impl<W: Write> ResultWriter<W> {
    /// Writes results to `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Writes the column names.
    pub fn write_header(&mut self) -> io::Result<()> {
        writeln!(self.out, "{RESULT_HEADER}")?;
        self.out.flush()
    }

    /// Appends one result line.
    pub fn write_row(&mut self, row: &ResultRow) -> io::Result<()> {
        writeln!(self.out, "{row}")?;
        self.out.flush()
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}
