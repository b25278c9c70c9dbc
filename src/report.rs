//! Batch checking and results persistence.
//!
//! Thin collaborator around the pipeline: reads passwords one per line,
//! writes one tab-separated verdict row per password, and reports how many
//! came out unsafe.

use std::fs;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use secrecy::SecretString;
use thiserror::Error;

use crate::breach::LookupError;
use crate::pipeline::{ValidationPipeline, Verdict};

#[derive(Error, Debug)]
pub enum BatchError {
    #[error("results file I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("breach lookup failed during batch check: {0}")]
    Lookup(#[from] LookupError),
}

/// Verdict for one checked password, ready for serialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckRecord {
    pub password: String,
    pub verdict: Verdict,
}

impl CheckRecord {
    pub fn status(&self) -> &'static str {
        if self.verdict.is_safe() { "safe" } else { "unsafe" }
    }

    /// Serializes the record as a tab-separated results row:
    /// `password<TAB>safe` or `password<TAB>unsafe<TAB>reason[; reason...]`.
    pub fn to_line(&self) -> String {
        match &self.verdict {
            Verdict::Safe => format!("{}\tsafe", self.password),
            Verdict::Unsafe(reasons) => {
                format!("{}\tunsafe\t{}", self.password, reasons.join("; "))
            }
        }
    }
}

/// Counts produced by one batch run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    pub total: usize,
    pub unsafe_count: usize,
}

/// Checks every password in `input` (one per line, trimmed, blank lines
/// skipped) and writes one results row per password to `output`.
///
/// # Errors
///
/// A [`LookupError`] aborts the whole batch as [`BatchError::Lookup`];
/// callers that prefer to record-and-skip can drive
/// [`ValidationPipeline::check`] themselves.
pub fn check_file(
    pipeline: &ValidationPipeline,
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
) -> Result<BatchSummary, BatchError> {
    let reader = BufReader::new(fs::File::open(input)?);
    let mut writer = BufWriter::new(fs::File::create(output)?);

    let mut total = 0;
    let mut unsafe_count = 0;

    for line in reader.lines() {
        let line = line?;
        let password = line.trim();
        if password.is_empty() {
            continue;
        }

        let verdict = pipeline.check(&SecretString::new(password.to_string().into()))?;
        let record = CheckRecord {
            password: password.to_string(),
            verdict,
        };

        total += 1;
        if !record.verdict.is_safe() {
            unsafe_count += 1;
        }

        writeln!(writer, "{}", record.to_line())?;
    }

    writer.flush()?;

    #[cfg(feature = "tracing")]
    tracing::info!("batch check finished: {} checked, {} unsafe", total, unsafe_count);

    Ok(BatchSummary {
        total,
        unsafe_count,
    })
}

/// Re-derives the unsafe count from an existing results stream.
///
/// Rows whose second tab-separated field is `unsafe` are counted; rows
/// without a status field are ignored.
pub fn count_unsafe<R: BufRead>(reader: R) -> Result<usize, BatchError> {
    let mut count = 0;
    for line in reader.lines() {
        let line = line?;
        if line.split('\t').nth(1) == Some("unsafe") {
            count += 1;
        }
    }
    Ok(count)
}
