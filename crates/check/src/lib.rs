//! `intake-check` library crate.
//!
//! Streams candidate records through the registration validator. The
//! binary entrypoint lives in `main.rs`; the pieces here are exported for
//! integration testing.

pub mod config;

use std::io::{BufRead, Write};
use std::path::Path;

use anyhow::Context;
use intake_core::record::CandidateRecord;
use intake_core::validation::evaluator::{validate, validate_submission};
use intake_core::validation::rules::ErrorResult;
use intake_core::validation::schema::{patient_registration_schema, Schema};
use serde::Serialize;

use crate::config::CheckMode;

/// Counts from one [`run`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Lines that parsed as records and were validated.
    pub records: usize,
    /// Validated records with at least one error.
    pub invalid: usize,
    /// Lines that could not be parsed.
    pub rejected: usize,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum OutputLine {
    Checked { line: usize, errors: ErrorResult },
    Rejected { line: usize, rejected: String },
}

/// Load the schema document at `path`, or the built-in registration schema.
pub fn load_schema(path: Option<&Path>) -> anyhow::Result<Schema> {
    let Some(path) = path else {
        return Ok(patient_registration_schema().clone());
    };
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read schema {}", path.display()))?;
    let schema = Schema::from_json(&json)
        .with_context(|| format!("failed to load schema {}", path.display()))?;
    Ok(schema)
}

/// Validate one JSON record per input line, writing one JSON result per line.
///
/// Blank lines are skipped. Malformed lines are reported in the output and
/// counted as rejected; they do not stop the run.
pub fn run(
    schema: &Schema,
    mode: CheckMode,
    reader: impl BufRead,
    mut writer: impl Write,
) -> anyhow::Result<RunSummary> {
    let mut summary = RunSummary::default();

    for (index, line) in reader.lines().enumerate() {
        let line_no = index + 1;
        let line = line.with_context(|| format!("failed to read input line {line_no}"))?;
        if line.trim().is_empty() {
            continue;
        }

        let output = match serde_json::from_str::<CandidateRecord>(&line) {
            Ok(record) => {
                let errors = match mode {
                    CheckMode::Fields => validate(schema, &record),
                    CheckMode::Submission => validate_submission(schema, &record),
                };
                summary.records += 1;
                if !errors.is_valid() {
                    summary.invalid += 1;
                }
                tracing::debug!(
                    line = line_no,
                    invalid_fields = errors.invalid_fields().count(),
                    "Record checked",
                );
                OutputLine::Checked {
                    line: line_no,
                    errors,
                }
            }
            Err(e) => {
                summary.rejected += 1;
                tracing::warn!(line = line_no, error = %e, "Rejected malformed record");
                OutputLine::Rejected {
                    line: line_no,
                    rejected: e.to_string(),
                }
            }
        };

        serde_json::to_writer(&mut writer, &output).context("failed to write result")?;
        writeln!(writer).context("failed to write result")?;
    }

    writer.flush().context("failed to flush output")?;

    tracing::info!(
        records = summary.records,
        invalid = summary.invalid,
        rejected = summary.rejected,
        "Check complete",
    );

    Ok(summary)
}
