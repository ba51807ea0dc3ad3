//! Text and JSON renderings of solver results.

use std::io::Write;

use serde::{Deserialize, Serialize};
use wdp_core::SearchResult;

use crate::CliError;

/// How `wdp solve` prints its results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum OutputFormat {
    /// One `best <solver>: <bits> <price>$ <ms> ms` line per solver.
    #[default]
    Text,
    /// A pretty-printed JSON array of reports.
    Json,
}

/// Outcome of one solver run as printed by the CLI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct SolverReport {
    pub(crate) solver: String,
    pub(crate) winners: Vec<usize>,
    /// Allocation bits, bid 0 first.
    pub(crate) bits: String,
    pub(crate) price: u64,
    pub(crate) elapsed_ms: u64,
    pub(crate) evaluations: u64,
}

impl SolverReport {
    pub(crate) fn new(solver: &str, result: &SearchResult) -> Self {
        Self {
            solver: solver.to_owned(),
            winners: result.winners(),
            bits: result.allocation.bit_string(),
            price: result.price,
            elapsed_ms: u64::try_from(result.elapsed().as_millis()).unwrap_or(u64::MAX),
            evaluations: result.diagnostics.evaluations,
        }
    }
}

pub(crate) fn write_reports(
    writer: &mut dyn Write,
    format: OutputFormat,
    reports: &[SolverReport],
) -> Result<(), CliError> {
    match format {
        OutputFormat::Text => {
            for report in reports {
                writeln!(
                    writer,
                    "best {}: {} {}$ {} ms",
                    report.solver, report.bits, report.price, report.elapsed_ms
                )
                .map_err(CliError::WriteOutput)?;
            }
            Ok(())
        }
        OutputFormat::Json => write_json(writer, reports),
    }
}

/// Pretty-print `value` followed by a newline.
pub(crate) fn write_json<T>(writer: &mut dyn Write, value: &T) -> Result<(), CliError>
where
    T: Serialize + ?Sized,
{
    let payload = serde_json::to_string_pretty(value).map_err(CliError::Serialise)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}
