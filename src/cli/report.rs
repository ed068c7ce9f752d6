//! Output formatting for resolved values.
//!
//! Kept apart from the resolver so the library can be used without printing
//! side effects.

use std::io::{self, Write};

use anyhow::{Context, Result};
use colored::Colorize;

use super::commands::suffix::Resolution;
use crate::config::OutputFormat;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print resolutions to stdout, and text-mode errors to stderr.
pub fn print_resolutions(resolutions: &[Resolution], format: OutputFormat) -> Result<()> {
    print_resolutions_to(
        resolutions,
        format,
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    )
}

/// Print resolutions to custom writers.
///
/// Text format writes one `input<TAB>suffix` line per valid value to `out` and one
/// `✘ message` line per invalid value to `err`. JSON format writes a single
/// array covering every value to `out`.
pub fn print_resolutions_to<O: Write, E: Write>(
    resolutions: &[Resolution],
    format: OutputFormat,
    out: &mut O,
    err: &mut E,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for resolution in resolutions {
                match resolution {
                    Resolution::Resolved { input, suffix } => {
                        writeln!(out, "{}\t{}", input, suffix)?
                    }
                    Resolution::Invalid { error, .. } => {
                        writeln!(err, "{} {}", FAILURE_MARK.red(), error)?
                    }
                }
            }
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(resolutions)
                .context("Failed to serialize results")?;
            writeln!(out, "{}", json)?;
        }
    }
    Ok(())
}

/// Print a resolved/invalid summary to stderr.
pub fn print_summary(resolved: usize, invalid: usize) {
    print_summary_to(resolved, invalid, &mut io::stderr().lock());
}

pub fn print_summary_to<W: Write>(resolved: usize, invalid: usize, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!("{} resolved", resolved).green()
    );
    if invalid > 0 {
        let _ = writeln!(
            writer,
            "{} {}",
            FAILURE_MARK.red(),
            format!("{} invalid", invalid).red()
        );
    }
}
