use std::{
    env,
    io::{self, BufRead},
};

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::debug;

use super::super::args::SuffixCommand;
use super::super::exit_status::ExitStatus;
use super::super::report;
use crate::config::{CONFIG_FILE_NAME, InputMode, load_config};
use crate::suffix::{OrdinalInput, Suffix};

/// Outcome of resolving a single input value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Resolution {
    Resolved { input: String, suffix: Suffix },
    Invalid { input: String, error: String },
}

impl Resolution {
    pub fn input(&self) -> &str {
        match self {
            Resolution::Resolved { input, .. } | Resolution::Invalid { input, .. } => input,
        }
    }

    pub fn suffix(&self) -> Option<Suffix> {
        match self {
            Resolution::Resolved { suffix, .. } => Some(*suffix),
            Resolution::Invalid { .. } => None,
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Resolution::Resolved { .. })
    }
}

/// A line read from stdin; `Err` holds the lossy rendering of a line that is not UTF-8.
type StdinLine = Result<String, String>;

pub fn suffix(cmd: SuffixCommand) -> Result<ExitStatus> {
    let cwd = env::current_dir().context("Failed to determine current directory")?;
    let config_result = load_config(&cwd)?;

    if cmd.verbose && !config_result.from_file {
        eprintln!(
            "Note: No {} found, using default configuration",
            CONFIG_FILE_NAME
        );
    }

    let config = config_result.config;
    let format = cmd.format.unwrap_or(config.format);
    let mode = cmd.mode.unwrap_or(config.mode);
    debug!(?format, ?mode, "resolved suffix options");

    let resolutions = if cmd.values.is_empty() {
        read_values(io::stdin().lock())?
            .into_iter()
            .map(|line| match line {
                Ok(value) => resolve_value(&value, mode),
                Err(lossy) => Resolution::Invalid {
                    error: format!("invalid input \"{}\": not valid UTF-8", lossy),
                    input: lossy,
                },
            })
            .collect()
    } else {
        resolve_values(&cmd.values, mode)
    };
    let invalid_count = resolutions.iter().filter(|r| !r.is_valid()).count();

    report::print_resolutions(&resolutions, format)?;
    if cmd.verbose {
        report::print_summary(resolutions.len() - invalid_count, invalid_count);
    }

    if invalid_count > 0 {
        Ok(ExitStatus::Failure)
    } else {
        Ok(ExitStatus::Success)
    }
}

/// Resolve every value through the entry point selected by `mode`.
///
/// Invalid values produce a [`Resolution::Invalid`] carrying the error message; they
/// never stop the remaining values from being resolved.
pub fn resolve_values(values: &[String], mode: InputMode) -> Vec<Resolution> {
    values
        .iter()
        .map(|value| resolve_value(value, mode))
        .collect()
}

fn resolve_value(value: &str, mode: InputMode) -> Resolution {
    let input = match mode {
        InputMode::Digits => Ok(OrdinalInput::Digits(value)),
        InputMode::Integer => value
            .parse::<i64>()
            .map(OrdinalInput::Integer)
            .map_err(|e| format!("invalid integer \"{}\": {}", value, e)),
    };

    match input.and_then(|input| input.suffix().map_err(|e| e.to_string())) {
        Ok(suffix) => Resolution::Resolved {
            input: value.to_string(),
            suffix,
        },
        Err(error) => {
            debug!(input = value, %error, "rejected value");
            Resolution::Invalid {
                input: value.to_string(),
                error,
            }
        }
    }
}

/// Read one value per line, trimming whitespace and skipping blank lines.
///
/// Lines that are not valid UTF-8 are kept as `Err` so the caller can report them
/// alongside the other values.
fn read_values<R: BufRead>(reader: R) -> Result<Vec<StdinLine>> {
    let mut values = Vec::new();
    for line in reader.split(b'\n') {
        let bytes = line.context("Failed to read values from stdin")?;
        match String::from_utf8(bytes) {
            Ok(text) => {
                let trimmed = text.trim();
                if !trimmed.is_empty() {
                    values.push(Ok(trimmed.to_string()));
                }
            }
            Err(e) => {
                let lossy = String::from_utf8_lossy(e.as_bytes()).trim().to_string();
                values.push(Err(lossy));
            }
        }
    }
    Ok(values)
}
