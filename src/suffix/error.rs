use thiserror::Error;

/// Why a digit string was rejected.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidReason {
    #[error("empty string")]
    Empty,
    /// `index` is the byte offset of the first offending character.
    #[error("unexpected {found:?} at position {index}")]
    NonDigit { index: usize, found: char },
}

/// Error returned when text cannot be resolved to an ordinal suffix.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SuffixError {
    #[error("invalid input{}: {reason}", quoted(.input))]
    InvalidInput {
        input: String,
        reason: InvalidReason,
    },
}

impl SuffixError {
    pub(crate) fn invalid(input: &str, reason: InvalidReason) -> Self {
        SuffixError::InvalidInput {
            input: input.to_string(),
            reason,
        }
    }

    pub fn input(&self) -> &str {
        match self {
            SuffixError::InvalidInput { input, .. } => input,
        }
    }

    pub fn reason(&self) -> InvalidReason {
        match self {
            SuffixError::InvalidInput { reason, .. } => *reason,
        }
    }
}

fn quoted(input: &str) -> String {
    if input.is_empty() {
        String::new()
    } else {
        format!(" \"{}\"", input)
    }
}
