use tracing::trace;

use super::{InvalidReason, Ordinal, Suffix, SuffixError};

/// Ordinal suffix of a signed integer.
///
/// Negative numbers resolve on their magnitude.
///
/// ```
/// use ordinal::{Suffix, suffix_of};
///
/// assert_eq!(suffix_of(1), Suffix::St);
/// assert_eq!(suffix_of(13), Suffix::Th);
/// assert_eq!(suffix_of(-22), Suffix::Nd);
/// ```
pub fn suffix_of(n: i64) -> Suffix {
    n.ordinal_suffix()
}

/// Ordinal suffix of an unsigned integer.
pub fn suffix_of_unsigned(n: u64) -> Suffix {
    n.ordinal_suffix()
}

/// Ordinal suffix of a number written as plain decimal digits.
///
/// The text must be non-empty and contain only ASCII digits: no sign, no
/// whitespace, no separators. Leading zeros are allowed and the length is
/// unbounded, since only the last two characters are inspected.
///
/// ```
/// use ordinal::{Suffix, suffix_of_digits};
///
/// assert_eq!(suffix_of_digits("102").unwrap(), Suffix::Nd);
/// assert_eq!(suffix_of_digits("1012").unwrap(), Suffix::Th);
/// assert!(suffix_of_digits("").is_err());
/// ```
pub fn suffix_of_digits(text: &str) -> Result<Suffix, SuffixError> {
    validate_digits(text)?;

    let bytes = text.as_bytes();
    let ones = bytes[bytes.len() - 1] - b'0';
    let tens = match bytes.len() {
        1 => 0,
        len => bytes[len - 2] - b'0',
    };

    let suffix = Suffix::from_digits(tens, ones);
    trace!(input = text, %suffix, "resolved digit string");
    Ok(suffix)
}

fn validate_digits(text: &str) -> Result<(), SuffixError> {
    if text.is_empty() {
        return Err(SuffixError::invalid(text, InvalidReason::Empty));
    }

    if let Some((index, found)) = text.char_indices().find(|(_, c)| !c.is_ascii_digit()) {
        return Err(SuffixError::invalid(
            text,
            InvalidReason::NonDigit { index, found },
        ));
    }

    Ok(())
}
