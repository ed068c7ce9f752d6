//! English ordinal suffix resolution.
//!
//! Every entry point applies the same rule: numbers whose last two digits fall
//! in 10..=19 take "th", otherwise the last digit decides (1 → "st",
//! 2 → "nd", 3 → "rd", anything else → "th").
//!
//! The rule is available in three shapes:
//!
//! - [`suffix_of`] / [`suffix_of_unsigned`] and the [`Ordinal`] trait work on integers
//! - [`suffix_of_digits`] works on decimal text and validates it
//! - [`OrdinalInput`] is a tagged variant for callers that hold either form

use std::fmt;

use serde::Serialize;

mod error;
mod resolve;


pub use error::{InvalidReason, SuffixError};
pub use resolve::{suffix_of, suffix_of_digits, suffix_of_unsigned};

/// One of the four English ordinal suffixes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Suffix {
    St,
    Nd,
    Rd,
    Th,
}

impl Suffix {
    /// All suffixes, in the order their digits appear (1, 2, 3, other).
    pub const ALL: [Suffix; 4] = [Suffix::St, Suffix::Nd, Suffix::Rd, Suffix::Th];

    pub fn as_str(self) -> &'static str {
        match self {
            Suffix::St => "st",
            Suffix::Nd => "nd",
            Suffix::Rd => "rd",
            Suffix::Th => "th",
        }
    }

    /// Suffix for a number given its tens and ones digits.
    pub(crate) fn from_digits(tens: u8, ones: u8) -> Self {
        if tens == 1 {
            return Suffix::Th;
        }
        match ones {
            1 => Suffix::St,
            2 => Suffix::Nd,
            3 => Suffix::Rd,
            _ => Suffix::Th,
        }
    }
}

impl fmt::Display for Suffix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for Suffix {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// Integer types that have an ordinal suffix.
///
/// Signed values resolve on their magnitude, so `-1` is "st" and `-12` is "th".
///
/// ```
/// use ordinal::{Ordinal, Suffix};
///
/// assert_eq!(21u32.ordinal_suffix(), Suffix::St);
/// assert_eq!(112i64.ordinal_suffix(), Suffix::Th);
/// ```
pub trait Ordinal {
    fn ordinal_suffix(&self) -> Suffix;
}

macro_rules! impl_ordinal_unsigned {
    ($($t:ty),*) => {
        $(
            impl Ordinal for $t {
                fn ordinal_suffix(&self) -> Suffix {
                    let rem = (*self % 100) as u8;
                    Suffix::from_digits(rem / 10, rem % 10)
                }
            }
        )*
    };
}

macro_rules! impl_ordinal_signed {
    ($($t:ty),*) => {
        $(
            impl Ordinal for $t {
                fn ordinal_suffix(&self) -> Suffix {
                    self.unsigned_abs().ordinal_suffix()
                }
            }
        )*
    };
}

impl_ordinal_unsigned!(u8, u16, u32, u64, u128, usize);
impl_ordinal_signed!(i8, i16, i32, i64, i128, isize);

/// A number in either of its accepted forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrdinalInput<'a> {
    Integer(i64),
    Digits(&'a str),
}

impl OrdinalInput<'_> {
    /// Resolve the suffix, validating the text form.
    pub fn suffix(&self) -> Result<Suffix, SuffixError> {
        match *self {
            OrdinalInput::Integer(n) => Ok(suffix_of(n)),
            OrdinalInput::Digits(text) => suffix_of_digits(text),
        }
    }
}

impl From<i64> for OrdinalInput<'_> {
    fn from(n: i64) -> Self {
        OrdinalInput::Integer(n)
    }
}

impl<'a> From<&'a str> for OrdinalInput<'a> {
    fn from(text: &'a str) -> Self {
        OrdinalInput::Digits(text)
    }
}
