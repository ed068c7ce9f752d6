//! Ordinal - English ordinal suffixes for integers and digit strings
//!
//! Resolves the suffix ("st", "nd", "rd", "th") that turns a cardinal number
//! into its English ordinal form. Only the suffix is produced; callers format
//! the number themselves.
//!
//! ```
//! use ordinal::{Suffix, suffix_of, suffix_of_digits};
//!
//! assert_eq!(suffix_of(22), Suffix::Nd);
//! assert_eq!(suffix_of_digits("111").unwrap().as_str(), "th");
//! ```
//!
//! ## Module Structure
//!
//! - `suffix`: The resolver (integer, digit-string and tagged entry points)
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `logging`: Diagnostic tracing setup

pub mod cli;
pub mod config;
pub mod logging;
pub mod suffix;

pub use suffix::{
    InvalidReason, Ordinal, OrdinalInput, Suffix, SuffixError, suffix_of, suffix_of_digits,
    suffix_of_unsigned,
};
