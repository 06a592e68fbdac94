//! Error types for input-boundary parsing.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from parsing birth date/time strings.
///
/// The engine itself is total; these only arise at the string boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TimeError {
    /// Date string is malformed or out of calendar range.
    InvalidDate(&'static str),
    /// Time string is malformed or out of clock range.
    InvalidTime(&'static str),
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDate(msg) => write!(f, "invalid date: {msg}"),
            Self::InvalidTime(msg) => write!(f, "invalid time: {msg}"),
        }
    }
}

impl Error for TimeError {}
