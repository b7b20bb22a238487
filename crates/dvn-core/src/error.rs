//! # Error Types
//!
//! The navigator's domain logic is total: unanswered questions and unknown
//! ids are handled as ordinary values. Errors only arise where text from a
//! user (HTTP body, CLI flag, answers file) is turned into a domain value.

use thiserror::Error;

/// Top-level error type for input parsing across the navigator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DvnError {
    /// A date string was not a valid `YYYY-MM-DD` calendar date.
    #[error("invalid date {input:?}: expected YYYY-MM-DD")]
    InvalidDate {
        /// The rejected input.
        input: String,
    },

    /// Adding a day offset left chrono's representable range.
    #[error("date {date} plus {days} days is out of range")]
    DateOutOfRange {
        /// The start date.
        date: String,
        /// The offset that overflowed.
        days: i64,
    },

    /// Case type was neither `divorce` nor `dissolution`.
    #[error("unknown case type: {0:?}")]
    UnknownCaseType(String),

    /// Directory category name not recognised.
    #[error("unknown resource category: {0:?}")]
    UnknownCategory(String),

    /// A questionnaire answer could not be interpreted.
    #[error("invalid answer {0:?}: expected yes, no, or unanswered")]
    InvalidAnswer(String),
}
