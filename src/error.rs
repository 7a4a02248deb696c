//! Error type shared by the parsing, validation and tool modules.
//!
//! The length calculator itself never fails: every condition below is detected
//! before it runs.

use std::io;
use thiserror::Error;

/// The error type of the crate.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error from the underlying reader or writer.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The declared number of symbols is not positive or exceeds the limit.
    #[error("n should be positive and at most {limit} (got {count})")]
    InvalidCount {
        /// The declared count.
        count: i64,
        /// The configured maximum.
        limit: usize,
    },

    /// Storage for the declared number of symbols could not be reserved.
    #[error("unable to allocate memory for {count} symbols")]
    AllocationFailure {
        /// The declared count.
        count: usize,
    },

    /// A frequency is negative or smaller than the one preceding it.
    #[error("input frequencies must be non-negative and non-decreasing (f_{index} = {value}, previous = {previous})")]
    OrderingViolation {
        /// Position of the offending frequency.
        index: usize,
        /// The offending frequency.
        value: i64,
        /// The preceding frequency (0 for the first position).
        previous: i64,
    },

    /// The frequencies add up to zero.
    #[error("sum of frequencies must be positive")]
    ZeroTotal,

    /// The frequencies add up to more than the working type can hold.
    #[error("sum of frequencies overflows at f_{index}")]
    TotalOverflow {
        /// Position at which the running total overflowed.
        index: usize,
    },

    /// A token of the input stream is not an integer.
    #[error("malformed input at line {line}: {token:?}")]
    Malformed {
        /// One-based line number.
        line: usize,
        /// The offending token (empty when the token is missing).
        token: String,
    },

    /// A configuration value could not be parsed.
    #[error("invalid value {value:?} for configuration key {key}")]
    Config {
        /// The configuration key.
        key: String,
        /// The raw value.
        value: String,
    },

    /// A page cookie in a crawl log was not followed by a URL line.
    #[error("Stopping at page {page}--no URL found (found {found} instead).")]
    MissingUrl {
        /// Index of the last page emitted.
        page: i64,
        /// The line found in place of the URL.
        found: String,
    },
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;
