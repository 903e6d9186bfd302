//! Error types for the dialrange engine

use thiserror::Error;

/// Main error type for range operations
#[derive(Error, Debug)]
pub enum RangeError {
    /// An endpoint was the empty string
    #[error("Empty digit string")]
    EmptyInput,

    /// An endpoint contained something other than ASCII digits
    #[error("Not a digit string: {input:?}")]
    NotDigits { input: String },

    /// Endpoint order flips again once insignificant zeros are stripped
    #[error("Endpoints {start:?} and {end:?} reorder after zero stripping")]
    InconsistentOrder { start: String, end: String },

    /// An endpoint is too long for the integer-domain overlap path
    #[error("Digit string has {len} digits, overlap resolution supports at most {max}")]
    TooManyDigits { len: usize, max: usize },

    /// Declared digit count is zero or exceeds an endpoint's digit length
    #[error("Digit count {digit_count} is invalid for an endpoint with {endpoint_len} digits")]
    InvalidDigitCount {
        digit_count: usize,
        endpoint_len: usize,
    },

    /// More input ranges than the resolver accepts in one run
    #[error("Too many input ranges: {count} (maximum {max})")]
    TooManyRanges { count: usize, max: usize },

    /// An integer reached the decoder without the pad prefix
    #[error("Value {value} does not carry the pad prefix")]
    UnpaddedValue { value: i64 },

    /// Overlap resolution did not reach a fixed point within the pass budget
    #[error("Overlap resolution did not settle within {passes} passes")]
    PassLimitExceeded { passes: usize },
}

/// Result type alias for range operations
pub type Result<T> = std::result::Result<T, RangeError>;
