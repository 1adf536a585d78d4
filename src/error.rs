//! Error types shared by every metric.

use std::fmt;

use thiserror::Error;

/// Which series an error refers to. Used only to label messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesKind {
    /// A price series.
    Price,
    /// A return series.
    Return,
}

impl fmt::Display for SeriesKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeriesKind::Price => f.write_str("Price"),
            SeriesKind::Return => f.write_str("Return"),
        }
    }
}

/// Coarse classification of a [`MetricsError`].
///
/// `Type` means the input had the wrong shape (a token that is not a number,
/// a window that is not an integer). `Value` means the shape was right but the
/// content is unusable (empty, non-finite, out of range, zero divisor).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Wrong argument shape or element type.
    Type,
    /// Right shape, semantically invalid.
    Value,
}

/// Errors raised by validation and metric computation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MetricsError {
    /// The series had no elements.
    #[error("{kind} list cannot be empty")]
    EmptySeries {
        /// Which series.
        kind: SeriesKind,
    },

    /// A textual element could not be read as a number.
    #[error("{kind} at index {index} is not numeric: {raw}")]
    NotNumeric {
        /// Which series.
        kind: SeriesKind,
        /// Position of the offending element.
        index: usize,
        /// The raw token.
        raw: String,
    },

    /// An element was NaN or infinite.
    #[error("{kind} at index {index} is invalid: {value}")]
    NonFinite {
        /// Which series.
        kind: SeriesKind,
        /// Position of the offending element.
        index: usize,
        /// The offending value.
        value: f64,
    },

    /// The window size token was not an integer.
    #[error("window size must be an integer: {0}")]
    WindowNotInteger(String),

    /// The window size was zero or negative.
    #[error("window size must be positive, got {0}")]
    WindowNotPositive(i64),

    /// The window was wider than the series.
    #[error("window size cannot be larger than data length: {window} > {len}")]
    WindowTooLarge {
        /// Requested window.
        window: i64,
        /// Series length.
        len: usize,
    },

    /// A return was requested over a zero previous price.
    #[error("cannot calculate return when previous price is zero (index {index})")]
    ZeroPreviousPrice {
        /// Index of the zero price.
        index: usize,
    },

    /// The risk-free rate token was not a number.
    #[error("risk-free rate must be numeric: {0}")]
    RateNotNumeric(String),

    /// The risk-free rate was NaN or infinite.
    #[error("risk-free rate is invalid: {0}")]
    RateNonFinite(f64),
}

impl MetricsError {
    /// Classifies the error as a type or value failure.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            MetricsError::NotNumeric { .. }
            | MetricsError::WindowNotInteger(_)
            | MetricsError::RateNotNumeric(_) => ErrorKind::Type,
            MetricsError::EmptySeries { .. }
            | MetricsError::NonFinite { .. }
            | MetricsError::WindowNotPositive(_)
            | MetricsError::WindowTooLarge { .. }
            | MetricsError::ZeroPreviousPrice { .. }
            | MetricsError::RateNonFinite(_) => ErrorKind::Value,
        }
    }

    /// Index of the offending element, where one applies.
    #[must_use]
    pub fn index(&self) -> Option<usize> {
        match self {
            MetricsError::NotNumeric { index, .. }
            | MetricsError::NonFinite { index, .. }
            | MetricsError::ZeroPreviousPrice { index } => Some(*index),
            _ => None,
        }
    }
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, MetricsError>;
