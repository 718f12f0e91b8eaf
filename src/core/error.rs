//! Centralised error types used across the crate.

use std::io;

use thiserror::Error;

/// Precise configuration faults.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("plot height must be at least one row")]
    ZeroRows,
    #[error("lower bound {low} must not exceed upper bound {high}")]
    InvalidRange { low: f64, high: f64 },
}

/// Rejected colour specifications.
#[derive(Debug, Error)]
pub enum ColorError {
    #[error("invalid hex colour digit")]
    InvalidHexDigit,
    #[error("hex colour must be exactly 6 digits")]
    InvalidHexLength,
    #[error("unknown colour name `{0}`")]
    UnknownName(String),
}

/// Top-level error type bubbled up by public APIs.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Color(#[from] ColorError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("cannot spread {samples} samples over {columns} columns (upsampling is not supported)")]
    TooManyColumns { columns: usize, samples: usize },
    #[error("data set is empty")]
    EmptyData,
}

impl GraphError {
    /// True for every fault caused by the request itself rather than the
    /// environment: bad config, too many columns, or no samples at all.
    #[must_use]
    pub fn is_invalid_configuration(&self) -> bool {
        matches!(
            self,
            Self::Config(_) | Self::TooManyColumns { .. } | Self::EmptyData
        )
    }
}
