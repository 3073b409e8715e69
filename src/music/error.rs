// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Error types for interval and scale operations.

use thiserror::Error;

/// Result alias used throughout the music module
pub type Result<T> = std::result::Result<T, TheoryError>;

/// Errors raised by interval parsing and scale composition
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TheoryError {
    /// Malformed or musically illegal interval specification
    #[error("invalid interval specification '{spec}': {reason}")]
    InvalidIntervalSpec { spec: String, reason: String },

    /// Caller misuse: bad mode number, modulus, or mismatched lengths
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// No addition candidate carries the requested scale degree
    #[error("cannot spell step {index} as degree {degree} (candidates: {candidates})")]
    UnspellableScale {
        index: usize,
        degree: i32,
        candidates: String,
    },

    /// The prototype has no single-quality name for this many semitones
    #[error("no diatonic interval spans {semitones} semitones")]
    Unrepresentable { semitones: i32 },
}

impl TheoryError {
    pub(crate) fn spec(spec: &str, reason: impl Into<String>) -> Self {
        TheoryError::InvalidIntervalSpec {
            spec: spec.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn argument(msg: impl Into<String>) -> Self {
        TheoryError::InvalidArgument(msg.into())
    }
}
