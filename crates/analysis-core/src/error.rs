//! Error handling for the analysis engine
//!
//! Analysis is deterministic and retry-less: every error here means the
//! input was rejected before any detector ran. No partial report is ever
//! produced.

use thiserror::Error;

/// Result type alias for analysis operations
pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Error type for analysis operations
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// Input is not a valid transcript (e.g. not parseable as an utterance
    /// sequence)
    #[error("Invalid transcript input: {details}")]
    InvalidInput {
        /// What made the input unusable
        details: String,
    },

    /// A single utterance carries unusable fields
    #[error("Invalid utterance at index {index}: {reason}")]
    InvalidUtterance {
        /// Position of the utterance in the input sequence
        index: usize,
        /// What made the utterance unusable
        reason: String,
    },
}

impl AnalysisError {
    /// Create a new invalid input error
    pub fn invalid_input(details: impl Into<String>) -> Self {
        Self::InvalidInput {
            details: details.into(),
        }
    }

    /// Create a new invalid utterance error
    pub fn invalid_utterance(index: usize, reason: impl Into<String>) -> Self {
        Self::InvalidUtterance {
            index,
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for AnalysisError {
    fn from(error: serde_json::Error) -> Self {
        Self::InvalidInput {
            details: error.to_string(),
        }
    }
}

impl From<std::io::Error> for AnalysisError {
    fn from(error: std::io::Error) -> Self {
        Self::InvalidInput {
            details: error.to_string(),
        }
    }
}
