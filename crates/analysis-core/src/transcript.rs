//! Transcript loading and validation
//!
//! The external transcript format is a JSON array of utterance objects with
//! keys `speaker`, `text`, `stime`, `etime`. Parsing and validation both
//! fail fast: a transcript with any malformed utterance is rejected whole
//! and no partial analysis is ever produced.

use crate::error::{AnalysisError, Result};
use crate::types::Utterance;

/// Parse a transcript from its JSON text form
///
/// # Errors
///
/// Returns [`AnalysisError::InvalidInput`] when the text is not a valid
/// utterance array, or [`AnalysisError::InvalidUtterance`] when an utterance
/// carries unusable timestamps.
pub fn parse_transcript(json: &str) -> Result<Vec<Utterance>> {
    let transcript: Vec<Utterance> = serde_json::from_str(json)?;
    validate_transcript(&transcript)?;
    Ok(transcript)
}

/// Validate every utterance of an already-parsed transcript
///
/// Timestamps must be finite, non-negative, and ordered (`stime <= etime`).
/// The whole transcript is rejected on the first malformed utterance.
pub fn validate_transcript(transcript: &[Utterance]) -> Result<()> {
    for (index, utterance) in transcript.iter().enumerate() {
        if !utterance.stime.is_finite() || !utterance.etime.is_finite() {
            return Err(AnalysisError::invalid_utterance(
                index,
                "timestamps must be finite numbers",
            ));
        }
        if utterance.stime < 0.0 || utterance.etime < 0.0 {
            return Err(AnalysisError::invalid_utterance(
                index,
                format!(
                    "timestamps must be non-negative (stime {}, etime {})",
                    utterance.stime, utterance.etime
                ),
            ));
        }
        if utterance.stime > utterance.etime {
            return Err(AnalysisError::invalid_utterance(
                index,
                format!(
                    "stime {} is after etime {}",
                    utterance.stime, utterance.etime
                ),
            ));
        }
    }
    Ok(())
}
