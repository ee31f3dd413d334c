//! Analysis orchestration
//!
//! One pure, synchronous composition function: the transcript fans out
//! unchanged to the four detectors and their independent results fan in to
//! one [`AnalysisResult`]. No detector output feeds another, so callers may
//! run the detectors concurrently themselves; sequential execution here is
//! the reference behavior and produces identical results.

use crate::detectors::{detect_privacy_violations, detect_profanity};
use crate::error::Result;
use crate::metrics::{analyze_overtalk, analyze_silence};
use crate::transcript::validate_transcript;
use crate::types::{AnalysisResult, QualityMetrics, Utterance};
use tracing::debug;

/// Analyze a call transcript and assemble the full report
///
/// The input is validated first ([`validate_transcript`]); a transcript with
/// any malformed utterance is rejected whole before any detector runs.
/// Repeated calls on the same transcript yield identical results and never
/// mutate the input.
///
/// # Errors
///
/// Returns [`AnalysisError`](crate::AnalysisError) when validation fails.
pub fn analyze_call(transcript: &[Utterance]) -> Result<AnalysisResult> {
    validate_transcript(transcript)?;

    debug!(utterances = transcript.len(), "analyzing call");

    let profanity_detection = detect_profanity(transcript);
    let privacy_violations = detect_privacy_violations(transcript);
    let overtalk = analyze_overtalk(transcript);
    let silence = analyze_silence(transcript);

    Ok(AnalysisResult {
        profanity_detection,
        privacy_violations,
        quality_metrics: QualityMetrics { overtalk, silence },
    })
}
