//! # Analysis-Core: Call Transcript Compliance & Quality Engine
//!
//! This library analyzes a speaker-labeled, timestamped call transcript and
//! produces one structured report of compliance and quality signals:
//!
//! - **Profanity**: case-insensitive whole-word lexicon matches, partitioned
//!   by speaker role (agent vs. the other party)
//! - **Privacy violations**: sensitive account information disclosed by the
//!   agent without prior identity verification
//! - **Overtalk**: time during which two or more utterances overlap, found
//!   by exhaustive pairwise interval comparison
//! - **Silence**: gaps with zero active speakers longer than half a second,
//!   found by event-sweep timeline reconstruction
//!
//! All four detectors are pure functions over an immutable utterance slice;
//! [`analyze_call`] composes them into one [`AnalysisResult`]. Input is
//! never mutated and repeated analysis is idempotent.
//!
//! ## Usage
//!
//! ```rust
//! use callaudit_analysis_core::{analyze_call, Speaker, Utterance};
//!
//! let transcript = vec![
//!     Utterance::new(Speaker::Agent, "what the hell", 0.0, 2.0),
//!     Utterance::new(Speaker::Borrower, "excuse me?", 2.5, 4.0),
//! ];
//!
//! let report = analyze_call(&transcript)?;
//! assert_eq!(report.profanity_detection.agent_profanity.len(), 1);
//! # Ok::<(), callaudit_analysis_core::AnalysisError>(())
//! ```
//!
//! ## Faithful-reproduction decisions
//!
//! Two behaviors are preserved from the reference analyzer on purpose and
//! should be read as documented limitations rather than bugs:
//!
//! - The privacy verification gate is **call-level**: a verification phrase
//!   spoken by the agent anywhere in the call suppresses every finding,
//!   including disclosures made before it.
//! - Overtalk seconds are summed **per overlapping pair** without
//!   deduplication, so the overtalk percentage is not bounded by 100.
//!   [`analyze_overtalk_merged`] offers merged-interval accounting under its
//!   own name.

#![deny(missing_docs)]
#![warn(clippy::all)]

pub mod analyzer;
pub mod detectors;
pub mod error;
pub mod metrics;
pub mod transcript;
pub mod types;

// Re-export the public surface
pub use analyzer::analyze_call;
pub use detectors::{
    detect_privacy_violations, detect_profanity, profanity_pattern, sensitive_info_pattern,
    verification_pattern,
};
pub use error::{AnalysisError, Result};
pub use metrics::{analyze_overtalk, analyze_overtalk_merged, analyze_silence, SILENCE_GAP_MIN_SECS};
pub use transcript::{parse_transcript, validate_transcript};
pub use types::{
    AnalysisResult, OvertalkInstance, OvertalkMetrics, PrivacyFinding, ProfanityFinding,
    ProfanityReport, QualityMetrics, SilenceInstance, SilenceMetrics, Speaker, Utterance,
};

/// Version information for the analysis library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the analysis library
///
/// Forces compilation of the process-wide detection patterns so that a
/// malformed pattern fails at startup instead of on the first call, and
/// installs a default tracing subscriber if none is set. Safe to call
/// multiple times.
pub fn init() {
    let _ = tracing_subscriber::fmt::try_init();

    // Pattern compilation failures are fatal here, not per-call.
    let _ = detectors::profanity_pattern();
    let _ = detectors::verification_pattern();
    let _ = detectors::sensitive_info_pattern();

    tracing::debug!("analysis-core v{} initialized", VERSION);
}
