//! Sensitive-information disclosure detection with a verification gate
//!
//! The gate is call-scoped, not temporal: an identity-verification phrase
//! spoken by the agent anywhere in the call suppresses every finding, even
//! for disclosures that happened before it. This reproduces the reference
//! behavior on purpose; see the crate-level documentation.

use crate::types::{PrivacyFinding, Speaker, Utterance};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

// Identity-verification vocabulary
static VERIFICATION_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(date of birth|dob|ssn|social security|address|verify|verification)\b")
        .unwrap()
});

// Sensitive account vocabulary followed by a number
static SENSITIVE_INFO_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(balance|account|owe|payment|due|amount)\b.*?\$?\d+").unwrap()
});

/// Get the compiled identity-verification pattern
pub fn verification_pattern() -> &'static Regex {
    &VERIFICATION_REGEX
}

/// Get the compiled sensitive-information pattern
pub fn sensitive_info_pattern() -> &'static Regex {
    &SENSITIVE_INFO_REGEX
}

/// Scan a transcript for sensitive account disclosures made without
/// identity verification
///
/// Two phases over the same input:
///
/// 1. Find whether any agent utterance matches the verification pattern
///    (short-circuits on the first hit).
/// 2. Only if none did, flag every agent utterance matching the
///    sensitive-information pattern.
///
/// When verification was performed anywhere in the call, no findings are
/// produced at all.
pub fn detect_privacy_violations(transcript: &[Utterance]) -> Vec<PrivacyFinding> {
    let verification_performed = transcript
        .iter()
        .any(|u| u.speaker == Speaker::Agent && VERIFICATION_REGEX.is_match(&u.text));

    if verification_performed {
        debug!("identity verification found; privacy scan suppressed");
        return Vec::new();
    }

    let violations: Vec<PrivacyFinding> = transcript
        .iter()
        .enumerate()
        .filter(|(_, u)| u.speaker == Speaker::Agent)
        .filter_map(|(index, u)| {
            SENSITIVE_INFO_REGEX.find(&u.text).map(|matched| PrivacyFinding {
                segment_index: index,
                text: u.text.clone(),
                sensitive_info: matched.as_str().to_string(),
                time: u.time_range(),
            })
        })
        .collect();

    debug!(count = violations.len(), "privacy scan complete");
    violations
}
