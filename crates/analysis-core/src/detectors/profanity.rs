//! Profane-language detection partitioned by speaker role

use crate::types::{ProfanityFinding, ProfanityReport, Speaker, Utterance};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

// Case-insensitive whole-word lexicon. One pattern for the whole process.
static PROFANITY_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(fuck|shit|damn|ass|bitch|crap|hell|bastard|dick)\b").unwrap()
});

/// Get the compiled profanity pattern
///
/// Read-only accessor for tests and external inspection; the pattern itself
/// is a process-wide constant.
pub fn profanity_pattern() -> &'static Regex {
    &PROFANITY_REGEX
}

/// Scan a transcript for profane language, partitioned by speaker role
///
/// Each utterance is tested against the whole-word lexicon pattern; only the
/// first match per utterance is recorded, even when an utterance contains
/// several profane words. Findings keep the position of the utterance in the
/// input sequence and are ordered by ascending index within each list.
pub fn detect_profanity(transcript: &[Utterance]) -> ProfanityReport {
    let mut report = ProfanityReport::default();

    for (index, utterance) in transcript.iter().enumerate() {
        let Some(matched) = PROFANITY_REGEX.find(&utterance.text) else {
            continue;
        };

        let finding = ProfanityFinding {
            segment_index: index,
            text: utterance.text.clone(),
            profane_words: matched.as_str().to_string(),
            time: utterance.time_range(),
        };

        match utterance.speaker {
            Speaker::Agent => report.agent_profanity.push(finding),
            Speaker::Borrower => report.borrower_profanity.push(finding),
        }
    }

    debug!(
        agent = report.agent_profanity.len(),
        borrower = report.borrower_profanity.len(),
        "profanity scan complete"
    );

    report
}
