//! Core data model for transcript analysis
//!
//! This module defines the input shape consumed by the analysis engine
//! (speaker-labeled, timestamped utterances) and the finding/metric records
//! assembled into one [`AnalysisResult`] per call.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Speaker role for one side of the call
///
/// The role set is closed: the agent under compliance review, and the
/// other party on the line. Any speaker label other than `"Agent"`
/// maps to [`Speaker::Borrower`], making the partition total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Speaker {
    /// The call-center agent
    Agent,
    /// The non-agent party (borrower, customer, ...)
    Borrower,
}

impl Speaker {
    /// Map a raw speaker label onto the closed role set
    ///
    /// Only the exact label `"Agent"` is recognized as the agent; every
    /// other label is the non-agent party.
    pub fn from_label(label: &str) -> Self {
        if label == "Agent" {
            Self::Agent
        } else {
            Self::Borrower
        }
    }

    /// Get the canonical role name
    pub fn name(self) -> &'static str {
        match self {
            Self::Agent => "Agent",
            Self::Borrower => "Borrower",
        }
    }
}

impl fmt::Display for Speaker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Speaker {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Speaker {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        Ok(Self::from_label(&label))
    }
}

/// One timestamped speech turn by one speaker
///
/// Times are in seconds from an arbitrary call-local origin, with
/// `stime <= etime`. Utterances are never mutated by the engine; all
/// sorting happens on copies, so repeated analysis of the same transcript
/// is idempotent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Utterance {
    /// Speaker role
    pub speaker: Speaker,
    /// Transcribed text of the turn
    pub text: String,
    /// Start time in seconds
    pub stime: f64,
    /// End time in seconds
    pub etime: f64,
}

impl Utterance {
    /// Create a new utterance
    pub fn new(speaker: Speaker, text: impl Into<String>, stime: f64, etime: f64) -> Self {
        Self {
            speaker,
            text: text.into(),
            stime,
            etime,
        }
    }

    /// Duration of the turn in seconds
    pub fn duration(&self) -> f64 {
        self.etime - self.stime
    }

    /// Human-readable time range, as carried on finding records
    pub fn time_range(&self) -> String {
        format!("{} - {}", self.stime, self.etime)
    }
}

/// One profane-language detection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfanityFinding {
    /// Position of the utterance in the input sequence
    pub segment_index: usize,
    /// Full utterance text
    pub text: String,
    /// The matched profane word (first match only)
    pub profane_words: String,
    /// Time range of the utterance, `"{stime} - {etime}"`
    pub time: String,
}

/// One sensitive-information disclosure detection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrivacyFinding {
    /// Position of the utterance in the input sequence
    pub segment_index: usize,
    /// Full utterance text
    pub text: String,
    /// The matched sensitive substring
    pub sensitive_info: String,
    /// Time range of the utterance, `"{stime} - {etime}"`
    pub time: String,
}

/// Profanity findings partitioned by speaker role
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfanityReport {
    /// Findings attributed to the agent
    #[serde(default)]
    pub agent_profanity: Vec<ProfanityFinding>,
    /// Findings attributed to the other party
    #[serde(default)]
    pub borrower_profanity: Vec<ProfanityFinding>,
}

/// One interval during which two utterances overlapped
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OvertalkInstance {
    /// The two overlapping speakers, in chronological pair order
    pub speakers: [Speaker; 2],
    /// Overlap duration in seconds
    pub duration: f64,
    /// Overlap start in seconds
    pub start: f64,
    /// Overlap end in seconds
    pub end: f64,
    /// The two overlapping utterance texts, speaker-prefixed
    pub text: [String; 2],
}

/// One contiguous interval with zero active speakers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SilenceInstance {
    /// Gap start in seconds
    pub start: f64,
    /// Gap end in seconds
    pub end: f64,
    /// Gap duration in seconds
    pub duration: f64,
}

/// Aggregate overtalk metrics for one call
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OvertalkMetrics {
    /// Summed overtalk as a percentage of call duration, rounded to 2
    /// decimals. Pairwise accounting means this is not bounded by 100.
    #[serde(default)]
    pub percentage: f64,
    /// Summed overtalk in seconds, rounded to 2 decimals
    #[serde(default)]
    pub overtalk_seconds: f64,
    /// Call duration in seconds, rounded to 2 decimals
    #[serde(default)]
    pub total_call_duration: f64,
    /// Every overlapping utterance pair
    #[serde(default)]
    pub instances: Vec<OvertalkInstance>,
}

/// Aggregate silence metrics for one call
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SilenceMetrics {
    /// Summed silence as a percentage of call duration, rounded to 2 decimals
    #[serde(default)]
    pub percentage: f64,
    /// Summed silence in seconds, rounded to 2 decimals
    #[serde(default)]
    pub silence_seconds: f64,
    /// Call duration in seconds, rounded to 2 decimals
    #[serde(default)]
    pub total_call_duration: f64,
    /// Every recorded silence gap
    #[serde(default)]
    pub instances: Vec<SilenceInstance>,
}

/// Timing-based call-quality metrics
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QualityMetrics {
    /// Overtalk metrics
    #[serde(default)]
    pub overtalk: OvertalkMetrics,
    /// Silence metrics
    #[serde(default)]
    pub silence: SilenceMetrics,
}

/// Complete analysis report for one call
///
/// Created once per call by [`analyze_call`](crate::analyze_call) and owned
/// solely by the caller after return. The serde shape matches the external
/// report schema exactly (`profanityDetection`, `privacyViolations`,
/// `qualityMetrics`). Every field defaults when absent, so a report produced
/// by an alternate analyzer with missing sections deserializes to
/// empty/zeroed structures and both origins are interchangeable to
/// consumers.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// Profanity findings by speaker role
    #[serde(default)]
    pub profanity_detection: ProfanityReport,
    /// Sensitive-information disclosures without prior verification
    #[serde(default)]
    pub privacy_violations: Vec<PrivacyFinding>,
    /// Overtalk and silence metrics
    #[serde(default)]
    pub quality_metrics: QualityMetrics,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speaker_from_label() {
        assert_eq!(Speaker::from_label("Agent"), Speaker::Agent);
        assert_eq!(Speaker::from_label("Borrower"), Speaker::Borrower);
        assert_eq!(Speaker::from_label("Customer"), Speaker::Borrower);
        // Label matching is exact, not case-insensitive
        assert_eq!(Speaker::from_label("agent"), Speaker::Borrower);
    }

    #[test]
    fn test_speaker_serde() {
        let agent: Speaker = serde_json::from_str("\"Agent\"").unwrap();
        assert_eq!(agent, Speaker::Agent);
        let other: Speaker = serde_json::from_str("\"Caller 2\"").unwrap();
        assert_eq!(other, Speaker::Borrower);
        assert_eq!(serde_json::to_string(&Speaker::Agent).unwrap(), "\"Agent\"");
    }

    #[test]
    fn test_utterance_time_range() {
        let u = Utterance::new(Speaker::Agent, "hello", 0.0, 2.0);
        assert_eq!(u.time_range(), "0 - 2");

        let u = Utterance::new(Speaker::Borrower, "hi", 1.5, 3.25);
        assert_eq!(u.time_range(), "1.5 - 3.25");
        assert_eq!(u.duration(), 1.75);
    }

    #[test]
    fn test_utterance_deserialize() {
        let u: Utterance = serde_json::from_str(
            r#"{"speaker": "Agent", "text": "hello", "stime": 0.5, "etime": 2}"#,
        )
        .unwrap();
        assert_eq!(u.speaker, Speaker::Agent);
        assert_eq!(u.text, "hello");
        assert_eq!(u.stime, 0.5);
        assert_eq!(u.etime, 2.0);
    }

    #[test]
    fn test_result_default_is_all_zero() {
        let result = AnalysisResult::default();
        assert!(result.profanity_detection.agent_profanity.is_empty());
        assert!(result.profanity_detection.borrower_profanity.is_empty());
        assert!(result.privacy_violations.is_empty());
        assert_eq!(result.quality_metrics.overtalk.percentage, 0.0);
        assert_eq!(result.quality_metrics.silence.total_call_duration, 0.0);
        assert!(result.quality_metrics.silence.instances.is_empty());
    }
}
