//! Timing-based call-quality metrics
//!
//! Both analyzers work on a chronologically sorted copy of the transcript;
//! the caller's slice is never reordered. Call duration is derived as
//! `max(etime) - min(stime)` over all utterances.

pub mod overtalk;
pub mod silence;

pub use overtalk::{analyze_overtalk, analyze_overtalk_merged};
pub use silence::{analyze_silence, SILENCE_GAP_MIN_SECS};

use crate::types::Utterance;
use std::cmp::Ordering;

/// Round to 2 decimal places, as carried on aggregate report fields
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Percentage of `part` over `whole`, rounded to 2 decimals
///
/// A call whose utterances span zero time has no meaningful percentage;
/// the guard reports `0` instead of a non-finite value.
pub(crate) fn percentage_of(part: f64, whole: f64) -> f64 {
    if whole > 0.0 {
        round2(part / whole * 100.0)
    } else {
        0.0
    }
}

/// Copy of the transcript sorted ascending by start time (stable, so ties
/// keep their original order)
pub(crate) fn sorted_by_start(transcript: &[Utterance]) -> Vec<Utterance> {
    let mut sorted = transcript.to_vec();
    sorted.sort_by(|a, b| a.stime.partial_cmp(&b.stime).unwrap_or(Ordering::Equal));
    sorted
}

/// Call bounds `(start, end)` over all utterances
pub(crate) fn call_bounds(transcript: &[Utterance]) -> (f64, f64) {
    let start = transcript.iter().map(|u| u.stime).fold(f64::INFINITY, f64::min);
    let end = transcript.iter().map(|u| u.etime).fold(f64::NEG_INFINITY, f64::max);
    (start, end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Speaker;

    #[test]
    fn test_round2() {
        assert_eq!(round2(33.333333), 33.33);
        assert_eq!(round2(66.666666), 66.67);
        assert_eq!(round2(25.0), 25.0);
    }

    #[test]
    fn test_percentage_of_zero_whole() {
        assert_eq!(percentage_of(5.0, 0.0), 0.0);
        assert_eq!(percentage_of(0.0, 0.0), 0.0);
    }

    #[test]
    fn test_sorted_by_start_does_not_touch_input() {
        let transcript = vec![
            Utterance::new(Speaker::Agent, "b", 4.0, 6.0),
            Utterance::new(Speaker::Borrower, "a", 0.0, 2.0),
        ];
        let sorted = sorted_by_start(&transcript);
        assert_eq!(sorted[0].text, "a");
        assert_eq!(transcript[0].text, "b"); // input untouched
    }

    #[test]
    fn test_call_bounds() {
        let transcript = vec![
            Utterance::new(Speaker::Agent, "b", 4.0, 6.0),
            Utterance::new(Speaker::Borrower, "a", 1.0, 9.0),
        ];
        assert_eq!(call_bounds(&transcript), (1.0, 9.0));
    }
}
