//! Silence detection via event-sweep timeline reconstruction
//!
//! The transcript is flattened into start/end events (two per utterance),
//! swept in time order while tracking how many utterances are active. Gaps
//! with zero active speakers longer than [`SILENCE_GAP_MIN_SECS`] are
//! recorded, including a trailing gap between the last speech and call end.

use super::{call_bounds, percentage_of, round2, sorted_by_start};
use crate::types::{SilenceInstance, SilenceMetrics, Utterance};
use std::cmp::Ordering;
use tracing::debug;

/// Minimum gap length recorded as silence, in seconds (strictly greater
/// than)
pub const SILENCE_GAP_MIN_SECS: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq)]
enum EventKind {
    Start,
    End,
}

/// Compute silence metrics for a transcript
pub fn analyze_silence(transcript: &[Utterance]) -> SilenceMetrics {
    if transcript.is_empty() {
        return SilenceMetrics::default();
    }

    let sorted = sorted_by_start(transcript);
    let (call_start, call_end) = call_bounds(&sorted);
    let total_call_duration = call_end - call_start;

    // One start and one end event per utterance, built in sorted-utterance
    // order. The sort below is stable, so events at equal timestamps keep
    // construction order; this decides whether a zero-length gap can open
    // when one utterance ends exactly as another starts.
    let mut events: Vec<(f64, EventKind)> = Vec::with_capacity(sorted.len() * 2);
    for utterance in &sorted {
        events.push((utterance.stime, EventKind::Start));
        events.push((utterance.etime, EventKind::End));
    }
    events.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));

    let mut active_speech_count: usize = 0;
    let mut silence_cursor = call_start;
    let mut instances = Vec::new();
    let mut total_silence = 0.0;

    for (time, kind) in events {
        match kind {
            EventKind::Start => {
                if active_speech_count == 0 && time > silence_cursor {
                    record_gap(silence_cursor, time, &mut instances, &mut total_silence);
                }
                active_speech_count += 1;
            }
            EventKind::End => {
                active_speech_count -= 1;
                if active_speech_count == 0 {
                    silence_cursor = time;
                }
            }
        }
    }

    // Trailing silence between the last speech and the end of the call.
    if active_speech_count == 0 && call_end > silence_cursor {
        record_gap(silence_cursor, call_end, &mut instances, &mut total_silence);
    }

    debug!(
        instances = instances.len(),
        seconds = total_silence,
        "silence scan complete"
    );

    SilenceMetrics {
        percentage: percentage_of(total_silence, total_call_duration),
        silence_seconds: round2(total_silence),
        total_call_duration: round2(total_call_duration),
        instances,
    }
}

fn record_gap(start: f64, end: f64, instances: &mut Vec<SilenceInstance>, total: &mut f64) {
    let duration = end - start;
    if duration > SILENCE_GAP_MIN_SECS {
        instances.push(SilenceInstance {
            start,
            end,
            duration,
        });
        *total += duration;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Speaker;

    fn utterance(stime: f64, etime: f64) -> Utterance {
        Utterance::new(Speaker::Agent, "...", stime, etime)
    }

    #[test]
    fn test_empty_transcript() {
        let metrics = analyze_silence(&[]);
        assert_eq!(metrics, SilenceMetrics::default());
    }

    #[test]
    fn test_single_gap() {
        let transcript = vec![utterance(0.0, 2.0), utterance(4.0, 6.0)];
        let metrics = analyze_silence(&transcript);

        assert_eq!(metrics.instances.len(), 1);
        let gap = &metrics.instances[0];
        assert_eq!(gap.start, 2.0);
        assert_eq!(gap.end, 4.0);
        assert_eq!(gap.duration, 2.0);

        assert_eq!(metrics.total_call_duration, 6.0);
        assert_eq!(metrics.silence_seconds, 2.0);
        assert_eq!(metrics.percentage, 33.33);
    }

    #[test]
    fn test_half_second_gap_not_recorded() {
        // Threshold is strict: exactly 0.5s is not silence.
        let transcript = vec![utterance(0.0, 2.0), utterance(2.5, 4.0)];
        let metrics = analyze_silence(&transcript);
        assert!(metrics.instances.is_empty());
        assert_eq!(metrics.silence_seconds, 0.0);
        assert_eq!(metrics.percentage, 0.0);
    }

    #[test]
    fn test_gap_just_over_threshold_recorded() {
        let transcript = vec![utterance(0.0, 2.0), utterance(2.6, 4.0)];
        let metrics = analyze_silence(&transcript);
        assert_eq!(metrics.instances.len(), 1);
        assert!((metrics.instances[0].duration - 0.6).abs() < 1e-9);
    }

    #[test]
    fn test_back_to_back_utterances_have_no_gap() {
        // End and start coincide at t=2; the end event sorts first, so the
        // cursor moves to 2 before the next start is examined.
        let transcript = vec![utterance(0.0, 2.0), utterance(2.0, 4.0)];
        let metrics = analyze_silence(&transcript);
        assert!(metrics.instances.is_empty());
    }

    #[test]
    fn test_overlapping_speech_masks_gap() {
        // The second utterance bridges over the first one's end; no gap
        // opens until both have ended.
        let transcript = vec![
            utterance(0.0, 3.0),
            utterance(2.0, 5.0),
            utterance(7.0, 8.0),
        ];
        let metrics = analyze_silence(&transcript);
        assert_eq!(metrics.instances.len(), 1);
        assert_eq!(metrics.instances[0].start, 5.0);
        assert_eq!(metrics.instances[0].end, 7.0);
    }

    #[test]
    fn test_nested_utterance() {
        // An utterance fully contained in another must not end the active
        // interval early.
        let transcript = vec![
            utterance(0.0, 6.0),
            utterance(1.0, 2.0),
            utterance(8.0, 9.0),
        ];
        let metrics = analyze_silence(&transcript);
        assert_eq!(metrics.instances.len(), 1);
        assert_eq!(metrics.instances[0].start, 6.0);
        assert_eq!(metrics.instances[0].end, 8.0);
    }

    #[test]
    fn test_gap_before_zero_duration_final_utterance() {
        let transcript = vec![utterance(0.0, 2.0), utterance(6.0, 6.0)];
        let metrics = analyze_silence(&transcript);
        assert_eq!(metrics.instances.len(), 1);
        assert_eq!(metrics.instances[0].start, 2.0);
        assert_eq!(metrics.instances[0].end, 6.0);
        assert_eq!(metrics.instances[0].duration, 4.0);
        assert_eq!(metrics.percentage, 66.67);
    }

    #[test]
    fn test_zero_duration_call() {
        let transcript = vec![utterance(3.0, 3.0)];
        let metrics = analyze_silence(&transcript);
        assert_eq!(metrics.total_call_duration, 0.0);
        assert_eq!(metrics.percentage, 0.0);
        assert!(metrics.instances.is_empty());
    }

    #[test]
    fn test_unsorted_input() {
        let transcript = vec![utterance(4.0, 6.0), utterance(0.0, 2.0)];
        let metrics = analyze_silence(&transcript);
        assert_eq!(metrics.instances.len(), 1);
        assert_eq!(metrics.instances[0].start, 2.0);
        assert_eq!(transcript[0].stime, 4.0); // input untouched
    }
}
