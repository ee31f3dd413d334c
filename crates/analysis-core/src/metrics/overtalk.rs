//! Overtalk detection over chronologically sorted utterances
//!
//! The default accounting is an exhaustive pairwise scan: an interval
//! covered by three overlapping utterances yields one instance per pair (up
//! to 3) and the summed seconds are not deduplicated across instances. The
//! reported percentage can therefore legitimately exceed 100 in pathological
//! calls. Callers wanting wall-clock overlap time should use
//! [`analyze_overtalk_merged`] instead.

use super::{call_bounds, percentage_of, round2, sorted_by_start};
use crate::types::{OvertalkInstance, OvertalkMetrics, Utterance};
use tracing::debug;

/// Compute overtalk metrics with pairwise overlap accounting
///
/// Every unordered pair of utterances is checked for overlap
/// (`max(stime) < min(etime)`); each overlapping pair contributes one
/// [`OvertalkInstance`] and its full overlap duration to the total.
pub fn analyze_overtalk(transcript: &[Utterance]) -> OvertalkMetrics {
    let Some((sorted, total_call_duration)) = prepare(transcript) else {
        return OvertalkMetrics::default();
    };

    let mut instances = Vec::new();
    let mut total_overtalk = 0.0;

    for i in 0..sorted.len() {
        for j in (i + 1)..sorted.len() {
            let overlap_start = sorted[i].stime.max(sorted[j].stime);
            let overlap_end = sorted[i].etime.min(sorted[j].etime);
            if overlap_end > overlap_start {
                let duration = overlap_end - overlap_start;
                total_overtalk += duration;

                instances.push(OvertalkInstance {
                    speakers: [sorted[i].speaker, sorted[j].speaker],
                    duration,
                    start: overlap_start,
                    end: overlap_end,
                    text: [
                        format!("{}: {}", sorted[i].speaker, sorted[i].text),
                        format!("{}: {}", sorted[j].speaker, sorted[j].text),
                    ],
                });
            }
        }
    }

    debug!(
        instances = instances.len(),
        seconds = total_overtalk,
        "overtalk scan complete"
    );

    OvertalkMetrics {
        percentage: percentage_of(total_overtalk, total_call_duration),
        overtalk_seconds: round2(total_overtalk),
        total_call_duration: round2(total_call_duration),
        instances,
    }
}

/// Compute overtalk metrics with merged-interval accounting
///
/// Instances are reported exactly as in [`analyze_overtalk`], but the summed
/// seconds and percentage are taken over the union of all overlap intervals,
/// so time covered by several overlapping pairs is counted once and the
/// percentage is bounded by 100.
pub fn analyze_overtalk_merged(transcript: &[Utterance]) -> OvertalkMetrics {
    let mut metrics = analyze_overtalk(transcript);
    if metrics.instances.is_empty() {
        return metrics;
    }

    let mut intervals: Vec<(f64, f64)> = metrics
        .instances
        .iter()
        .map(|i| (i.start, i.end))
        .collect();
    intervals.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));

    let mut merged_total = 0.0;
    let (mut cur_start, mut cur_end) = intervals[0];
    for &(start, end) in &intervals[1..] {
        if start <= cur_end {
            cur_end = cur_end.max(end);
        } else {
            merged_total += cur_end - cur_start;
            cur_start = start;
            cur_end = end;
        }
    }
    merged_total += cur_end - cur_start;

    metrics.overtalk_seconds = round2(merged_total);
    metrics.percentage = percentage_of(merged_total, metrics.total_call_duration);
    metrics
}

fn prepare(transcript: &[Utterance]) -> Option<(Vec<Utterance>, f64)> {
    if transcript.is_empty() {
        return None;
    }
    let sorted = sorted_by_start(transcript);
    let (call_start, call_end) = call_bounds(&sorted);
    Some((sorted, call_end - call_start))
}
