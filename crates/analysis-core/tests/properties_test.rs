//! Property tests over arbitrary well-formed transcripts

use callaudit_analysis_core::{analyze_call, Speaker, Utterance};
use proptest::prelude::*;

fn arb_speaker() -> impl Strategy<Value = Speaker> {
    prop_oneof![Just(Speaker::Agent), Just(Speaker::Borrower)]
}

fn arb_utterance() -> impl Strategy<Value = Utterance> {
    (arb_speaker(), "[a-z ]{0,40}", 0.0f64..600.0, 0.0f64..60.0).prop_map(
        |(speaker, text, stime, gap)| Utterance::new(speaker, text, stime, stime + gap),
    )
}

fn arb_transcript() -> impl Strategy<Value = Vec<Utterance>> {
    prop::collection::vec(arb_utterance(), 0..24)
}

proptest! {
    #[test]
    fn percentages_are_finite_and_non_negative(transcript in arb_transcript()) {
        let result = analyze_call(&transcript).unwrap();

        let overtalk = &result.quality_metrics.overtalk;
        prop_assert!(overtalk.percentage.is_finite());
        prop_assert!(overtalk.percentage >= 0.0);
        prop_assert!(overtalk.overtalk_seconds >= 0.0);
        prop_assert!(overtalk.total_call_duration >= 0.0);

        let silence = &result.quality_metrics.silence;
        prop_assert!(silence.percentage.is_finite());
        prop_assert!(silence.percentage >= 0.0);
        prop_assert!(silence.silence_seconds >= 0.0);
        // Silence is real wall-clock time, unlike pairwise overtalk.
        prop_assert!(silence.percentage <= 100.0 + 1e-6);
    }

    #[test]
    fn analysis_never_mutates_the_transcript(transcript in arb_transcript()) {
        let before = transcript.clone();
        let first = analyze_call(&transcript).unwrap();
        let second = analyze_call(&transcript).unwrap();
        prop_assert_eq!(&transcript, &before);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn every_silence_gap_exceeds_threshold(transcript in arb_transcript()) {
        let result = analyze_call(&transcript).unwrap();
        for gap in &result.quality_metrics.silence.instances {
            prop_assert!(gap.duration > 0.5);
            prop_assert!(gap.end > gap.start);
        }
    }
}
