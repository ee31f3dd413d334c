//! Lexical compliance detectors
//!
//! Both detectors are pure functions over an immutable utterance slice,
//! driven by process-wide compiled patterns. Neither feeds the other.

pub mod privacy;
pub mod profanity;

pub use privacy::{
    detect_privacy_violations, sensitive_info_pattern, verification_pattern,
};
pub use profanity::{detect_profanity, profanity_pattern};
