//! Mood classification engine
//!
//! Maps the three raw telemetry entries to a discrete mood. Pure and
//! total: every string input produces a result, with malformed or
//! out-of-range entry folded into the `Invalid` state rather than an
//! error. Rules are evaluated in a fixed order and the first match
//! wins.

use crate::types::{Metrics, MoodResult, MoodStatus};

// Validity bounds per reading. A provided value outside its bound
// reports as invalid input instead of classifying.
const HEARTBEAT_MAX_BPM: f64 = 300.0;
const SOUND_FREQ_MAX_HZ: f64 = 20_000.0;
const LAST_FEED_MAX_HOURS: f64 = 168.0;

// Classification thresholds. Strict comparisons throughout, except
// hunger which triggers at exactly six hours.
const HEARTBEAT_ALERT_BPM: f64 = 160.0;
const HEARTBEAT_STRESS_BPM: f64 = 140.0;
const SOUND_ALERT_HZ: f64 = 1_500.0;
const SOUND_STRESS_HZ: f64 = 1_200.0;
const LOW_HEARTBEAT_BPM: f64 = 60.0;
const LOW_SOUND_HZ: f64 = 300.0;
const HUNGRY_AFTER_HOURS: f64 = 6.0;

/// One telemetry entry after trimming and parsing
#[derive(Debug, Clone, Copy, PartialEq)]
enum Reading {
    /// Nothing entered for this field
    Unset,
    /// Entered but non-numeric, non-finite, negative, or out of bounds
    Invalid,
    Valid(f64),
}

impl Reading {
    fn is_invalid(&self) -> bool {
        matches!(self, Reading::Invalid)
    }

    /// Unset readings evaluate as zero for threshold comparisons
    fn value_or_zero(&self) -> f64 {
        match self {
            Reading::Valid(v) => *v,
            _ => 0.0,
        }
    }
}

fn parse_reading(raw: &str, max: f64) -> Reading {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Reading::Unset;
    }
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 && v <= max => Reading::Valid(v),
        _ => Reading::Invalid,
    }
}

/// Classify the current metrics into a mood.
///
/// Order matters: the no-data and invalid-input checks run before any
/// threshold rule, and invalid input on any one field wins over
/// whatever the other fields would classify as.
pub fn classify(metrics: &Metrics) -> MoodResult {
    if metrics.is_empty() {
        return MoodStatus::Waiting.into();
    }

    let heartbeat = parse_reading(&metrics.heartbeat, HEARTBEAT_MAX_BPM);
    let sound_freq = parse_reading(&metrics.sound_freq, SOUND_FREQ_MAX_HZ);
    let last_feed = parse_reading(&metrics.last_feed, LAST_FEED_MAX_HOURS);

    if heartbeat.is_invalid() || sound_freq.is_invalid() || last_feed.is_invalid() {
        return MoodStatus::Invalid.into();
    }

    let hb = heartbeat.value_or_zero();
    let sf = sound_freq.value_or_zero();
    let lf = last_feed.value_or_zero();

    let status = if hb > HEARTBEAT_ALERT_BPM || sf > SOUND_ALERT_HZ {
        MoodStatus::AlertDanger
    } else if hb > HEARTBEAT_STRESS_BPM || sf > SOUND_STRESS_HZ {
        MoodStatus::Stressed
    } else if hb < LOW_HEARTBEAT_BPM && sf < LOW_SOUND_HZ && hb > 0.0 {
        // The hb > 0 guard means an unset heartbeat (reading as zero)
        // never classifies as sick, even with a quiet sound reading.
        MoodStatus::Sick
    } else if lf >= HUNGRY_AFTER_HOURS {
        MoodStatus::Hungry
    } else {
        MoodStatus::Happy
    };

    status.into()
}
