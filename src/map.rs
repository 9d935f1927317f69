//! Mock tracker location for the map view
//!
//! No real geolocation: the tracker reports a fixed position. Only the
//! signal readout and the emergency badge react to the danger flag.

use serde::Serialize;

const TRACKER_LAT: f64 = 23.8103;
const TRACKER_LONG: f64 = 90.4125;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackerStatus {
    pub lat: f64,
    pub long: f64,
    pub signal: String,
    pub emergency_tracking: bool,
}

/// Current tracker readout for the map view
pub fn tracker_status(is_danger: bool) -> TrackerStatus {
    // Signal string matches the original readout: STABLE while in
    // danger (emergency tracking holds the fix), LOW otherwise.
    let signal = if is_danger { "STABLE" } else { "LOW" };
    TrackerStatus {
        lat: TRACKER_LAT,
        long: TRACKER_LONG,
        signal: signal.to_string(),
        emergency_tracking: is_danger,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signal_follows_danger_flag() {
        assert_eq!(tracker_status(true).signal, "STABLE");
        assert_eq!(tracker_status(false).signal, "LOW");
    }

    #[test]
    fn position_is_fixed() {
        let calm = tracker_status(false);
        let danger = tracker_status(true);
        assert_eq!((calm.lat, calm.long), (danger.lat, danger.long));
        assert!(danger.emergency_tracking);
        assert!(!calm.emergency_tracking);
    }
}
