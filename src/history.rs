//! Mock data for the history and trends view
//!
//! The history page is presentational: stat tiles, the 24h trend bars,
//! and the event log are fixed fixtures, not derived from the live
//! metrics store.

use serde::Serialize;

/// Bar heights for the 24h activity trend, midnight to midnight
const TREND_BAR_HEIGHTS: [u32; 12] = [40, 70, 45, 90, 65, 30, 85, 50, 60, 95, 40, 55];

const HEALTH_SUGGESTION: &str =
    "Increased heart rate detected in last 2 hours. Ensure water is available.";

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryStat {
    pub label: String,
    pub value: String,
    pub unit: String,
    pub color: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EventSeverity {
    Critical,
    Warning,
    Stable,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventLogEntry {
    pub time: String,
    pub event: String,
    pub status: EventSeverity,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryOverview {
    pub stats: Vec<HistoryStat>,
    pub trend: Vec<u32>,
    pub event_log: Vec<EventLogEntry>,
    pub suggestion: String,
}

fn stat(label: &str, value: &str, unit: &str, color: &str) -> HistoryStat {
    HistoryStat {
        label: label.to_string(),
        value: value.to_string(),
        unit: unit.to_string(),
        color: color.to_string(),
    }
}

fn entry(time: &str, event: &str, status: EventSeverity) -> EventLogEntry {
    EventLogEntry {
        time: time.to_string(),
        event: event.to_string(),
        status,
    }
}

/// Build the full history view payload
pub fn history_overview() -> HistoryOverview {
    HistoryOverview {
        stats: vec![
            stat("Avg Heartbeat", "124", "BPM", "text-red-500"),
            stat("Active Time", "14.5", "HRS", "text-blue-500"),
            stat("Vocalization", "82", "FRQ", "text-purple-500"),
            stat("Meals Today", "3/4", "SERV", "text-yellow-600"),
        ],
        trend: TREND_BAR_HEIGHTS.to_vec(),
        event_log: vec![
            entry("12:45 PM", "High Stress Alert", EventSeverity::Critical),
            entry("10:20 AM", "Normal Rest Cycle", EventSeverity::Stable),
            entry("08:15 AM", "Morning Feeding", EventSeverity::Stable),
            entry("04:30 AM", "Low Activity Detected", EventSeverity::Warning),
            entry("Yesterday", "Veterinary Checkup Sync", EventSeverity::Stable),
        ],
        suggestion: HEALTH_SUGGESTION.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overview_has_expected_shape() {
        let overview = history_overview();
        assert_eq!(overview.stats.len(), 4);
        assert_eq!(overview.trend.len(), 12);
        assert_eq!(overview.event_log.len(), 5);
        assert!(!overview.suggestion.is_empty());
    }

    #[test]
    fn trend_bars_are_percentages() {
        assert!(history_overview().trend.iter().all(|h| *h <= 100));
    }
}
