use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DashboardError;

/// Raw telemetry exactly as entered in the data form.
///
/// Values stay strings until classification so a half-typed or
/// malformed entry never fails the store. Empty string means the field
/// has not been entered this session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metrics {
    #[serde(default)]
    pub heartbeat: String,
    #[serde(default)]
    pub sound_freq: String,
    #[serde(default)]
    pub last_feed: String,
}

impl Metrics {
    /// True when nothing has been entered yet. Checked on the raw
    /// strings before trimming, so whitespace-only entry counts as
    /// entered.
    pub fn is_empty(&self) -> bool {
        self.heartbeat.is_empty() && self.sound_freq.is_empty() && self.last_feed.is_empty()
    }
}

/// The three editable telemetry fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricField {
    Heartbeat,
    SoundFreq,
    LastFeed,
}

impl std::fmt::Display for MetricField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MetricField::Heartbeat => write!(f, "heartbeat"),
            MetricField::SoundFreq => write!(f, "sound_freq"),
            MetricField::LastFeed => write!(f, "last_feed"),
        }
    }
}

impl std::str::FromStr for MetricField {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "heartbeat" => Ok(MetricField::Heartbeat),
            "sound_freq" | "soundfreq" => Ok(MetricField::SoundFreq),
            "last_feed" | "lastfeed" => Ok(MetricField::LastFeed),
            _ => Err(DashboardError::UnknownMetricField(s.to_string())),
        }
    }
}

/// Discrete mood classification states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MoodStatus {
    Waiting,
    Invalid,
    AlertDanger,
    Stressed,
    Sick,
    Hungry,
    Happy,
}

impl MoodStatus {
    /// Human-readable status label shown next to the mood indicator
    pub fn label(&self) -> &'static str {
        match self {
            MoodStatus::Waiting => "Waiting for Data",
            MoodStatus::Invalid => "⚠ Invalid Input",
            MoodStatus::AlertDanger => "Alert Danger",
            MoodStatus::Stressed => "Stressed / Danger",
            MoodStatus::Sick => "Sick / Low Energy",
            MoodStatus::Hungry => "Hungry",
            MoodStatus::Happy => "Happy / Calm",
        }
    }

    /// Display token the frontend maps onto the mood indicator.
    /// Opaque to the backend.
    pub fn color_token(&self) -> &'static str {
        match self {
            MoodStatus::Waiting => "bg-gray-200",
            MoodStatus::Invalid => "bg-gray-300",
            MoodStatus::AlertDanger => "bg-red-600 animate-pulse",
            MoodStatus::Stressed => "bg-red-500",
            MoodStatus::Sick => "bg-blue-500",
            MoodStatus::Hungry => "bg-yellow-400",
            MoodStatus::Happy => "bg-green-500",
        }
    }

    /// True for the two states that arm emergency tracking
    pub fn is_danger(&self) -> bool {
        matches!(self, MoodStatus::AlertDanger | MoodStatus::Stressed)
    }
}

/// Derived classification result. Always a pure function of the
/// current metrics — recomputed on every read, never cached.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodResult {
    pub status: MoodStatus,
    pub status_color: String,
    pub label: String,
    pub is_danger: bool,
}

impl From<MoodStatus> for MoodResult {
    fn from(status: MoodStatus) -> Self {
        MoodResult {
            status,
            status_color: status.color_token().to_string(),
            label: status.label().to_string(),
            is_danger: status.is_danger(),
        }
    }
}

/// Navigable pages of the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    #[default]
    Home,
    Data,
    History,
    Map,
    Profile,
}

impl std::fmt::Display for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Page::Home => write!(f, "home"),
            Page::Data => write!(f, "data"),
            Page::History => write!(f, "history"),
            Page::Map => write!(f, "map"),
            Page::Profile => write!(f, "profile"),
        }
    }
}

impl std::str::FromStr for Page {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "home" => Ok(Page::Home),
            "data" => Ok(Page::Data),
            "history" => Ok(Page::History),
            "map" => Ok(Page::Map),
            "profile" => Ok(Page::Profile),
            _ => Err(DashboardError::UnknownPage(s.to_string())),
        }
    }
}

/// Owner and pet details from the profile form. Free text, no
/// validation, session memory only.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerProfile {
    #[serde(default)]
    pub owner_name: String,
    #[serde(default)]
    pub owner_email: String,
    #[serde(default)]
    pub owner_phone: String,
    #[serde(default)]
    pub pet_name: String,
    #[serde(default)]
    pub pet_breed: String,
    #[serde(default)]
    pub pet_age: String,
    #[serde(default)]
    pub chip_id: String,
}

/// The editable profile form fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileField {
    OwnerName,
    OwnerEmail,
    OwnerPhone,
    PetName,
    PetBreed,
    PetAge,
    ChipId,
}

impl std::str::FromStr for ProfileField {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "owner_name" | "ownername" => Ok(ProfileField::OwnerName),
            "owner_email" | "owneremail" => Ok(ProfileField::OwnerEmail),
            "owner_phone" | "ownerphone" => Ok(ProfileField::OwnerPhone),
            "pet_name" | "petname" => Ok(ProfileField::PetName),
            "pet_breed" | "petbreed" => Ok(ProfileField::PetBreed),
            "pet_age" | "petage" => Ok(ProfileField::PetAge),
            "chip_id" | "chipid" => Ok(ProfileField::ChipId),
            _ => Err(DashboardError::UnknownProfileField(s.to_string())),
        }
    }
}

/// One recorded danger episode: a calm-to-danger edge with the metrics
/// snapshot that triggered it
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertRecord {
    pub id: String,
    pub triggered_at: DateTime<Utc>,
    pub status: MoodStatus,
    pub label: String,
    pub metrics: Metrics,
}

/// Outcome of a metric edit: the recomputed mood plus the navigation
/// effect when this edit entered a danger state
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricUpdate {
    pub mood: MoodResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect: Option<Page>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alert: Option<AlertRecord>,
}

/// Aggregate read for initial page render
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    pub metrics: Metrics,
    pub mood: MoodResult,
    pub current_page: Page,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metric_field_parses_camel_and_snake_case() {
        assert_eq!("heartbeat".parse::<MetricField>().unwrap(), MetricField::Heartbeat);
        assert_eq!("soundFreq".parse::<MetricField>().unwrap(), MetricField::SoundFreq);
        assert_eq!("sound_freq".parse::<MetricField>().unwrap(), MetricField::SoundFreq);
        assert_eq!("lastFeed".parse::<MetricField>().unwrap(), MetricField::LastFeed);
    }

    #[test]
    fn unknown_metric_field_is_rejected() {
        let err = "temperature".parse::<MetricField>().unwrap_err();
        assert!(err.to_string().contains("temperature"));
    }

    #[test]
    fn page_round_trips_through_display() {
        for page in [Page::Home, Page::Data, Page::History, Page::Map, Page::Profile] {
            assert_eq!(page.to_string().parse::<Page>().unwrap(), page);
        }
    }

    #[test]
    fn unknown_page_is_rejected() {
        assert!("settings".parse::<Page>().is_err());
    }

    #[test]
    fn default_page_is_home() {
        assert_eq!(Page::default(), Page::Home);
    }

    #[test]
    fn mood_result_wire_format_is_camel_case() {
        let result = MoodResult::from(MoodStatus::AlertDanger);
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["status"], "alert-danger");
        assert_eq!(value["statusColor"], "bg-red-600 animate-pulse");
        assert_eq!(value["label"], "Alert Danger");
        assert_eq!(value["isDanger"], true);
    }

    #[test]
    fn metrics_wire_format_matches_form_field_names() {
        let metrics = Metrics {
            heartbeat: "120".to_string(),
            sound_freq: "800".to_string(),
            last_feed: "4".to_string(),
        };
        let value = serde_json::to_value(&metrics).unwrap();
        assert_eq!(value["heartbeat"], "120");
        assert_eq!(value["soundFreq"], "800");
        assert_eq!(value["lastFeed"], "4");
    }

    #[test]
    fn missing_metrics_fields_deserialize_as_empty() {
        let metrics: Metrics = serde_json::from_str("{}").unwrap();
        assert!(metrics.is_empty());
    }

    #[test]
    fn danger_flag_covers_exactly_the_two_danger_states() {
        assert!(MoodStatus::AlertDanger.is_danger());
        assert!(MoodStatus::Stressed.is_danger());
        for status in [
            MoodStatus::Waiting,
            MoodStatus::Invalid,
            MoodStatus::Sick,
            MoodStatus::Hungry,
            MoodStatus::Happy,
        ] {
            assert!(!status.is_danger());
        }
    }
}
