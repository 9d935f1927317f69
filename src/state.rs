use std::sync::Mutex;

use chrono::Utc;

use crate::alert::AlertReactor;
use crate::error::DashboardError;
use crate::mood;
use crate::types::{
    AlertRecord, DashboardSnapshot, MetricField, MetricUpdate, Metrics, MoodResult, OwnerProfile,
    Page, ProfileField,
};

/// Maximum number of danger episodes to keep in memory
const MAX_ALERT_HISTORY: usize = 50;

/// Application state managed by Tauri.
///
/// Everything lives in session memory: the metrics store, the profile
/// form, the active page, the reactor's previous-danger flag, and the
/// recorded danger episodes. Nothing is persisted.
pub struct AppState {
    metrics: Mutex<Metrics>,
    profile: Mutex<OwnerProfile>,
    current_page: Mutex<Page>,
    reactor: Mutex<AlertReactor>,
    alert_history: Mutex<Vec<AlertRecord>>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            metrics: Mutex::new(Metrics::default()),
            profile: Mutex::new(OwnerProfile::default()),
            current_page: Mutex::new(Page::default()),
            reactor: Mutex::new(AlertReactor::new()),
            alert_history: Mutex::new(Vec::new()),
        }
    }

    /// Merge one field edit into the metrics store, reclassify, and
    /// run the reactor — a single synchronous step, so the reactor
    /// sees exactly one observation per recomputation.
    ///
    /// On a calm-to-danger edge the active page switches to the map
    /// and the episode is recorded.
    pub fn apply_metric_update(
        &self,
        field: MetricField,
        value: String,
    ) -> Result<MetricUpdate, DashboardError> {
        let mut metrics = self.metrics.lock().map_err(|_| DashboardError::LockPoisoned)?;
        match field {
            MetricField::Heartbeat => metrics.heartbeat = value,
            MetricField::SoundFreq => metrics.sound_freq = value,
            MetricField::LastFeed => metrics.last_feed = value,
        }

        let mood = mood::classify(&metrics);

        let redirect = self
            .reactor
            .lock()
            .map_err(|_| DashboardError::LockPoisoned)?
            .observe(mood.is_danger);

        let alert = match redirect {
            Some(page) => {
                *self.current_page.lock().map_err(|_| DashboardError::LockPoisoned)? = page;
                let record = AlertRecord {
                    id: uuid::Uuid::new_v4().to_string(),
                    triggered_at: Utc::now(),
                    status: mood.status,
                    label: mood.label.clone(),
                    metrics: metrics.clone(),
                };
                self.push_alert_record(record.clone())?;
                log::info!("Danger edge entered: {}", mood.label);
                Some(record)
            }
            None => None,
        };

        Ok(MetricUpdate { mood, redirect, alert })
    }

    /// Current metrics snapshot
    pub fn metrics(&self) -> Result<Metrics, DashboardError> {
        self.metrics
            .lock()
            .map(|guard| guard.clone())
            .map_err(|_| DashboardError::LockPoisoned)
    }

    /// Classify the current metrics. Computed on every read so the
    /// result can never go stale.
    pub fn mood(&self) -> Result<MoodResult, DashboardError> {
        let metrics = self.metrics.lock().map_err(|_| DashboardError::LockPoisoned)?;
        Ok(mood::classify(&metrics))
    }

    pub fn snapshot(&self) -> Result<DashboardSnapshot, DashboardError> {
        let metrics = self.metrics()?;
        let mood = mood::classify(&metrics);
        Ok(DashboardSnapshot {
            metrics,
            mood,
            current_page: self.current_page()?,
        })
    }

    pub fn current_page(&self) -> Result<Page, DashboardError> {
        self.current_page
            .lock()
            .map(|guard| *guard)
            .map_err(|_| DashboardError::LockPoisoned)
    }

    /// Explicit user navigation
    pub fn set_current_page(&self, page: Page) -> Result<Page, DashboardError> {
        let mut guard = self.current_page.lock().map_err(|_| DashboardError::LockPoisoned)?;
        *guard = page;
        Ok(page)
    }

    pub fn profile(&self) -> Result<OwnerProfile, DashboardError> {
        self.profile
            .lock()
            .map(|guard| guard.clone())
            .map_err(|_| DashboardError::LockPoisoned)
    }

    /// Merge one profile form edit, preserving the other fields
    pub fn update_profile_field(
        &self,
        field: ProfileField,
        value: String,
    ) -> Result<OwnerProfile, DashboardError> {
        let mut profile = self.profile.lock().map_err(|_| DashboardError::LockPoisoned)?;
        match field {
            ProfileField::OwnerName => profile.owner_name = value,
            ProfileField::OwnerEmail => profile.owner_email = value,
            ProfileField::OwnerPhone => profile.owner_phone = value,
            ProfileField::PetName => profile.pet_name = value,
            ProfileField::PetBreed => profile.pet_breed = value,
            ProfileField::PetAge => profile.pet_age = value,
            ProfileField::ChipId => profile.chip_id = value,
        }
        Ok(profile.clone())
    }

    /// Recorded danger episodes, newest first
    pub fn alert_history(&self, limit: usize) -> Result<Vec<AlertRecord>, DashboardError> {
        self.alert_history
            .lock()
            .map(|guard| guard.iter().take(limit).cloned().collect())
            .map_err(|_| DashboardError::LockPoisoned)
    }

    fn push_alert_record(&self, record: AlertRecord) -> Result<(), DashboardError> {
        let mut guard = self.alert_history.lock().map_err(|_| DashboardError::LockPoisoned)?;
        guard.insert(0, record);
        if guard.len() > MAX_ALERT_HISTORY {
            guard.truncate(MAX_ALERT_HISTORY);
        }
        Ok(())
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MoodStatus;

    #[test]
    fn metric_edits_merge_without_clobbering() {
        let state = AppState::new();
        state
            .apply_metric_update(MetricField::Heartbeat, "120".to_string())
            .unwrap();
        state
            .apply_metric_update(MetricField::SoundFreq, "800".to_string())
            .unwrap();

        let metrics = state.metrics().unwrap();
        assert_eq!(metrics.heartbeat, "120");
        assert_eq!(metrics.sound_freq, "800");
        assert_eq!(metrics.last_feed, "");
    }

    #[test]
    fn mood_read_matches_latest_metrics() {
        let state = AppState::new();
        assert_eq!(state.mood().unwrap().status, MoodStatus::Waiting);

        state
            .apply_metric_update(MetricField::LastFeed, "7".to_string())
            .unwrap();
        assert_eq!(state.mood().unwrap().status, MoodStatus::Hungry);
    }

    #[test]
    fn danger_entry_redirects_to_map_once() {
        let state = AppState::new();

        let update = state
            .apply_metric_update(MetricField::Heartbeat, "170".to_string())
            .unwrap();
        assert_eq!(update.mood.status, MoodStatus::AlertDanger);
        assert_eq!(update.redirect, Some(Page::Map));
        assert!(update.alert.is_some());
        assert_eq!(state.current_page().unwrap(), Page::Map);

        // Still in danger: no re-trigger, page untouched by the engine.
        let update = state
            .apply_metric_update(MetricField::Heartbeat, "171".to_string())
            .unwrap();
        assert!(update.mood.is_danger);
        assert_eq!(update.redirect, None);
        assert!(update.alert.is_none());
        assert_eq!(state.alert_history(10).unwrap().len(), 1);
    }

    #[test]
    fn cleared_danger_rearms_the_redirect() {
        let state = AppState::new();

        state
            .apply_metric_update(MetricField::Heartbeat, "170".to_string())
            .unwrap();
        // Navigate away, then calm down.
        state.set_current_page(Page::Data).unwrap();
        let calm = state
            .apply_metric_update(MetricField::Heartbeat, "100".to_string())
            .unwrap();
        assert_eq!(calm.redirect, None);
        assert_eq!(state.current_page().unwrap(), Page::Data);

        // Second entry fires again.
        let update = state
            .apply_metric_update(MetricField::Heartbeat, "165".to_string())
            .unwrap();
        assert_eq!(update.mood.status, MoodStatus::AlertDanger);
        assert_eq!(update.redirect, Some(Page::Map));

        let history = state.alert_history(10).unwrap();
        assert_eq!(history.len(), 2);
        // Newest first.
        assert_eq!(history[0].metrics.heartbeat, "165");
        assert_eq!(history[1].metrics.heartbeat, "170");
    }

    #[test]
    fn invalid_entry_does_not_fire_or_record() {
        let state = AppState::new();
        let update = state
            .apply_metric_update(MetricField::Heartbeat, "400".to_string())
            .unwrap();
        assert_eq!(update.mood.status, MoodStatus::Invalid);
        assert_eq!(update.redirect, None);
        assert!(state.alert_history(10).unwrap().is_empty());
    }

    #[test]
    fn alert_history_is_capped() {
        let state = AppState::new();
        for _ in 0..60 {
            state
                .apply_metric_update(MetricField::Heartbeat, "170".to_string())
                .unwrap();
            state
                .apply_metric_update(MetricField::Heartbeat, "100".to_string())
                .unwrap();
        }
        assert_eq!(state.alert_history(usize::MAX).unwrap().len(), 50);
    }

    #[test]
    fn profile_edits_merge_without_clobbering() {
        let state = AppState::new();
        state
            .update_profile_field(ProfileField::PetName, "Mochi".to_string())
            .unwrap();
        let profile = state
            .update_profile_field(ProfileField::PetBreed, "Persian".to_string())
            .unwrap();
        assert_eq!(profile.pet_name, "Mochi");
        assert_eq!(profile.pet_breed, "Persian");
        assert_eq!(profile.owner_name, "");
    }

    #[test]
    fn snapshot_is_consistent() {
        let state = AppState::new();
        state
            .apply_metric_update(MetricField::SoundFreq, "1600".to_string())
            .unwrap();
        let snapshot = state.snapshot().unwrap();
        assert_eq!(snapshot.mood.status, MoodStatus::AlertDanger);
        assert_eq!(snapshot.current_page, Page::Map);
        assert_eq!(snapshot.metrics.sound_freq, "1600");
    }
}
