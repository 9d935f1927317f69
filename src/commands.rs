use std::sync::Arc;

use tauri::{AppHandle, Emitter, State};

use crate::error::DashboardError;
use crate::history::{self, HistoryOverview};
use crate::map::{self, TrackerStatus};
use crate::notification;
use crate::state::AppState;
use crate::types::{
    AlertRecord, DashboardSnapshot, MetricField, MetricUpdate, Metrics, MoodResult, OwnerProfile,
    Page, ProfileField,
};

/// Default page size for alert history reads
const DEFAULT_ALERT_HISTORY_LIMIT: usize = 20;

/// Apply one field edit from the data entry form.
///
/// Recomputes the mood and runs the danger-edge reactor in the same
/// synchronous step. On a calm-to-danger edge the active page switches
/// to the map, the episode is recorded, and the frontend hears about
/// it via the `danger-alert` event plus a native notification.
#[tauri::command]
pub fn set_metric(
    field: String,
    value: String,
    state: State<Arc<AppState>>,
    app: AppHandle,
) -> Result<MetricUpdate, String> {
    let field: MetricField = field.parse().map_err(|e: DashboardError| e.to_string())?;
    let update = state.apply_metric_update(field, value).map_err(|e| e.to_string())?;

    let _ = app.emit("mood-updated", &update.mood);

    if let Some(record) = &update.alert {
        let _ = app.emit("danger-alert", record);
        if let Err(e) = notification::notify_danger(&app, record.status) {
            log::warn!("Danger notification failed: {}", e);
        }
    }

    Ok(update)
}

/// Current raw metrics for the data entry form
#[tauri::command]
pub fn get_metrics(state: State<Arc<AppState>>) -> Result<Metrics, String> {
    state.metrics().map_err(|e| e.to_string())
}

/// Current mood, classified from the live metrics
#[tauri::command]
pub fn get_mood(state: State<Arc<AppState>>) -> Result<MoodResult, String> {
    state.mood().map_err(|e| e.to_string())
}

/// Aggregate read for initial render: metrics, mood, active page
#[tauri::command]
pub fn get_dashboard_snapshot(state: State<Arc<AppState>>) -> Result<DashboardSnapshot, String> {
    state.snapshot().map_err(|e| e.to_string())
}

/// Explicit user navigation between pages
#[tauri::command]
pub fn navigate_to(page: String, state: State<Arc<AppState>>) -> Result<Page, String> {
    let page: Page = page.parse().map_err(|e: DashboardError| e.to_string())?;
    state.set_current_page(page).map_err(|e| e.to_string())
}

#[tauri::command]
pub fn get_current_page(state: State<Arc<AppState>>) -> Result<Page, String> {
    state.current_page().map_err(|e| e.to_string())
}

#[tauri::command]
pub fn get_profile(state: State<Arc<AppState>>) -> Result<OwnerProfile, String> {
    state.profile().map_err(|e| e.to_string())
}

/// Merge one edit from the profile form, preserving the other fields
#[tauri::command]
pub fn update_profile_field(
    field: String,
    value: String,
    state: State<Arc<AppState>>,
) -> Result<OwnerProfile, String> {
    let field: ProfileField = field.parse().map_err(|e: DashboardError| e.to_string())?;
    state.update_profile_field(field, value).map_err(|e| e.to_string())
}

/// Mock stats, trend bars, and event log for the history view
#[tauri::command]
pub fn get_history_overview() -> HistoryOverview {
    history::history_overview()
}

/// Mock tracker position and signal for the map view
#[tauri::command]
pub fn get_tracker_status(state: State<Arc<AppState>>) -> Result<TrackerStatus, String> {
    let mood = state.mood().map_err(|e| e.to_string())?;
    Ok(map::tracker_status(mood.is_danger))
}

/// Recorded danger episodes, newest first
#[tauri::command]
pub fn get_alert_history(
    limit: Option<usize>,
    state: State<Arc<AppState>>,
) -> Result<Vec<AlertRecord>, String> {
    state
        .alert_history(limit.unwrap_or(DEFAULT_ALERT_HISTORY_LIMIT))
        .map_err(|e| e.to_string())
}
