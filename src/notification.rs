//! Native notification wrapper
//!
//! Provides a simple interface to send native notifications.
//! Uses tauri-plugin-notification for cross-platform support.

use tauri::AppHandle;
use tauri_plugin_notification::NotificationExt;

use crate::types::MoodStatus;

/// Send a notification to the user
pub fn send_notification(app: &AppHandle, title: &str, body: &str) -> Result<(), String> {
    app.notification()
        .builder()
        .title(title)
        .body(body)
        .show()
        .map_err(|e| format!("Failed to send notification: {}", e))
}

/// Send a native alert when the mood enters a danger state
pub fn notify_danger(app: &AppHandle, status: MoodStatus) -> Result<(), String> {
    let title = match status {
        MoodStatus::AlertDanger => "Emergency: check on your pet",
        MoodStatus::Stressed => "Your pet is stressed",
        _ => "CatTrack alert",
    };

    let body = match status {
        MoodStatus::AlertDanger => {
            "Readings crossed the emergency threshold. Live tracking is active."
        }
        MoodStatus::Stressed => "Heart rate or vocalization is elevated. Keep an eye on the map.",
        _ => "A danger state was detected.",
    };

    send_notification(app, title, body)
}
