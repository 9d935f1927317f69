pub mod alert;
mod commands;
pub mod error;
pub mod history;
pub mod map;
pub mod mood;
mod notification;
mod pulse;
pub mod state;
pub mod types;

use std::sync::Arc;

use state::AppState;
use tauri::Manager;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tauri::Builder::default()
        .plugin(tauri_plugin_notification::init())
        .setup(|app| {
            // All state is session memory; nothing to load from disk.
            let state = Arc::new(AppState::new());
            app.manage(state);

            // Animation sync pulse for the logo and hero text
            let pulse_handle = app.handle().clone();
            tauri::async_runtime::spawn(async move {
                pulse::run_pulse_loop(pulse_handle).await;
            });

            log::info!("CatTrack ready");
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            // Metrics + mood
            commands::set_metric,
            commands::get_metrics,
            commands::get_mood,
            commands::get_dashboard_snapshot,
            // Navigation
            commands::navigate_to,
            commands::get_current_page,
            // Profile
            commands::get_profile,
            commands::update_profile_field,
            // History + map views
            commands::get_history_overview,
            commands::get_tracker_status,
            commands::get_alert_history,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
