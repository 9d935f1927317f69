//! Cosmetic sync pulse
//!
//! Emits a steady tick so the logo and hero text animations in the
//! webview flip in lockstep off one clock. Purely decorative: no
//! effect on classification, navigation, or the metrics store.

use tauri::{AppHandle, Emitter};
use tokio::time::{interval, Duration};

/// Animation phase flip interval
const PULSE_INTERVAL_MS: u64 = 800;

/// Payload emitted to the frontend on each phase flip
#[derive(Debug, Clone, serde::Serialize)]
pub struct PulseTick {
    pub animated: bool,
}

/// Run the pulse loop for the lifetime of the app
pub async fn run_pulse_loop(app_handle: AppHandle) {
    let mut ticker = interval(Duration::from_millis(PULSE_INTERVAL_MS));
    let mut animated = false;

    loop {
        ticker.tick().await;
        animated = !animated;
        let _ = app_handle.emit("pulse-tick", PulseTick { animated });
    }
}
