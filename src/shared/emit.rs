use tauri::{AppHandle, Emitter};
use super::events::AppEvent;

/// Emit an application event to all windows
///
/// The AppEvent enum encapsulates both the event name (via serde rename)
/// and the payload; the match keeps the name and payload type in one place.
pub fn emit_event(app: &AppHandle, event: AppEvent) {
    match &event {
        AppEvent::PanesUpdated(view) => {
            if let Err(e) = app.emit("improver://panes", view) {
                eprintln!("Failed to emit pane update: {}", e);
            }
        }

        AppEvent::SettingsUpdated(settings) => {
            if let Err(e) = app.emit("settings://updated", settings) {
                eprintln!("Failed to emit settings update: {}", e);
            }
        }
    }
}
