//! Commands invoked by the improver window
//!
//! The four style buttons all go through `improve_with_style`; the style
//! arrives as a plain string and unknown values fall back to SpellCheck.

use tauri::Manager;

use crate::core::improver::OpenAiImprover;
use crate::core::session::{self, EventPaneSink, PaneSink, SessionState};
use crate::shared::settings::AppSettings;
use crate::shared::types::{PaneView, Style};
use crate::system::window;

/// Re-improve the captured text with the given style. Does not read the
/// clipboard: the current Session text and language are reused.
#[tauri::command]
pub async fn improve_with_style(
    app: tauri::AppHandle,
    session: tauri::State<'_, SessionState>,
    provider: tauri::State<'_, OpenAiImprover>,
    style: String,
) -> Result<(), String> {
    let style = Style::parse(&style);
    println!("[Command] Style activated: {}", style.label());

    let sink = EventPaneSink::new(app.clone());
    let mut session = session.0.lock().await;
    session::run_improvement(&mut session, provider.inner(), &sink, style).await;
    Ok(())
}

/// Current pane snapshot, used by the frontend to re-sync on reopen.
#[tauri::command]
pub async fn get_session(session: tauri::State<'_, SessionState>) -> Result<PaneView, String> {
    Ok(session.0.lock().await.view())
}

#[tauri::command]
pub async fn get_settings() -> Result<AppSettings, String> {
    AppSettings::load().await
}

#[tauri::command]
pub async fn save_settings(app: tauri::AppHandle, settings: AppSettings) -> Result<(), String> {
    settings.save(&app).await
}

/// Hide the improver window without destroying it.
#[tauri::command]
pub async fn hide_improver_window(
    app: tauri::AppHandle,
    session: tauri::State<'_, SessionState>,
) -> Result<(), String> {
    if let Some(window) = app.get_webview_window(window::WINDOW_LABEL) {
        window.hide().map_err(|e| e.to_string())?;
    }

    let sink = EventPaneSink::new(app.clone());
    let mut session = session.0.lock().await;
    session.hide();
    sink.render(&session.view());
    Ok(())
}
