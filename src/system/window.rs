//! Improver window lifecycle
//!
//! One always-on-top window, created hidden at startup. Closing it only
//! hides it: the process and its hotkey listener must stay alive, and the
//! hidden window is reused on the next trigger instead of being rebuilt.

use tauri::{AppHandle, Manager, WebviewUrl, WebviewWindowBuilder};

use crate::core::session::{EventPaneSink, PaneSink, SessionState};

pub const WINDOW_LABEL: &str = "improver";

const WINDOW_WIDTH: f64 = 700.0;
const WINDOW_HEIGHT: f64 = 600.0;

/// Create the improver window (hidden). Called once during setup.
pub fn create_improver_window(app: &AppHandle) -> tauri::Result<()> {
    let window = WebviewWindowBuilder::new(app, WINDOW_LABEL, WebviewUrl::App("index.html".into()))
        .title("Text Improver")
        .inner_size(WINDOW_WIDTH, WINDOW_HEIGHT)
        .always_on_top(true)
        .visible(false)
        .center()
        .build()?;

    let window_clone = window.clone();
    let handle = app.clone();
    window.on_window_event(move |event| {
        if let tauri::WindowEvent::CloseRequested { api, .. } = event {
            api.prevent_close(); // Never destroy, always hide
            let _ = window_clone.hide();
            println!("[Window] Improver window hidden (not destroyed)");

            let handle = handle.clone();
            tauri::async_runtime::spawn(async move {
                let sink = EventPaneSink::new(handle.clone());
                let state = handle.state::<SessionState>();
                let mut session = state.0.lock().await;
                session.hide();
                // Blank panes so nothing stale shows on the next restore.
                sink.render(&session.view());
            });
        }
    });

    Ok(())
}

/// Restore the improver window, creating it first if it does not exist yet.
pub fn show_improver_window(app: &AppHandle) -> tauri::Result<()> {
    if app.get_webview_window(WINDOW_LABEL).is_none() {
        create_improver_window(app)?;
    }

    if let Some(window) = app.get_webview_window(WINDOW_LABEL) {
        window.show()?;
        window.set_focus()?;
    }

    Ok(())
}
