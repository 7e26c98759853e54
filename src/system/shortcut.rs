//! Global hotkey trigger
//!
//! Registers exactly one fixed key combination for the lifetime of the
//! process. The listener context never touches Session state or the window
//! content directly; it only spawns a task on the async runtime, which
//! serializes all Session mutation behind the session mutex.

use tauri::{AppHandle, Manager};
use tauri_plugin_global_shortcut::{GlobalShortcutExt, Shortcut, ShortcutState};
use tokio::time::Duration;

use crate::core::capture::{ClipboardSource, SystemClipboard};
use crate::core::improver::OpenAiImprover;
use crate::core::session::{self, EventPaneSink, SessionState};
use crate::system::window;

/// The trigger combination. Fixed, not configurable.
pub const IMPROVE_SHORTCUT: &str = "Control+Q";

/// How long to leave the captured text on the clipboard before clearing it,
/// so other consumers racing us still see the just-copied text. A timing
/// assumption inherited from the original tool, not a guaranteed contract.
const CLIPBOARD_SETTLE_MS: u64 = 2000;

pub fn register_improve_shortcut(app: &tauri::App) -> Result<(), Box<dyn std::error::Error>> {
    let shortcut: Shortcut = IMPROVE_SHORTCUT.parse()?;

    // Clean slate in case a previous instance left the combination registered.
    if let Err(e) = app.global_shortcut().unregister(shortcut) {
        println!("[Shortcut] Unregister attempt (expected on first run): {}", e);
    }

    let handle = app.handle().clone();
    app.global_shortcut().on_shortcut(shortcut, move |_app, _shortcut, event| {
        // The hotkey library fires on both press and release.
        if event.state != ShortcutState::Pressed {
            return;
        }

        let handle = handle.clone();
        tauri::async_runtime::spawn(async move {
            trigger_capture(handle).await;
        });
    })?;

    println!("✅ Registered global shortcut: {}", IMPROVE_SHORTCUT);
    Ok(())
}

/// The capture-and-refresh operation scheduled by the hotkey: restore the
/// window, run the pipeline on the session, then clear the clipboard after
/// the settle delay (only when something was actually captured).
async fn trigger_capture(app: AppHandle) {
    if let Err(e) = window::show_improver_window(&app) {
        eprintln!("[Shortcut] Failed to show improver window: {}", e);
        return;
    }

    let clipboard = SystemClipboard::new(app.clone());
    let sink = EventPaneSink::new(app.clone());
    let provider = app.state::<OpenAiImprover>();
    let session_state = app.state::<SessionState>();

    let captured = {
        let mut session = session_state.0.lock().await;
        match session::run_capture(&mut session, &clipboard, provider.inner(), &sink).await {
            Ok(captured) => captured,
            Err(e) => {
                eprintln!("[Shortcut] Capture failed: {}", e);
                false
            }
        }
    };

    if captured {
        tokio::time::sleep(Duration::from_millis(CLIPBOARD_SETTLE_MS)).await;
        if let Err(e) = clipboard.clear() {
            eprintln!("[Shortcut] Failed to clear clipboard: {}", e);
        }
    }
}
