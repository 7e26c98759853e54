//! Clipboard bridge
//!
//! The sole conduit for captured text. The trait seam exists so the session
//! tests can count reads without a real clipboard.

use tauri::AppHandle;
use tauri_plugin_clipboard_manager::ClipboardExt;

use crate::shared::error::{AppError, AppResult};

pub trait ClipboardSource: Send + Sync {
    /// Read the current clipboard contents. An empty or unreadable
    /// clipboard is "nothing to do", so callers treat errors as empty.
    fn capture(&self) -> AppResult<String>;

    /// Empty the clipboard so the next capture cannot reuse stale text.
    fn clear(&self) -> AppResult<()>;
}

/// Clipboard access via Tauri's clipboard manager plugin.
pub struct SystemClipboard {
    app: AppHandle,
}

impl SystemClipboard {
    pub fn new(app: AppHandle) -> Self {
        Self { app }
    }
}

impl ClipboardSource for SystemClipboard {
    fn capture(&self) -> AppResult<String> {
        self.app
            .clipboard()
            .read_text()
            .map_err(|e| AppError::Clipboard(e.to_string()))
    }

    fn clear(&self) -> AppResult<()> {
        self.app
            .clipboard()
            .write_text(String::new())
            .map_err(|e| AppError::Clipboard(e.to_string()))
    }
}
