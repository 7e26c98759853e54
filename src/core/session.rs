//! Session state machine
//!
//! Owns the only mutable shared state: the most recently captured text, its
//! detected language, the active style and the pane contents. All mutation
//! happens under one `tokio::sync::Mutex`, and a whole improvement cycle
//! runs with the lock held, so overlapping requests are impossible by
//! construction rather than by convention.
//!
//! The provider call is awaited while the lock is held. That serializes the
//! pipeline exactly like the historical single-threaded UI loop did, without
//! freezing the window: rendering happens in the webview, driven by emitted
//! pane events.

use tauri::AppHandle;

use crate::core::capture::ClipboardSource;
use crate::core::improver::{ImproveProvider, ImprovementOutcome};
use crate::core::{language, prompt};
use crate::shared::emit::emit_event;
use crate::shared::error::AppResult;
use crate::shared::events::AppEvent;
use crate::shared::types::{Language, PaneView, Style, UiState};

/// Shown in both panes while a provider call is in flight.
pub const LOADING_PLACEHOLDER: &str = "Loading...";

/// Rendering seam. Production code emits a Tauri event; tests collect views.
pub trait PaneSink: Send + Sync {
    fn render(&self, view: &PaneView);
}

#[derive(Debug, Default)]
pub struct Session {
    original_text: String,
    language: Language,
    active_style: Option<Style>,
    improved_text: String,
    state: UiState,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> UiState {
        self.state
    }

    pub fn original_text(&self) -> &str {
        &self.original_text
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn active_style(&self) -> Option<Style> {
        self.active_style
    }

    /// Snapshot of the panes for the current state. Loading always shows
    /// placeholders only, so nothing from a previous cycle can leak through.
    pub fn view(&self) -> PaneView {
        match self.state {
            UiState::Hidden => PaneView {
                state: self.state,
                original: String::new(),
                improved: String::new(),
            },
            UiState::Loading => PaneView {
                state: self.state,
                original: LOADING_PLACEHOLDER.to_string(),
                improved: LOADING_PLACEHOLDER.to_string(),
            },
            UiState::Displaying => PaneView {
                state: self.state,
                original: self.original_text.clone(),
                improved: self.improved_text.clone(),
            },
        }
    }

    /// Window was closed (hidden). The captured text survives so reopening
    /// the window can restore the panes.
    pub fn hide(&mut self) {
        self.state = UiState::Hidden;
    }
}

/// Handle a trigger: read the clipboard and, if there is text, run a full
/// improvement cycle with the Normal style (the initial style of a fresh
/// capture). Returns whether a capture actually happened so the caller
/// knows to schedule the clipboard clear.
///
/// An empty or unreadable clipboard is a no-op: no state transition, no
/// pane write, Session untouched.
pub async fn run_capture(
    session: &mut Session,
    clipboard: &dyn ClipboardSource,
    provider: &dyn ImproveProvider,
    sink: &dyn PaneSink,
) -> AppResult<bool> {
    let text = clipboard.capture().unwrap_or_default();
    if text.trim().is_empty() {
        println!("[Session] Clipboard empty, nothing to capture");
        return Ok(false);
    }

    session.language = language::detect(&text);
    session.original_text = text;
    println!(
        "[Session] Captured {} bytes, detected language: {}",
        session.original_text.len(),
        session.language.code()
    );

    run_improvement(session, provider, sink, Style::Normal).await;
    Ok(true)
}

/// One improvement cycle: Loading -> provider call -> Displaying.
///
/// The placeholder render happens before the provider call is issued and
/// the Displaying render happens after it returns; success and failure
/// terminate Loading the same way. There is no retry: a failed call is
/// shown once, and only another trigger or style press tries again.
pub async fn run_improvement(
    session: &mut Session,
    provider: &dyn ImproveProvider,
    sink: &dyn PaneSink,
    style: Style,
) {
    if session.original_text.is_empty() {
        // Style press before any capture: nothing to improve.
        println!("[Session] No captured text, ignoring {} request", style.label());
        return;
    }

    session.active_style = Some(style);
    session.state = UiState::Loading;
    session.improved_text.clear();
    sink.render(&session.view());

    let instruction = prompt::instruction_for(session.language, style);
    let outcome = ImprovementOutcome::from_result(
        provider.improve(&session.original_text, instruction).await,
    );
    if let ImprovementOutcome::Failed(description) = &outcome {
        eprintln!("[Session] Improve call failed: {}", description);
    }

    session.improved_text = outcome.display_text();
    session.state = UiState::Displaying;
    sink.render(&session.view());
}

/// Managed wrapper so Tauri state can hand out the session mutex.
pub struct SessionState(pub tokio::sync::Mutex<Session>);

impl SessionState {
    pub fn new() -> Self {
        Self(tokio::sync::Mutex::new(Session::new()))
    }
}

/// Production sink: forwards pane views to the improver window.
pub struct EventPaneSink {
    app: AppHandle,
}

impl EventPaneSink {
    pub fn new(app: AppHandle) -> Self {
        Self { app }
    }
}

impl PaneSink for EventPaneSink {
    fn render(&self, view: &PaneView) {
        emit_event(&self.app, AppEvent::PanesUpdated(view.clone()));
    }
}
