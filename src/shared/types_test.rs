//! Test to trigger ts-rs bindings export
//! Run with: cargo test export_bindings

#[cfg(test)]
mod tests {
    use crate::shared::events::AppEvent;
    use crate::shared::settings::AppSettings;
    use crate::shared::types::*;
    use ts_rs::TS;

    #[test]
    fn export_bindings() {
        // This test triggers ts-rs to export TypeScript bindings
        // for everything the frontend consumes.
        Style::export().expect("Failed to export Style");
        Language::export().expect("Failed to export Language");
        UiState::export().expect("Failed to export UiState");
        PaneView::export().expect("Failed to export PaneView");
        AppSettings::export().expect("Failed to export AppSettings");
        AppEvent::export().expect("Failed to export AppEvent");
    }
}
