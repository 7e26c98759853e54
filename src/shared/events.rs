use serde::{Serialize, Deserialize};
use ts_rs::TS;
use super::types::PaneView;
use super::settings::AppSettings;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(tag = "event", content = "payload")] // Tagged enum for easier frontend parsing
#[ts(export, export_to = "../ui/types/events.ts")]
pub enum AppEvent {
    #[serde(rename = "improver://panes")]
    PanesUpdated(PaneView),

    #[serde(rename = "settings://updated")]
    SettingsUpdated(AppSettings),
}
