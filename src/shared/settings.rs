use serde::{Deserialize, Serialize};
use ts_rs::TS;
use tokio::fs;
use std::path::PathBuf;
use directories::ProjectDirs;
use tauri::AppHandle;
use crate::shared::events::AppEvent;
use crate::shared::emit::emit_event;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../ui/types/settings.ts")]
pub struct AppSettings {
    pub hotkeys: HotkeySettings,
    pub provider: ProviderSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../ui/types/settings.ts")]
pub struct HotkeySettings {
    /// Shown in the UI for reference; the registered combination itself is
    /// fixed at startup.
    pub improve_capture: String,
}

/// Rewrite provider configuration. The API key is intentionally not here:
/// it lives in the OS keyring or the OPENAI_API_KEY environment variable.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../ui/types/settings.ts")]
pub struct ProviderSettings {
    pub model: String,
    pub api_base: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            hotkeys: HotkeySettings {
                improve_capture: crate::system::shortcut::IMPROVE_SHORTCUT.to_string(),
            },
            provider: ProviderSettings {
                model: "gpt-4o".to_string(),
                api_base: "https://api.openai.com/v1".to_string(),
            },
        }
    }
}

impl AppSettings {
    pub fn get_settings_path() -> Result<PathBuf, String> {
        ProjectDirs::from("com", "textimprover", "text-improver")
            .map(|dirs| dirs.config_dir().join("settings.json"))
            .ok_or_else(|| "Failed to determine config directory".to_string())
    }

    pub async fn load() -> Result<Self, String> {
        let path = Self::get_settings_path()?;

        if !path.exists() {
            let settings = Self::default();
            settings.save_to_disk().await?;
            return Ok(settings);
        }

        let content = fs::read_to_string(&path).await
            .map_err(|e| format!("Failed to read settings file: {}", e))?;

        serde_json::from_str(&content)
            .map_err(|e| format!("Failed to parse settings: {}", e))
    }

    /// Internal helper to save string to disk without emission
    async fn save_to_disk(&self) -> Result<(), String> {
        let path = Self::get_settings_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_json::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize settings: {}", e))?;

        fs::write(&path, content).await
            .map_err(|e| format!("Failed to write settings file: {}", e))
    }

    /// Save settings to disk and emit update event
    pub async fn save(&self, app: &AppHandle) -> Result<(), String> {
        self.save_to_disk().await?;

        emit_event(app, AppEvent::SettingsUpdated(self.clone()));

        Ok(())
    }
}
