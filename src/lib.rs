mod api;
mod core;
mod shared;
mod system;

use tauri::Manager;

use crate::core::improver::OpenAiImprover;
use crate::core::session::SessionState;
use crate::shared::settings::AppSettings;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tauri::Builder::default()
        .plugin(tauri_plugin_global_shortcut::Builder::new().build())
        .plugin(tauri_plugin_clipboard_manager::init())
        .setup(|app| {
            // Load settings
            let settings = tauri::async_runtime::block_on(AppSettings::load())
                .unwrap_or_else(|e| {
                    eprintln!("Failed to load settings: {}", e);
                    AppSettings::default()
                });

            // Rewrite provider and the single session, shared via app state
            let improver = OpenAiImprover::new(&settings.provider)?;
            app.manage(SessionState::new());
            app.manage(improver);

            // The window exists for the whole process lifetime; the hotkey
            // only shows and hides it.
            system::window::create_improver_window(app.handle())?;
            system::shortcut::register_improve_shortcut(app)?;

            println!("✅ Text Improver initialized successfully!");
            println!("📋 Global shortcut: {}", system::shortcut::IMPROVE_SHORTCUT);
            println!("💡 Copy text and press the shortcut to improve it");

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            api::commands::improve_with_style,
            api::commands::get_session,
            api::commands::get_settings,
            api::commands::save_settings,
            api::commands::hide_improver_window,
        ])
        .run(tauri::generate_context!())
        .unwrap_or_else(|e| {
            eprintln!("FATAL: Failed to start Tauri application: {}", e);
            eprintln!("Common causes:");
            eprintln!("  - Missing system permissions (accessibility, global shortcuts)");
            eprintln!("  - Another instance already holding the shortcut");
            std::process::exit(1);
        });
}
