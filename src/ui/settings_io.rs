use std::fs;
use std::path::PathBuf;

use anyhow::Context;

use crate::ui::settings::UiSettings;

fn settings_path() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("ehbo_trainer");
    fs::create_dir_all(&path).ok();
    path.push("ui_settings.json");
    path
}

pub fn load_settings() -> UiSettings {
    let path = settings_path();
    fs::read_to_string(&path)
        .ok()
        .and_then(|s| match serde_json::from_str(&s) {
            Ok(settings) => Some(settings),
            Err(e) => {
                log::warn!("Ignoring unreadable {}: {e}", path.display());
                None
            }
        })
        .unwrap_or_default()
}

pub fn save_settings(settings: &UiSettings) -> anyhow::Result<()> {
    let path = settings_path();
    let json = serde_json::to_string_pretty(settings)?;
    fs::write(&path, json).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}
