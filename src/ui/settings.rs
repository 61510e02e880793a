use egui::Color32;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct UiSettings {
    pub ui_scale: f32,

    /// Scenario file loaded last; reloaded on start.
    pub last_scenario: Option<PathBuf>,

    // Panel role → color mapping
    pub colors: HashMap<String, [u8; 4]>,
}

impl Default for UiSettings {
    fn default() -> Self {
        let mut colors = HashMap::new();

        colors.insert("Good".into(), [40, 120, 70, 255]);
        colors.insert("Bad".into(), [150, 50, 45, 255]);
        colors.insert("Positive".into(), [30, 90, 55, 255]);
        colors.insert("Negative".into(), [110, 45, 40, 255]);
        colors.insert("Panel".into(), [45, 48, 56, 255]);

        Self {
            ui_scale: 1.0,
            last_scenario: None,
            colors,
        }
    }
}

impl UiSettings {
    pub fn color(&self, key: &str) -> Color32 {
        self.colors
            .get(key)
            .map(|c| Color32::from_rgba_unmultiplied(c[0], c[1], c[2], c[3]))
            .unwrap_or(Color32::DARK_GRAY)
    }
}
