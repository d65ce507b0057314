use serde::{Deserialize, Serialize};

/// Keys in the extension's sync storage area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingKey {
    Enabled,
    DarkMode,
    Animations,
    Statistics,
}

impl SettingKey {
    pub const ALL: [SettingKey; 4] = [
        SettingKey::Enabled,
        SettingKey::DarkMode,
        SettingKey::Animations,
        SettingKey::Statistics,
    ];

    pub fn storage_key(self) -> &'static str {
        match self {
            SettingKey::Enabled => "extensionEnabled",
            SettingKey::DarkMode => "darkMode",
            SettingKey::Animations => "animations",
            SettingKey::Statistics => "statistics",
        }
    }

    pub fn default_value(self) -> bool {
        !matches!(self, SettingKey::DarkMode)
    }
}

fn enabled_by_default() -> bool {
    true
}

/// User-facing toggles. Absent keys take their defaults, so a partial object
/// from storage deserializes cleanly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(rename = "extensionEnabled", default = "enabled_by_default")]
    pub enabled: bool,
    #[serde(rename = "darkMode", default)]
    pub dark_mode: bool,
    #[serde(rename = "animations", default = "enabled_by_default")]
    pub animations_enabled: bool,
    #[serde(rename = "statistics", default = "enabled_by_default")]
    pub statistics_enabled: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            enabled: true,
            dark_mode: false,
            animations_enabled: true,
            statistics_enabled: true,
        }
    }
}

impl Settings {
    pub fn get(&self, key: SettingKey) -> bool {
        match key {
            SettingKey::Enabled => self.enabled,
            SettingKey::DarkMode => self.dark_mode,
            SettingKey::Animations => self.animations_enabled,
            SettingKey::Statistics => self.statistics_enabled,
        }
    }

    pub fn set(&mut self, key: SettingKey, value: bool) {
        match key {
            SettingKey::Enabled => self.enabled = value,
            SettingKey::DarkMode => self.dark_mode = value,
            SettingKey::Animations => self.animations_enabled = value,
            SettingKey::Statistics => self.statistics_enabled = value,
        }
    }
}
