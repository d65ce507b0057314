use serde::{Deserialize, Serialize};

use crate::settings::{SettingKey, Settings};

/// Popup -> page toggle relay. Wire form: `{ "action": "...", "data": bool }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", content = "data")]
pub enum ToggleMessage {
    #[serde(rename = "toggleDarkMode")]
    DarkMode(bool),
    #[serde(rename = "toggleAnimations")]
    Animations(bool),
    #[serde(rename = "toggleStatistics")]
    Statistics(bool),
}

impl ToggleMessage {
    /// Message relaying a change of `key`, if that key is live-toggleable.
    /// The master switch reloads the page instead.
    pub fn for_setting(key: SettingKey, enabled: bool) -> Option<Self> {
        match key {
            SettingKey::Enabled => None,
            SettingKey::DarkMode => Some(ToggleMessage::DarkMode(enabled)),
            SettingKey::Animations => Some(ToggleMessage::Animations(enabled)),
            SettingKey::Statistics => Some(ToggleMessage::Statistics(enabled)),
        }
    }

    pub fn key(&self) -> SettingKey {
        match self {
            ToggleMessage::DarkMode(_) => SettingKey::DarkMode,
            ToggleMessage::Animations(_) => SettingKey::Animations,
            ToggleMessage::Statistics(_) => SettingKey::Statistics,
        }
    }

    pub fn enabled(&self) -> bool {
        match *self {
            ToggleMessage::DarkMode(on)
            | ToggleMessage::Animations(on)
            | ToggleMessage::Statistics(on) => on,
        }
    }

    /// Apply to an in-memory settings copy.
    pub fn apply_to(&self, settings: &mut Settings) {
        settings.set(self.key(), self.enabled());
    }
}

/// Acknowledgement sent back for every received message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToggleResponse {
    pub success: bool,
}

impl ToggleResponse {
    pub const ACK: ToggleResponse = ToggleResponse { success: true };
}
