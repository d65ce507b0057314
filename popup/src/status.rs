use shugiin_shared::Settings;
use shugiin_shared::config::is_target_url;

pub const ACTIVE_COLOR: &str = "#27ae60";
pub const INACTIVE_COLOR: &str = "#e74c3c";

const DARK_BACKGROUND: &str = "linear-gradient(135deg, #2c3e50 0%, #34495e 100%)";
const LIGHT_BACKGROUND: &str = "linear-gradient(135deg, #667eea 0%, #764ba2 100%)";

pub fn status_text(enabled: bool) -> &'static str {
    if enabled { "アクティブ" } else { "無効" }
}

pub fn status_color(enabled: bool) -> &'static str {
    if enabled { ACTIVE_COLOR } else { INACTIVE_COLOR }
}

/// The master button names the action it will take, not the current state.
pub fn toggle_label(enabled: bool) -> &'static str {
    if enabled {
        "拡張機能を無効にする"
    } else {
        "拡張機能を有効にする"
    }
}

/// Next value of the master switch. The stored value wins over what the
/// panel shows, which is still the default until the first load resolves.
pub fn next_enabled(stored: Option<&Settings>, shown: bool) -> bool {
    !stored.map_or(shown, |settings| settings.enabled)
}

pub fn popup_background(dark_mode: bool) -> &'static str {
    if dark_mode {
        DARK_BACKGROUND
    } else {
        LIGHT_BACKGROUND
    }
}

/// Whether the active tab is the page the content script augments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SiteStatus {
    Detected,
    Other,
}

impl SiteStatus {
    /// A tab whose URL the popup may not read counts as another site.
    pub fn from_url(url: Option<&str>) -> Self {
        if url.is_some_and(is_target_url) {
            SiteStatus::Detected
        } else {
            SiteStatus::Other
        }
    }

    pub fn text(self) -> &'static str {
        match self {
            SiteStatus::Detected => "衆議院サイトが検出されました",
            SiteStatus::Other => "対象サイトではありません",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            SiteStatus::Detected => ACTIVE_COLOR,
            SiteStatus::Other => INACTIVE_COLOR,
        }
    }
}
