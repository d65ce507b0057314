/// Hostname the content script activates on. Matched exactly.
pub const TARGET_HOST: &str = "www.shugiin.go.jp";
/// Substring the popup looks for in the active tab URL.
pub const TARGET_DOMAIN: &str = "shugiin.go.jp";

pub const SUMMARY_ROW_TOKEN: &str = "計";

// Semicircle chart geometry (SVG user units)
pub const CHART_OUTER_RADIUS: f64 = 200.0;
pub const CHART_STROKE_WIDTH: f64 = 60.0;
pub const CHART_CENTER_X: f64 = 250.0;
pub const CHART_CENTER_Y: f64 = 240.0;
pub const CHART_VIEWBOX_WIDTH: u32 = 500;
pub const CHART_VIEWBOX_HEIGHT: u32 = 260;
pub const MAJORITY_LABEL_OFFSET: f64 = 50.0;
pub const MAJORITY_LABEL_WIDTH: f64 = 100.0;
pub const MAJORITY_LABEL_HEIGHT: f64 = 40.0;
pub const MAJORITY_MARKER_RADIUS: f64 = 8.0;
pub const MAJORITY_COLOR: &str = "#ff4757";

// Animation reveal
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_OFFSET: &str = "translateY(20px)";
pub const REVEAL_TRANSITION: &str = "all 0.6s ease";

pub const VIEWPORT_CONTENT: &str = "width=device-width, initial-scale=1.0";

/// Returns true when the content script should run on `hostname`.
pub fn is_target_host(hostname: &str) -> bool {
    hostname == TARGET_HOST
}

/// Returns true when the popup should report the active tab as the target site.
pub fn is_target_url(url: &str) -> bool {
    url.contains(TARGET_DOMAIN)
}
