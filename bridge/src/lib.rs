//! Thin bindings to the extension host APIs (`chrome.storage.sync`,
//! `chrome.runtime.onMessage`, `chrome.tabs`).
//!
//! The `chrome` global is resolved at call time, so every entry point returns
//! [`BridgeError::Unavailable`] instead of throwing when the code runs outside
//! the extension.

mod error;
mod host;
pub mod messaging;
pub mod storage;
pub mod tabs;

pub use error::BridgeError;
pub use messaging::{listen_for_toggles, send_to_active_tab};
pub use storage::{load_settings, store_setting};
pub use tabs::{ActiveTab, active_tab, reload_active_tab};
