use js_sys::{Array, Object, Reflect};
use wasm_bindgen::JsValue;

use shugiin_shared::{SettingKey, Settings};

use crate::error::BridgeError;
use crate::host;

const SYNC_AREA: &[&str] = &["storage", "sync"];

/// Read all settings from sync storage. Absent keys fall back to defaults.
pub async fn load_settings() -> Result<Settings, BridgeError> {
    let area = host::namespace(SYNC_AREA)?;
    let keys: Array = SettingKey::ALL
        .iter()
        .map(|key| JsValue::from_str(key.storage_key()))
        .collect();
    let stored = host::call(&area, "get", &[keys.into()]).await?;
    if stored.is_undefined() || stored.is_null() {
        return Ok(Settings::default());
    }
    Ok(serde_wasm_bindgen::from_value(stored)?)
}

/// Persist a single setting. Last writer wins.
pub async fn store_setting(key: SettingKey, value: bool) -> Result<(), BridgeError> {
    let area = host::namespace(SYNC_AREA)?;
    let items = Object::new();
    Reflect::set(
        &items,
        &JsValue::from_str(key.storage_key()),
        &JsValue::from_bool(value),
    )
    .map_err(BridgeError::rejected)?;
    host::call(&area, "set", &[items.into()]).await?;
    Ok(())
}
