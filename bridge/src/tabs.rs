use js_sys::{Array, Object, Reflect};
use serde::Deserialize;
use wasm_bindgen::JsValue;

use crate::error::BridgeError;
use crate::host;

/// The fields of a `tabs.Tab` the popup needs.
#[derive(Debug, Clone, Deserialize)]
pub struct ActiveTab {
    pub id: Option<i32>,
    #[serde(default)]
    pub url: Option<String>,
}

/// The active tab of the current window.
pub async fn active_tab() -> Result<ActiveTab, BridgeError> {
    let tabs = host::namespace(&["tabs"])?;
    let query = Object::new();
    Reflect::set(&query, &JsValue::from_str("active"), &JsValue::TRUE)
        .map_err(BridgeError::rejected)?;
    Reflect::set(&query, &JsValue::from_str("currentWindow"), &JsValue::TRUE)
        .map_err(BridgeError::rejected)?;
    let found = host::call(&tabs, "query", &[query.into()]).await?;
    let first = Array::from(&found).get(0);
    if first.is_undefined() {
        return Err(BridgeError::Unavailable("no active tab".to_string()));
    }
    Ok(serde_wasm_bindgen::from_value(first)?)
}

pub(crate) fn tab_id(tab: &ActiveTab) -> Result<i32, BridgeError> {
    tab.id
        .ok_or_else(|| BridgeError::Unavailable("active tab has no id".to_string()))
}

/// Reload the active tab so the content script re-runs from scratch.
pub async fn reload_active_tab() -> Result<(), BridgeError> {
    let tab = active_tab().await?;
    let tabs = host::namespace(&["tabs"])?;
    host::call(&tabs, "reload", &[JsValue::from(tab_id(&tab)?)]).await?;
    Ok(())
}
