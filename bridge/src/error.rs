use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

#[derive(Debug, Error)]
pub enum BridgeError {
    /// The extension API is not present, e.g. when the page is opened outside
    /// the extension host.
    #[error("extension API unavailable: {0}")]
    Unavailable(String),
    /// The host threw or the returned promise rejected.
    #[error("extension API call failed: {0}")]
    Rejected(String),
    #[error("could not decode extension data: {0}")]
    Decode(String),
}

impl BridgeError {
    pub(crate) fn rejected(value: JsValue) -> Self {
        BridgeError::Rejected(describe(&value))
    }
}

impl From<serde_wasm_bindgen::Error> for BridgeError {
    fn from(e: serde_wasm_bindgen::Error) -> Self {
        BridgeError::Decode(e.to_string())
    }
}

/// Best-effort text for a thrown JS value.
pub(crate) fn describe(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
