use std::cell::RefCell;

use js_sys::Function;
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::*;

use shugiin_shared::{ToggleMessage, ToggleResponse};

use crate::error::BridgeError;
use crate::host;
use crate::tabs::{active_tab, tab_id};

type ListenerClosure = Closure<dyn FnMut(JsValue, JsValue, JsValue)>;

thread_local! {
    static MESSAGE_LISTENER: RefCell<Option<ListenerClosure>> = const { RefCell::new(None) };
}

/// Send a toggle to the content script in the active tab.
///
/// Delivery is at most once: there is no retry, and an `Err` usually just means
/// no augmented page is open.
pub async fn send_to_active_tab(message: ToggleMessage) -> Result<(), BridgeError> {
    let tab = active_tab().await?;
    let tabs = host::namespace(&["tabs"])?;
    let payload = serde_wasm_bindgen::to_value(&message)?;
    host::call(&tabs, "sendMessage", &[JsValue::from(tab_id(&tab)?), payload]).await?;
    Ok(())
}

/// Register `on_toggle` for toggle messages sent to this page. Every message is
/// acknowledged with `{ success: true }`; unrecognized ones are only logged.
pub fn listen_for_toggles<F>(mut on_toggle: F) -> Result<(), BridgeError>
where
    F: FnMut(ToggleMessage) + 'static,
{
    let on_message = host::namespace(&["runtime", "onMessage"])?;

    let listener = Closure::<dyn FnMut(JsValue, JsValue, JsValue)>::new(
        move |request: JsValue, _sender: JsValue, send_response: JsValue| {
            match serde_wasm_bindgen::from_value::<ToggleMessage>(request) {
                Ok(message) => on_toggle(message),
                Err(e) => {
                    web_sys::console::warn_1(&format!("Ignoring unknown message: {e}").into());
                }
            }
            if let Some(respond) = send_response.dyn_ref::<Function>()
                && let Ok(ack) = serde_wasm_bindgen::to_value(&ToggleResponse::ACK)
            {
                let _ = respond.call1(&JsValue::NULL, &ack);
            }
        },
    );

    host::call_sync(&on_message, "addListener", &[listener.as_ref().clone()])?;
    MESSAGE_LISTENER.with(|slot| {
        *slot.borrow_mut() = Some(listener);
    });
    Ok(())
}
