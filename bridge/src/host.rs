use js_sys::{Array, Function, Promise, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use crate::error::BridgeError;

/// Resolve `globalThis.chrome.<path...>`, failing if any step is missing.
pub(crate) fn namespace(path: &[&str]) -> Result<JsValue, BridgeError> {
    let mut current: JsValue = js_sys::global().into();
    let mut walked = String::new();
    for segment in std::iter::once("chrome").chain(path.iter().copied()) {
        if !walked.is_empty() {
            walked.push('.');
        }
        walked.push_str(segment);
        let next = Reflect::get(&current, &JsValue::from_str(segment))
            .map_err(|_| BridgeError::Unavailable(walked.clone()))?;
        if next.is_undefined() || next.is_null() {
            return Err(BridgeError::Unavailable(walked));
        }
        current = next;
    }
    Ok(current)
}

fn method(target: &JsValue, name: &str) -> Result<Function, BridgeError> {
    Reflect::get(target, &JsValue::from_str(name))
        .ok()
        .and_then(|f| f.dyn_into::<Function>().ok())
        .ok_or_else(|| BridgeError::Unavailable(name.to_string()))
}

/// Call `target.name(...args)` and await the result if it is a promise.
pub(crate) async fn call(
    target: &JsValue,
    name: &str,
    args: &[JsValue],
) -> Result<JsValue, BridgeError> {
    let f = method(target, name)?;
    let args: Array = args.iter().collect();
    let returned = f.apply(target, &args).map_err(BridgeError::rejected)?;
    match returned.dyn_into::<Promise>() {
        Ok(promise) => JsFuture::from(promise)
            .await
            .map_err(BridgeError::rejected),
        Err(value) => Ok(value),
    }
}

/// Call `target.name(...args)` synchronously, ignoring the return value.
pub(crate) fn call_sync(target: &JsValue, name: &str, args: &[JsValue]) -> Result<(), BridgeError> {
    let f = method(target, name)?;
    let args: Array = args.iter().collect();
    f.apply(target, &args).map_err(BridgeError::rejected)?;
    Ok(())
}
