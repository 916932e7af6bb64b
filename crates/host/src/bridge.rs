use serde::Serialize;
use wasm_bindgen::prelude::*;
use types::PuzzleError;

/// Serialize a view for the page.
pub fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
}

/// Rejected actions reach the page as plain message strings.
pub fn js_error(err: PuzzleError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// 64-bit seed from the page's Math.random, for sessions without a pinned seed.
pub fn random_seed() -> u64 {
    let word = || (js_sys::Math::random() * u32::MAX as f64) as u64;
    (word() << 32) | word()
}
