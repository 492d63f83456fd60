use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Storage, Window};

/// Retrieve the global `window` object.
///
/// # Panics
/// Panics if executed outside of a browser context where `window` is unavailable.
#[must_use]
pub fn window() -> Window {
    web_sys::window().expect("`window` should be available in web context")
}

/// Retrieve the document object for DOM interactions.
///
/// # Panics
/// Panics when the document cannot be accessed from the current browser window.
#[must_use]
pub fn document() -> Document {
    window()
        .document()
        .expect("`document` should exist in browser context")
}

/// Access the browser `localStorage` handle.
///
/// # Errors
/// Returns an error if the browser window cannot be accessed or `localStorage` is unavailable.
pub fn local_storage() -> Result<Storage, JsValue> {
    window()
        .local_storage()?
        .ok_or_else(|| JsValue::from_str("localStorage unavailable"))
}

/// Convert a JavaScript value into a readable string for error reporting.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Log an error message to the browser console.
pub fn console_error(message: &str) {
    web_sys::console::error_1(&JsValue::from(message));
}

/// Milliseconds since the epoch, from the browser clock.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn now_ms() -> u64 {
    js_sys::Date::now().max(0.0) as u64
}

/// Seed material for a fresh attempt: wall clock xor jitter.
#[must_use]
pub fn entropy_seed() -> u64 {
    js_sys::Date::now()
        .to_bits()
        .rotate_left(13)
        ^ js_sys::Math::random().to_bits()
}

/// Current calendar year for the birth-year dropdown.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn current_year() -> u16 {
    js_sys::Date::new_0().get_full_year().min(u32::from(u16::MAX)) as u16
}

/// Locale-formatted date line used in prompts and headers.
#[must_use]
pub fn today_string() -> String {
    js_sys::Date::new_0()
        .to_locale_date_string("en-US", &JsValue::UNDEFINED)
        .into()
}

/// Locale-formatted date for a stored millisecond timestamp.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn format_date(timestamp_ms: u64) -> String {
    js_sys::Date::new(&JsValue::from_f64(timestamp_ms as f64))
        .to_locale_date_string("en-US", &JsValue::UNDEFINED)
        .into()
}
