//! Loading the widget configuration from the host page.
//!
//! A page may define a global `RECAST_CONFIG` holding a JSON string,
//! e.g. `window.RECAST_CONFIG = '{"endpoint": "/api/convert"}'`.
//! Without it, or when it does not parse, the defaults apply.

use recast_core::WidgetConfig;
use wasm_bindgen::JsValue;

/// Name of the global the configuration is read from.
pub const CONFIG_GLOBAL: &str = "RECAST_CONFIG";

/// Read the page's configuration, falling back to defaults.
#[must_use]
pub fn load() -> WidgetConfig {
    let Some(window) = web_sys::window() else {
        return WidgetConfig::default();
    };
    let Ok(value) = js_sys::Reflect::get(&window, &JsValue::from_str(CONFIG_GLOBAL)) else {
        return WidgetConfig::default();
    };
    let Some(json) = value.as_string() else {
        if !value.is_undefined() {
            tracing::warn!("{CONFIG_GLOBAL} is not a string; using defaults");
        }
        return WidgetConfig::default();
    };
    WidgetConfig::from_json(&json).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "ignoring {CONFIG_GLOBAL}");
        WidgetConfig::default()
    })
}
