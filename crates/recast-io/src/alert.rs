//! Blocking user-facing messages via `window.alert`.

/// Show `message` in a blocking browser alert.
///
/// Falls back to a console warning when no window is available or the
/// alert is suppressed by the browser.
pub fn show(message: &str) {
    let Some(window) = web_sys::window() else {
        tracing::warn!(message, "no window for alert");
        return;
    };
    if let Err(e) = window.alert_with_message(message) {
        tracing::warn!(message, error = ?e, "alert failed");
    }
}
