//! Full-page loading overlay shown while a conversion is in flight.

use dioxus::prelude::*;

/// Overlay covering the form while `visible` is set.
#[component]
pub fn LoadingOverlay(visible: bool) -> Element {
    let class = if visible { "loading-overlay show" } else { "loading-overlay" };

    rsx! {
        div {
            id: "loadingOverlay",
            class: "{class}",
            aria_hidden: if visible { "false" } else { "true" },
            div { class: "spinner" }
            p { "Converting..." }
        }
    }
}
