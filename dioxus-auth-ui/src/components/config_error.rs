/*
 * Licensed under MIT OR Apache-2.0
 */

use dioxus::prelude::*;

#[component]
pub fn ConfigError(message: String) -> Element {
    rsx! {
        div { class: "error-container",
            p { class: "error-message", "{message}" }
            p {
                "Set "
                code { "window.__APP_CONFIG" }
                " with at least an "
                code { "authUrl" }
                " before loading the widget."
            }
        }
    }
}
