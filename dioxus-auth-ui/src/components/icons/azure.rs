/*
 * Licensed under MIT OR Apache-2.0
 */

use dioxus::prelude::*;

#[component]
pub fn AzureIcon() -> Element {
    rsx! {
        svg {
            class: "provider-icon",
            xmlns: "http://www.w3.org/2000/svg",
            view_box: "0 0 24 24",
            width: "21",
            height: "21",
            "focusable": "false",
            path { fill: "#0089D6", d: "M5.483 21.3H24L14.025 4.013l-3.038 8.347 5.836 6.938L5.483 21.3zM13.23 2.7L6.105 8.677 0 19.253h5.505v.014L13.23 2.7z" }
        }
    }
}
