// SPDX-License-Identifier: MIT OR Apache-2.0

use dioxus::prelude::*;

#[component]
pub fn GitlabIcon() -> Element {
    rsx! {
        svg {
            class: "provider-icon",
            xmlns: "http://www.w3.org/2000/svg",
            view_box: "0 0 24 24",
            width: "21",
            height: "21",
            "focusable": "false",
            path { fill: "#FC6D26", d: "M12 22.5 16.42 8.9H7.58L12 22.5zM1.39 8.9.04 13.05a.92.92 0 0 0 .33 1.03L12 22.5 1.39 8.9zm0 0h6.19L4.92.73a.46.46 0 0 0-.87 0L1.39 8.9zM22.61 8.9l1.35 4.15a.92.92 0 0 1-.33 1.03L12 22.5l10.61-13.6zm0 0h-6.19L19.08.73a.46.46 0 0 1 .87 0l2.66 8.17z" }
        }
    }
}
