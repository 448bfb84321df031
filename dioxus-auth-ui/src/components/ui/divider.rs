/*
 * Licensed under MIT OR Apache-2.0
 */

use dioxus::prelude::*;

use crate::appearance::{classes, style, Appearance, UiElement};

#[component]
pub fn Divider(#[props(default)] appearance: Option<Appearance>) -> Element {
    rsx! {
        div {
            class: classes(appearance.as_ref(), UiElement::Divider, &[]),
            style: style(appearance.as_ref(), UiElement::Divider),
        }
    }
}
