/*
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

use dioxus::prelude::*;

use crate::appearance::{classes, style, Appearance, UiElement};

/// A themed button. While `loading` it is disabled and flagged with
/// `data-loading="true"`.
#[component]
pub fn Button(
    #[props(default)] icon: Option<Element>,
    #[props(default = false)] loading: bool,
    onclick: EventHandler<MouseEvent>,
    #[props(default)] appearance: Option<Appearance>,
    /// Wire id of the provider this button starts, if any.
    #[props(default)]
    provider: Option<String>,
    children: Element,
) -> Element {
    let class = classes(appearance.as_ref(), UiElement::Button, &[]);
    let style = style(appearance.as_ref(), UiElement::Button);

    rsx! {
        button {
            class: class,
            style: style,
            disabled: loading,
            "data-loading": "{loading}",
            "data-provider": provider,
            onclick: move |evt| onclick.call(evt),
            if let Some(icon) = icon {
                span { class: "provider-icon-wrapper", {icon} }
            }
            {children}
        }
    }
}
