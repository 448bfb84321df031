/*
 * Licensed under MIT OR Apache-2.0
 */

use dioxus::prelude::*;

use crate::appearance::{classes, style, Appearance, UiElement};

/// Spacing between a container's children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Gap {
    Small,
    #[default]
    Medium,
    Large,
}

impl Gap {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gap::Small => "small",
            Gap::Medium => "medium",
            Gap::Large => "large",
        }
    }
}

/// Flex container. `direction` is forwarded as-is so hosts can use layout
/// names beyond `horizontal` and `vertical`.
#[component]
pub fn Container(
    direction: String,
    #[props(default)] gap: Gap,
    #[props(default)] appearance: Option<Appearance>,
    children: Element,
) -> Element {
    let gap_class = format!("gap-{}", gap.as_str());
    let class = classes(
        appearance.as_ref(),
        UiElement::Container,
        &[direction.as_str(), gap_class.as_str()],
    );
    let style = style(appearance.as_ref(), UiElement::Container);
    let theme = appearance.as_ref().and_then(|a| a.theme.clone());

    rsx! {
        div {
            class: class,
            style: style,
            "data-direction": direction,
            "data-gap": gap.as_str(),
            "data-theme": theme,
            {children}
        }
    }
}
