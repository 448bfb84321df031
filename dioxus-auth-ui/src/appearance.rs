// SPDX-License-Identifier: MIT OR Apache-2.0

//! Host-supplied styling, handed untouched to every UI primitive.
//!
//! Each primitive gets a built-in class (`supabase-auth-ui_ui-button`, ...)
//! plus whatever the host lists for that element. Setting `extend: false`
//! drops the built-in classes so a host stylesheet can start from scratch.

use serde::{Deserialize, Serialize};

pub const DEFAULT_CLASS_PREFIX: &str = "supabase-auth-ui";

/// The primitives an [`Appearance`] can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiElement {
    Button,
    Container,
    Divider,
}

impl UiElement {
    pub fn as_str(&self) -> &'static str {
        match self {
            UiElement::Button => "button",
            UiElement::Container => "container",
            UiElement::Divider => "divider",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppearanceClasses {
    pub button: Option<String>,
    pub container: Option<String>,
    pub divider: Option<String>,
}

/// Inline CSS declarations per element, e.g. `"border-radius: 8px;"`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppearanceStyles {
    pub button: Option<String>,
    pub container: Option<String>,
    pub divider: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Appearance {
    /// Theme name, exposed as `data-theme` on containers.
    pub theme: Option<String>,
    /// Replaces `supabase-auth-ui` in built-in class names.
    pub prepended_class_name: Option<String>,
    /// Keep the built-in classes. Defaults to true.
    pub extend: Option<bool>,
    pub class_name: AppearanceClasses,
    pub style: AppearanceStyles,
}

impl Appearance {
    fn prefix(&self) -> &str {
        self.prepended_class_name
            .as_deref()
            .unwrap_or(DEFAULT_CLASS_PREFIX)
    }

    fn user_class(&self, element: UiElement) -> Option<&str> {
        match element {
            UiElement::Button => self.class_name.button.as_deref(),
            UiElement::Container => self.class_name.container.as_deref(),
            UiElement::Divider => self.class_name.divider.as_deref(),
        }
    }

    fn user_style(&self, element: UiElement) -> Option<&str> {
        match element {
            UiElement::Button => self.style.button.as_deref(),
            UiElement::Container => self.style.container.as_deref(),
            UiElement::Divider => self.style.divider.as_deref(),
        }
    }
}

/// Class attribute for `element` with the given variant suffixes.
///
/// `classes(None, UiElement::Container, &["vertical"])` yields
/// `"supabase-auth-ui_ui-container supabase-auth-ui_ui-container-vertical"`.
pub fn classes(appearance: Option<&Appearance>, element: UiElement, variants: &[&str]) -> String {
    let prefix = appearance.map_or(DEFAULT_CLASS_PREFIX, Appearance::prefix);
    let extend = appearance.and_then(|a| a.extend).unwrap_or(true);

    let mut out: Vec<String> = Vec::new();
    if extend {
        let base = format!("{prefix}_ui-{}", element.as_str());
        out.extend(variants.iter().map(|v| format!("{base}-{v}")));
        out.insert(0, base);
    }
    if let Some(user) = appearance.and_then(|a| a.user_class(element)) {
        out.push(user.to_string());
    }
    out.join(" ")
}

/// Inline style for `element`, empty when the host set none.
pub fn style(appearance: Option<&Appearance>, element: UiElement) -> String {
    appearance
        .and_then(|a| a.user_style(element))
        .unwrap_or_default()
        .to_string()
}
