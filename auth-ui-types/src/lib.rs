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

//! Shared types for the social sign-in widget.
//!
//! This crate defines the data model shared between the auth client and
//! the UI frontends. It is intentionally framework-agnostic: no Dioxus, no
//! `web-sys`, no HTTP.

pub mod i18n;
pub mod provider;
pub mod requests;
pub mod responses;
pub mod template;
pub mod view;

pub use i18n::{I18nVariables, ViewLabels};
pub use provider::{ParseProviderError, Provider};
pub use requests::OAuthOptions;
pub use responses::{AuthSettings, OAuthResponse};
pub use template::{capitalize, provider_button_label, template};
pub use view::{SocialLayout, ViewType};

/// Interpret a runtime-config flag. `"true"` and `"1"` (any case) are truthy.
pub fn truthy(s: Option<&str>) -> bool {
    if let Some(s) = s {
        ["true".to_string(), "1".to_string()].contains(&s.trim().to_lowercase())
    } else {
        false
    }
}

/// Split a comma-separated provider list, dropping blanks.
///
/// Entries are returned verbatim (trimmed); parsing into [`Provider`] is
/// left to the caller so unknown ids can be reported.
pub fn split_providers(s: Option<&str>) -> Vec<String> {
    if let Some(s) = s {
        s.split(',')
            .filter_map(|s| {
                let s = s.trim().to_string();
                if s.is_empty() {
                    None
                } else {
                    Some(s)
                }
            })
            .collect::<Vec<String>>()
    } else {
        Vec::new()
    }
}
