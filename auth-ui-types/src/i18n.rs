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

//! Localization tables for the auth views.
//!
//! Tables are keyed by [`ViewType`]. Hosts usually ship them as JSON:
//!
//! ```json
//! { "sign_in": { "social_provider_text": "Continuer avec {provider}" } }
//! ```
//!
//! Any entry a host leaves out falls back to the built-in English text.

use serde::{Deserialize, Serialize};

use crate::view::ViewType;

const SIGN_IN_SOCIAL_PROVIDER_TEXT: &str = "Sign in with {provider}";
const SIGN_UP_SOCIAL_PROVIDER_TEXT: &str = "Sign up with {provider}";

/// Labels for a single view.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewLabels {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_input_placeholder: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password_input_placeholder: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loading_button_label: Option<String>,
    /// Provider button text; `{provider}` is replaced by the provider name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub social_provider_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirmation_text: Option<String>,
}

/// Localization table keyed by view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct I18nVariables {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sign_in: Option<ViewLabels>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sign_up: Option<ViewLabels>,
}

impl Default for I18nVariables {
    fn default() -> Self {
        Self::english()
    }
}

impl I18nVariables {
    /// The built-in English table.
    pub fn english() -> Self {
        Self {
            sign_in: Some(ViewLabels {
                email_label: Some("Email address".into()),
                password_label: Some("Your Password".into()),
                email_input_placeholder: Some("Your email address".into()),
                password_input_placeholder: Some("Your password".into()),
                button_label: Some("Sign in".into()),
                loading_button_label: Some("Signing in ...".into()),
                social_provider_text: Some(SIGN_IN_SOCIAL_PROVIDER_TEXT.into()),
                link_text: Some("Already have an account? Sign in".into()),
                confirmation_text: None,
            }),
            sign_up: Some(ViewLabels {
                email_label: Some("Email address".into()),
                password_label: Some("Create a Password".into()),
                email_input_placeholder: Some("Your email address".into()),
                password_input_placeholder: Some("Your password".into()),
                button_label: Some("Sign up".into()),
                loading_button_label: Some("Signing up ...".into()),
                social_provider_text: Some(SIGN_UP_SOCIAL_PROVIDER_TEXT.into()),
                link_text: Some("Don't have an account? Sign up".into()),
                confirmation_text: Some("Check your email for the confirmation link".into()),
            }),
        }
    }

    /// An empty table. Every lookup falls back to English.
    pub fn empty() -> Self {
        Self {
            sign_in: None,
            sign_up: None,
        }
    }

    pub fn labels(&self, view: ViewType) -> Option<&ViewLabels> {
        match view {
            ViewType::SignIn => self.sign_in.as_ref(),
            ViewType::SignUp => self.sign_up.as_ref(),
        }
    }

    /// Template for the provider buttons of `view`.
    pub fn social_provider_text(&self, view: ViewType) -> &str {
        self.labels(view)
            .and_then(|labels| labels.social_provider_text.as_deref())
            .unwrap_or(match view {
                ViewType::SignIn => SIGN_IN_SOCIAL_PROVIDER_TEXT,
                ViewType::SignUp => SIGN_UP_SOCIAL_PROVIDER_TEXT,
            })
    }
}
