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

//! Social sign-in button group.
//!
//! Renders one button per configured OAuth provider and hands clicks to the
//! auth client from [`AuthClientCtx`]. All buttons share a single loading
//! flag; the last error message is kept in local state and forwarded to
//! `onerror` for whatever displays errors around this widget.

use auth_ui_client::{handle_provider_sign_in, SignInState};
use auth_ui_types::{provider_button_label, I18nVariables, Provider, SocialLayout, ViewType};
use dioxus::prelude::*;

use crate::appearance::Appearance;
use crate::components::icons::provider_icon;
use crate::components::ui::{Button, Container, Divider, Gap};
use crate::context::AuthClientCtx;

#[derive(Clone, Copy)]
struct SocialAuthState {
    loading: Signal<bool>,
    error: Signal<String>,
    onerror: Option<EventHandler<String>>,
}

impl SignInState for SocialAuthState {
    fn set_loading(&mut self, loading: bool) {
        self.loading.set(loading);
    }

    fn set_error(&mut self, message: String) {
        self.error.set(message.clone());
        if let Some(onerror) = self.onerror {
            onerror.call(message);
        }
    }
}

#[component]
pub fn SocialAuth(
    /// Providers to offer, in display order. Nothing renders when empty.
    #[props(default)]
    providers: Option<Vec<Provider>>,
    #[props(default)] social_layout: SocialLayout,
    /// Forwarded verbatim to the auth client.
    #[props(default)]
    redirect_to: Option<String>,
    /// Hide the divider when no email/password form follows.
    #[props(default = false)]
    only_third_party_providers: bool,
    #[props(default)] view: ViewType,
    #[props(default)] i18n: I18nVariables,
    #[props(default)] appearance: Option<Appearance>,
    #[props(default)] onerror: Option<EventHandler<String>>,
) -> Element {
    let client = use_context::<AuthClientCtx>();
    let loading = use_signal(|| false);
    let error = use_signal(String::new);
    let state = SocialAuthState {
        loading,
        error,
        onerror,
    };

    let sign_in = use_callback(move |provider: Provider| {
        let client = client.clone();
        let redirect_to = redirect_to.clone();
        let mut state = state;
        spawn(async move {
            handle_provider_sign_in(&client, provider, redirect_to, &mut state).await;
        });
    });

    let providers = match providers {
        Some(providers) if !providers.is_empty() => providers,
        _ => return rsx! {},
    };
    let show_labels = social_layout.is_vertical();
    let gap = if show_labels { Gap::Small } else { Gap::Medium };

    rsx! {
        Container { direction: "vertical", gap: Gap::Large, appearance: appearance.clone(),
            Container {
                direction: social_layout.to_string(),
                gap: gap,
                appearance: appearance.clone(),
                for provider in providers {
                    Button {
                        key: "{provider}",
                        icon: provider_icon(provider),
                        loading: loading(),
                        provider: provider.as_str().to_string(),
                        onclick: move |_| sign_in.call(provider),
                        appearance: appearance.clone(),
                        if show_labels {
                            {provider_button_label(provider, view, &i18n)}
                        }
                    }
                }
            }
        }
        if !only_third_party_providers {
            Divider { appearance: appearance.clone() }
        }
    }
}
