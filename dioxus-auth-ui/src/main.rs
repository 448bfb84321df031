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

//! Demo host for the social sign-in widget.
//!
//! Reads `window.__APP_CONFIG`, provides the auth client to the tree and
//! renders [`SocialAuth`] with an error banner underneath.

use dioxus::prelude::*;
use dioxus_auth_ui::auth::resolve_providers;
use dioxus_auth_ui::components::config_error::ConfigError;
use dioxus_auth_ui::constants::{
    app_config, appearance, auth_client, i18n, only_third_party_providers, redirect_to,
    social_layout, view,
};
use dioxus_auth_ui::{AuthClientCtx, SocialAuth};

/// Sign-in card: the provider buttons plus the message of the last failed attempt.
#[component]
fn SignInCard() -> Element {
    let mut last_error = use_signal(|| None::<String>);
    let providers = use_resource(resolve_providers);

    let settings = (|| -> Result<_, String> {
        Ok((
            social_layout()?,
            redirect_to()?,
            only_third_party_providers()?,
            view()?,
            i18n()?,
            appearance()?,
        ))
    })();
    let (layout, redirect, third_party_only, view, i18n, appearance) = match settings {
        Ok(settings) => settings,
        Err(e) => return rsx! { ConfigError { message: e } },
    };

    let providers = match &*providers.read() {
        None => return rsx! { p { class: "auth-loading", "Loading sign-in options..." } },
        Some(Err(e)) => {
            log::error!("Failed to resolve providers: {e:?}");
            return rsx! { ConfigError { message: format!("{e}") } };
        }
        Some(Ok(providers)) => providers.clone(),
    };

    rsx! {
        div { class: "auth-card",
            SocialAuth {
                providers: providers,
                social_layout: layout,
                redirect_to: redirect,
                only_third_party_providers: third_party_only,
                view: view,
                i18n: i18n,
                appearance: appearance,
                onerror: move |message: String| last_error.set(Some(message)),
            }
            if let Some(message) = last_error() {
                p { class: "auth-error", "role": "alert", "{message}" }
            }
        }
    }
}

#[component]
fn App() -> Element {
    // The client is provided once; a bad config renders instead of the card.
    let ready = use_hook(|| {
        auth_client().map(|client| {
            provide_context(AuthClientCtx::new(client));
        })
    });

    match ready {
        Ok(()) => rsx! { SignInCard {} },
        Err(e) => rsx! { ConfigError { message: e } },
    }
}

fn main() {
    let level = if cfg!(feature = "debugAssertions") {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    let _ = console_log::init_with_level(level);
    console_error_panic_hook::set_once();

    if let Err(e) = app_config() {
        log::error!("{e}");
    }
    dioxus::launch(App);
}
