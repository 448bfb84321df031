// SPDX-License-Identifier: MIT OR Apache-2.0

//! Runtime configuration read from `window.__APP_CONFIG`.
//!
//! The host page injects a frozen object before the wasm bundle loads:
//!
//! ```js
//! window.__APP_CONFIG = Object.freeze({
//!   authUrl: "https://project.example.com/auth/v1",
//!   apiKey: "public-anon-key",
//!   providers: "google,github",
//!   socialLayout: "vertical",
//!   redirectTo: "https://app.example.com/welcome",
//!   onlyThirdPartyProviders: "false",
//!   view: "sign_in",
//!   discoverProviders: "false",
//! });
//! ```

use auth_ui_client::{AuthApiClient, AuthMode};
use auth_ui_types::{split_providers, truthy, I18nVariables, Provider, SocialLayout, ViewType};
use serde::Deserialize;
use serde_wasm_bindgen::from_value as from_js_value;
use wasm_bindgen::JsValue;
use web_sys::window;

use crate::appearance::Appearance;

#[derive(Debug, Clone, Deserialize)]
pub struct RuntimeConfig {
    #[serde(rename = "authUrl")]
    pub auth_url: String,
    #[serde(rename = "apiKey")]
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub providers: String,
    #[serde(rename = "socialLayout")]
    #[serde(default)]
    pub social_layout: Option<String>,
    #[serde(rename = "redirectTo")]
    #[serde(default)]
    pub redirect_to: Option<String>,
    #[serde(rename = "onlyThirdPartyProviders")]
    #[serde(default)]
    pub only_third_party_providers: String,
    #[serde(default)]
    pub view: Option<String>,
    #[serde(rename = "discoverProviders")]
    #[serde(default)]
    pub discover_providers: String,
    #[serde(default)]
    pub i18n: Option<I18nVariables>,
    #[serde(default)]
    pub appearance: Option<Appearance>,
}

pub fn app_config() -> Result<RuntimeConfig, String> {
    let win = window().ok_or_else(|| "No window object available".to_string())?;
    let config = js_sys::Reflect::get(&win, &JsValue::from_str("__APP_CONFIG"))
        .unwrap_or(JsValue::UNDEFINED);
    if config.is_undefined() || config.is_null() {
        return Err("Runtime configuration not found (window.__APP_CONFIG missing)".to_string());
    }
    from_js_value::<RuntimeConfig>(config)
        .map_err(|e| format!("Failed to parse __APP_CONFIG: {e:?}"))
}

/// Parse provider ids, skipping (and logging) the ones we do not support.
pub fn parse_providers(ids: &[String]) -> Vec<Provider> {
    ids.iter()
        .filter_map(|id| match id.parse::<Provider>() {
            Ok(provider) => Some(provider),
            Err(e) => {
                log::warn!("Ignoring configured provider: {e}");
                None
            }
        })
        .collect()
}

pub fn configured_providers() -> Result<Vec<Provider>, String> {
    app_config().map(|c| parse_providers(&split_providers(Some(&c.providers))))
}

pub fn social_layout() -> Result<SocialLayout, String> {
    app_config().map(|c| {
        c.social_layout
            .as_deref()
            .map(SocialLayout::from)
            .unwrap_or_default()
    })
}

pub fn view() -> Result<ViewType, String> {
    app_config().and_then(|c| match c.view.as_deref() {
        Some(view) => view.parse(),
        None => Ok(ViewType::default()),
    })
}

pub fn redirect_to() -> Result<Option<String>, String> {
    app_config().map(|c| c.redirect_to.filter(|s| !s.is_empty()))
}

pub fn only_third_party_providers() -> Result<bool, String> {
    app_config().map(|c| truthy(Some(c.only_third_party_providers.as_str())))
}

pub fn discover_providers_enabled() -> Result<bool, String> {
    app_config().map(|c| truthy(Some(c.discover_providers.as_str())))
}

pub fn i18n() -> Result<I18nVariables, String> {
    app_config().map(|c| c.i18n.unwrap_or_default())
}

pub fn appearance() -> Result<Option<Appearance>, String> {
    app_config().map(|c| c.appearance)
}

pub fn auth_client() -> Result<AuthApiClient, String> {
    let config = app_config()?;
    if config.auth_url.trim().is_empty() {
        return Err("authUrl must not be empty".to_string());
    }
    let mode = match config.api_key.filter(|k| !k.is_empty()) {
        Some(key) => AuthMode::ApiKey(key),
        None => AuthMode::Anonymous,
    };
    Ok(AuthApiClient::new(&config.auth_url, mode))
}
