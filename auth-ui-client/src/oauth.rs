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

//! OAuth flow start: `/authorize`.

use auth_ui_types::{OAuthOptions, OAuthResponse, Provider};
use url::Url;

use crate::error::AuthError;
use crate::AuthApiClient;

impl AuthApiClient {
    /// Build the `/authorize` URL for `provider`.
    ///
    /// Query order is `provider`, `redirect_to`, `scopes`, then
    /// `query_params` as given. Values are percent-encoded.
    pub fn authorize_url(
        &self,
        provider: Provider,
        options: &OAuthOptions,
    ) -> Result<String, AuthError> {
        let mut params: Vec<(&str, &str)> = vec![("provider", provider.as_str())];

        if let Some(redirect_to) = options.redirect_to.as_deref() {
            validate_redirect(redirect_to)?;
            params.push(("redirect_to", redirect_to));
        }
        if let Some(scopes) = options.scopes.as_deref() {
            params.push(("scopes", scopes));
        }
        for (key, value) in &options.query_params {
            params.push((key.as_str(), value.as_str()));
        }

        let query = params
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");

        Ok(format!("{}?{}", self.url("/authorize"), query))
    }

    /// Build the authorize URL and, in the browser, navigate to it.
    pub(crate) fn start_oauth(
        &self,
        provider: Provider,
        options: &OAuthOptions,
    ) -> Result<OAuthResponse, AuthError> {
        let url = self.authorize_url(provider, options)?;
        log::debug!("Starting {provider} OAuth flow via {url}");

        if !options.skip_browser_redirect {
            redirect_browser(&url)?;
        }

        Ok(OAuthResponse { provider, url })
    }
}

fn validate_redirect(redirect_to: &str) -> Result<(), AuthError> {
    let invalid = || AuthError::InvalidRedirect(redirect_to.to_string());
    let url = Url::parse(redirect_to).map_err(|_| invalid())?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid());
    }
    match url.host_str() {
        Some(host) if !host.is_empty() => Ok(()),
        _ => Err(invalid()),
    }
}

#[cfg(target_arch = "wasm32")]
fn redirect_browser(url: &str) -> Result<(), AuthError> {
    gloo_utils::window()
        .location()
        .set_href(url)
        .map_err(|e| AuthError::Redirect(format!("{e:?}")))
}

#[cfg(not(target_arch = "wasm32"))]
fn redirect_browser(_url: &str) -> Result<(), AuthError> {
    Ok(())
}
