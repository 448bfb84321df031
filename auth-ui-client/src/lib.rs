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

//! Auth client used by the social sign-in widget.
//!
//! Works on WASM (browser) and native targets via [`reqwest`]. In the
//! browser, starting an OAuth flow navigates the window to the provider's
//! authorization page; elsewhere the authorization URL is only returned.
//!
//! # Example
//!
//! ```no_run
//! use auth_ui_client::{AuthApiClient, AuthMode, OAuthClient};
//! use auth_ui_types::{OAuthOptions, Provider};
//!
//! # async fn example() -> Result<(), auth_ui_client::AuthError> {
//! let client = AuthApiClient::new(
//!     "https://project.example.com/auth/v1",
//!     AuthMode::ApiKey("public-anon-key".to_string()),
//! );
//!
//! let enabled = client.settings().await?.enabled_providers();
//! println!("Enabled providers: {enabled:?}");
//!
//! let options = OAuthOptions::with_redirect_to(Some("https://app.example.com/welcome".into()));
//! let response = client.sign_in_with_oauth(Provider::Github, options).await?;
//! println!("Redirecting to {}", response.url);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod oauth;
pub mod settings;
pub mod sign_in;

pub use auth_ui_types;
pub use error::AuthError;
pub use sign_in::{handle_provider_sign_in, SignInState};

use auth_ui_types::{OAuthOptions, OAuthResponse, Provider};
use reqwest::Client;
use serde::Deserialize;

/// How the client identifies itself to the auth back-end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthMode {
    /// No credentials. Suitable for back-ends that expose `/settings` publicly.
    Anonymous,
    /// Send the project's public key as the `apikey` header on REST calls.
    ApiKey(String),
}

/// Starts OAuth flows.
///
/// Implementations must tolerate overlapping calls: the widget does not
/// serialize clicks, so a second provider may be started while the first
/// call is still in flight.
#[allow(async_fn_in_trait)]
pub trait OAuthClient {
    async fn sign_in_with_oauth(
        &self,
        provider: Provider,
        options: OAuthOptions,
    ) -> Result<OAuthResponse, AuthError>;
}

/// A typed client for the auth back-end.
#[derive(Debug, Clone)]
pub struct AuthApiClient {
    base_url: String,
    auth: AuthMode,
    http: Client,
}

impl AuthApiClient {
    /// Create a new client pointing at the auth back-end.
    ///
    /// # Arguments
    ///
    /// * `base_url` - e.g. `"https://project.example.com/auth/v1"`
    /// * `auth` - how to authenticate REST requests
    pub fn new(base_url: &str, auth: AuthMode) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            auth,
            http: Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a GET request with auth applied.
    pub(crate) fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.apply_auth(self.http.get(self.url(path)))
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn apply_auth(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.auth {
            AuthMode::Anonymous => builder,
            AuthMode::ApiKey(key) => builder.header("apikey", key),
        }
    }
}

impl OAuthClient for AuthApiClient {
    async fn sign_in_with_oauth(
        &self,
        provider: Provider,
        options: OAuthOptions,
    ) -> Result<OAuthResponse, AuthError> {
        self.start_oauth(provider, &options)
    }
}

/// Error bodies come in a few shapes depending on which layer rejected the
/// request; take the first human-readable field present.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    msg: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error_description: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

pub(crate) fn error_message(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.msg.or(b.message).or(b.error_description).or(b.error))
        .unwrap_or_else(|| body.to_string())
}

/// Parse a JSON body, mapping non-2xx statuses to [`AuthError`].
pub(crate) async fn parse_json_response<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, AuthError> {
    let status = response.status().as_u16();
    match status {
        200..=299 => Ok(response.json().await?),
        401 => Err(AuthError::NotAuthenticated),
        _ => {
            let text = response.text().await.unwrap_or_default();
            Err(AuthError::ServerError {
                status,
                body: error_message(&text),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = AuthApiClient::new("https://auth.example.com/auth/v1/", AuthMode::Anonymous);
        assert_eq!(client.base_url(), "https://auth.example.com/auth/v1");
        assert_eq!(client.url("/settings"), "https://auth.example.com/auth/v1/settings");
    }

    #[test]
    fn test_error_message_shapes() {
        assert_eq!(error_message(r#"{"msg":"Unsupported provider"}"#), "Unsupported provider");
        assert_eq!(
            error_message(r#"{"error":"invalid_request","error_description":"bad redirect"}"#),
            "bad redirect"
        );
        assert_eq!(error_message(r#"{"message":"Invalid API key"}"#), "Invalid API key");
        assert_eq!(error_message("Bad Gateway"), "Bad Gateway");
    }
}
