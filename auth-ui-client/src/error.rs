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

//! Error types for the auth client.

use thiserror::Error;

/// Errors returned by [`AuthApiClient`](crate::AuthApiClient) methods.
///
/// The `Display` text is what the sign-in widget stores as its error state.
#[derive(Debug, Error)]
pub enum AuthError {
    /// `redirect_to` is not an absolute `http(s)` URL.
    #[error("Invalid redirect URL: {0}")]
    InvalidRedirect(String),

    /// The browser refused to navigate to the authorization page.
    #[error("Failed to redirect to provider: {0}")]
    Redirect(String),

    /// The back-end or the provider rejected the request with a message.
    #[error("{0}")]
    Provider(String),

    /// The API key is missing or rejected (HTTP 401).
    #[error("Not authenticated. Check the API key.")]
    NotAuthenticated,

    /// A server error with status code and body.
    #[error("Server error ({status}): {body}")]
    ServerError { status: u16, body: String },

    /// A network or transport error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}
