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

//! The provider-button click action, independent of any UI framework.
//!
//! Frontends implement [`SignInState`] over their own reactive cells and
//! call [`handle_provider_sign_in`] from the click handler.

use auth_ui_types::{OAuthOptions, Provider};

use crate::OAuthClient;

/// Where the sign-in action writes its transient state.
pub trait SignInState {
    fn set_loading(&mut self, loading: bool);
    /// Replace the current error message.
    fn set_error(&mut self, message: String);
}

/// Start the OAuth flow for `provider`.
///
/// `loading` is true for exactly the duration of the client call and is
/// reset whatever the outcome. A failure overwrites the error message; a
/// success leaves whatever message was there before.
pub async fn handle_provider_sign_in<C, S>(
    client: &C,
    provider: Provider,
    redirect_to: Option<String>,
    state: &mut S,
) where
    C: OAuthClient + ?Sized,
    S: SignInState + ?Sized,
{
    state.set_loading(true);
    let result = client
        .sign_in_with_oauth(provider, OAuthOptions::with_redirect_to(redirect_to))
        .await;
    if let Err(error) = result {
        state.set_error(error.to_string());
    }
    state.set_loading(false);
}
