// SPDX-License-Identifier: MIT OR Apache-2.0

//! Context providers for the auth widgets.
//!
//! The auth client is shared through Dioxus's context system instead of
//! being passed down as a prop.

use std::fmt;
use std::rc::Rc;

use auth_ui_client::{AuthError, OAuthClient};
use auth_ui_types::{OAuthOptions, OAuthResponse, Provider};
use futures::future::{FutureExt, LocalBoxFuture};

/// Object-safe view of [`OAuthClient`].
trait DynOAuthClient {
    fn sign_in_boxed(
        &self,
        provider: Provider,
        options: OAuthOptions,
    ) -> LocalBoxFuture<'_, Result<OAuthResponse, AuthError>>;
}

impl<C: OAuthClient + 'static> DynOAuthClient for C {
    fn sign_in_boxed(
        &self,
        provider: Provider,
        options: OAuthOptions,
    ) -> LocalBoxFuture<'_, Result<OAuthResponse, AuthError>> {
        self.sign_in_with_oauth(provider, options).boxed_local()
    }
}

/// Auth client context. Provide it once near the root with
/// `use_context_provider(|| AuthClientCtx::new(client))`; `SocialAuth`
/// reads it with `use_context::<AuthClientCtx>()`.
///
/// Any [`OAuthClient`] can back it. Clones share the same client and
/// compare equal.
#[derive(Clone)]
pub struct AuthClientCtx {
    inner: Rc<dyn DynOAuthClient>,
}

impl AuthClientCtx {
    pub fn new<C: OAuthClient + 'static>(client: C) -> Self {
        Self {
            inner: Rc::new(client),
        }
    }
}

impl PartialEq for AuthClientCtx {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for AuthClientCtx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthClientCtx").finish_non_exhaustive()
    }
}

impl OAuthClient for AuthClientCtx {
    async fn sign_in_with_oauth(
        &self,
        provider: Provider,
        options: OAuthOptions,
    ) -> Result<OAuthResponse, AuthError> {
        self.inner.sign_in_boxed(provider, options).await
    }
}
