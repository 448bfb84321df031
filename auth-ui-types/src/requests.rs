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

//! Request types for starting an OAuth flow.

use serde::{Deserialize, Serialize};

/// Options for `GET /authorize`.
///
/// The social sign-in widget only ever fills in `redirect_to`; the other
/// fields are there for hosts that start flows themselves.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct OAuthOptions {
    /// Where the provider should send the user once authentication completes.
    #[serde(default)]
    pub redirect_to: Option<String>,

    /// Space-separated provider scopes.
    #[serde(default)]
    pub scopes: Option<String>,

    /// Extra query parameters forwarded to the provider, in order.
    #[serde(default)]
    pub query_params: Vec<(String, String)>,

    /// Build the authorize URL but do not navigate the browser to it.
    #[serde(default)]
    pub skip_browser_redirect: bool,
}

impl OAuthOptions {
    pub fn with_redirect_to(redirect_to: Option<String>) -> Self {
        Self {
            redirect_to,
            ..Default::default()
        }
    }
}
