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

//! Response types returned by the auth client.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::provider::Provider;

/// Result of starting an OAuth flow.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct OAuthResponse {
    pub provider: Provider,
    /// The provider authorization URL the browser was (or should be) sent to.
    pub url: String,
}

/// Body of `GET /settings`.
///
/// ```json
/// { "external": { "google": true, "github": false, "email": true } }
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
pub struct AuthSettings {
    #[serde(default)]
    pub external: BTreeMap<String, bool>,
}

impl AuthSettings {
    /// Known providers the back-end has switched on, in [`Provider::ALL`] order.
    ///
    /// Entries that are not OAuth providers (`email`, `phone`, ...) are ignored.
    pub fn enabled_providers(&self) -> Vec<Provider> {
        Provider::ALL
            .into_iter()
            .filter(|p| self.external.get(p.as_str()).copied().unwrap_or(false))
            .collect()
    }
}
