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

//! Provider discovery: `/settings`.

use auth_ui_types::AuthSettings;

use crate::error::AuthError;
use crate::{parse_json_response, AuthApiClient};

impl AuthApiClient {
    /// Fetch the back-end's public settings.
    ///
    /// Calls `GET /settings`. The `external` map tells which OAuth providers
    /// are switched on; see [`AuthSettings::enabled_providers`].
    pub async fn settings(&self) -> Result<AuthSettings, AuthError> {
        let response = self.get("/settings").send().await.inspect_err(|e| {
            log::warn!("Failed to reach {}: {e}", self.url("/settings"));
        })?;
        parse_json_response(response).await.inspect_err(|e| {
            log::warn!("Auth settings request rejected: {e}");
        })
    }
}
