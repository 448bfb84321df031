// SPDX-License-Identifier: MIT OR Apache-2.0

//! Provider resolution for the host app.
//!
//! Uses the providers listed in the runtime config, or asks the auth
//! back-end which ones are enabled via [`auth_ui_client`].

use anyhow::anyhow;
use auth_ui_types::Provider;

use crate::constants::{auth_client, configured_providers, discover_providers_enabled};

pub async fn discover_providers() -> anyhow::Result<Vec<Provider>> {
    let client = auth_client().map_err(|e| anyhow!("Config error: {e}"))?;
    let settings = client.settings().await.map_err(|e| anyhow!("{e}"))?;
    Ok(settings.enabled_providers())
}

/// Providers to render: the configured list when non-empty, otherwise the
/// back-end's enabled set if discovery is switched on.
pub async fn resolve_providers() -> anyhow::Result<Vec<Provider>> {
    let configured = configured_providers().map_err(|e| anyhow!("Config error: {e}"))?;
    if !configured.is_empty() {
        return Ok(configured);
    }
    if discover_providers_enabled().map_err(|e| anyhow!("Config error: {e}"))? {
        let discovered = discover_providers().await?;
        log::info!("Discovered {} enabled OAuth providers", discovered.len());
        return Ok(discovered);
    }
    Ok(Vec::new())
}
