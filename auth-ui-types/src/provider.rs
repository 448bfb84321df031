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

//! OAuth identity vendors the widget can render a button for.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A supported OAuth provider.
///
/// The set is closed: anything the auth back-end does not know how to
/// start a flow for is rejected at parse time instead of at click time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Provider {
    Apple,
    Azure,
    Bitbucket,
    Discord,
    Facebook,
    Figma,
    Fly,
    Github,
    Gitlab,
    Google,
    Kakao,
    Keycloak,
    Linkedin,
    LinkedinOidc,
    Notion,
    Slack,
    SlackOidc,
    Spotify,
    Twitch,
    Twitter,
    Workos,
    Zoom,
}

impl Provider {
    /// Every provider, in identifier order.
    pub const ALL: [Provider; 22] = [
        Provider::Apple,
        Provider::Azure,
        Provider::Bitbucket,
        Provider::Discord,
        Provider::Facebook,
        Provider::Figma,
        Provider::Fly,
        Provider::Github,
        Provider::Gitlab,
        Provider::Google,
        Provider::Kakao,
        Provider::Keycloak,
        Provider::Linkedin,
        Provider::LinkedinOidc,
        Provider::Notion,
        Provider::Slack,
        Provider::SlackOidc,
        Provider::Spotify,
        Provider::Twitch,
        Provider::Twitter,
        Provider::Workos,
        Provider::Zoom,
    ];

    /// The identifier sent to the auth back-end.
    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::Apple => "apple",
            Provider::Azure => "azure",
            Provider::Bitbucket => "bitbucket",
            Provider::Discord => "discord",
            Provider::Facebook => "facebook",
            Provider::Figma => "figma",
            Provider::Fly => "fly",
            Provider::Github => "github",
            Provider::Gitlab => "gitlab",
            Provider::Google => "google",
            Provider::Kakao => "kakao",
            Provider::Keycloak => "keycloak",
            Provider::Linkedin => "linkedin",
            Provider::LinkedinOidc => "linkedin_oidc",
            Provider::Notion => "notion",
            Provider::Slack => "slack",
            Provider::SlackOidc => "slack_oidc",
            Provider::Spotify => "spotify",
            Provider::Twitch => "twitch",
            Provider::Twitter => "twitter",
            Provider::Workos => "workos",
            Provider::Zoom => "zoom",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a provider identifier is not in [`Provider::ALL`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown OAuth provider: {0:?}")]
pub struct ParseProviderError(pub String);

impl FromStr for Provider {
    type Err = ParseProviderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s.trim().to_lowercase();
        Provider::ALL
            .into_iter()
            .find(|p| p.as_str() == id)
            .ok_or_else(|| ParseProviderError(s.to_string()))
    }
}
