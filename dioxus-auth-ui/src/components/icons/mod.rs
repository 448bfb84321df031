// SPDX-License-Identifier: MIT OR Apache-2.0

//! Provider logos.
//!
//! [`provider_icon`] is the registry the provider buttons look up. Providers
//! without artwork map to `None` and their button renders without an icon.

pub mod apple;
pub mod azure;
pub mod bitbucket;
pub mod discord;
pub mod facebook;
pub mod github;
pub mod gitlab;
pub mod google;
pub mod linkedin;
pub mod notion;
pub mod slack;
pub mod spotify;
pub mod twitch;
pub mod twitter;

use auth_ui_types::Provider;
use dioxus::prelude::*;

use apple::AppleIcon;
use azure::AzureIcon;
use bitbucket::BitbucketIcon;
use discord::DiscordIcon;
use facebook::FacebookIcon;
use github::GithubIcon;
use gitlab::GitlabIcon;
use google::GoogleIcon;
use linkedin::LinkedinIcon;
use notion::NotionIcon;
use slack::SlackIcon;
use spotify::SpotifyIcon;
use twitch::TwitchIcon;
use twitter::TwitterIcon;

pub fn provider_icon(provider: Provider) -> Option<Element> {
    let icon = match provider {
        Provider::Apple => rsx! { AppleIcon {} },
        Provider::Azure => rsx! { AzureIcon {} },
        Provider::Bitbucket => rsx! { BitbucketIcon {} },
        Provider::Discord => rsx! { DiscordIcon {} },
        Provider::Facebook => rsx! { FacebookIcon {} },
        Provider::Github => rsx! { GithubIcon {} },
        Provider::Gitlab => rsx! { GitlabIcon {} },
        Provider::Google => rsx! { GoogleIcon {} },
        Provider::Linkedin => rsx! { LinkedinIcon {} },
        Provider::Notion => rsx! { NotionIcon {} },
        Provider::Slack => rsx! { SlackIcon {} },
        Provider::Spotify => rsx! { SpotifyIcon {} },
        Provider::Twitch => rsx! { TwitchIcon {} },
        Provider::Twitter => rsx! { TwitterIcon {} },
        Provider::Figma
        | Provider::Fly
        | Provider::Kakao
        | Provider::Keycloak
        | Provider::LinkedinOidc
        | Provider::SlackOidc
        | Provider::Workos
        | Provider::Zoom => return None,
    };
    Some(icon)
}
