// SPDX-License-Identifier: MIT OR Apache-2.0

//! dioxus-auth-ui library root.
//!
//! Re-exports public modules so that integration tests (under `tests/`) and
//! host apps can import components. The demo entry-point lives in `main.rs`.

pub mod appearance;
pub mod auth;
pub mod components;
pub mod constants;
pub mod context;

pub use appearance::Appearance;
pub use components::social_auth::SocialAuth;
pub use context::AuthClientCtx;
