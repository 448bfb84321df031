// SPDX-License-Identifier: MIT OR Apache-2.0

pub mod config_error;
pub mod icons;
pub mod social_auth;
pub mod ui;
