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

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Which auth screen the widget is embedded in. Selects the label table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewType {
    #[default]
    SignIn,
    SignUp,
}

impl ViewType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewType::SignIn => "sign_in",
            ViewType::SignUp => "sign_up",
        }
    }
}

impl FromStr for ViewType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "sign_in" => Ok(ViewType::SignIn),
            "sign_up" => Ok(ViewType::SignUp),
            other => Err(format!("unknown view: {other:?}")),
        }
    }
}

/// Arrangement of the provider button group.
///
/// Labels are only shown in [`SocialLayout::Vertical`]. Any direction the
/// layout container understands beyond the two named ones is carried in
/// [`SocialLayout::Other`] and forwarded untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum SocialLayout {
    Horizontal,
    #[default]
    Vertical,
    Other(String),
}

impl SocialLayout {
    pub fn as_str(&self) -> &str {
        match self {
            SocialLayout::Horizontal => "horizontal",
            SocialLayout::Vertical => "vertical",
            SocialLayout::Other(s) => s,
        }
    }

    pub fn is_vertical(&self) -> bool {
        matches!(self, SocialLayout::Vertical)
    }
}

impl From<&str> for SocialLayout {
    fn from(s: &str) -> Self {
        match s {
            "horizontal" => SocialLayout::Horizontal,
            "vertical" => SocialLayout::Vertical,
            other => SocialLayout::Other(other.to_string()),
        }
    }
}

impl FromStr for SocialLayout {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(SocialLayout::from(s))
    }
}

impl fmt::Display for SocialLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for SocialLayout {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for SocialLayout {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(SocialLayout::from(s.as_str()))
    }
}
