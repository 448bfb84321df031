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

//! Label formatting for provider buttons.

use crate::i18n::I18nVariables;
use crate::provider::Provider;
use crate::view::ViewType;

/// Substitute `{key}` placeholders in `pattern`.
///
/// A key is one or more ASCII alphanumerics or underscores. Placeholders
/// whose key is not in `substitutions` are kept verbatim, as are stray
/// braces.
pub fn template(pattern: &str, substitutions: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(pattern.len());
    let mut rest = pattern;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let key_len = after
            .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
            .unwrap_or(after.len());
        let key = &after[..key_len];

        if key_len > 0 && after[key_len..].starts_with('}') {
            if let Some((_, value)) = substitutions.iter().find(|(k, _)| *k == key) {
                out.push_str(value);
                rest = &after[key_len + 1..];
                continue;
            }
        }

        out.push('{');
        rest = after;
    }

    out.push_str(rest);
    out
}

/// Lowercase `word`, then uppercase its first character.
///
/// `"GITHUB"`, `"gitHub"` and `"github"` all become `"Github"`.
pub fn capitalize(word: &str) -> String {
    let lower = word.to_lowercase();
    let mut chars = lower.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Visible text of the button for `provider` on the `view` screen.
pub fn provider_button_label(provider: Provider, view: ViewType, i18n: &I18nVariables) -> String {
    let name = capitalize(provider.as_str());
    template(i18n.social_provider_text(view), &[("provider", name.as_str())])
}
