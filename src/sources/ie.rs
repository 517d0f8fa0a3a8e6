//! Internet Explorer evidence (Windows registry)
//!
//! Accept-languages from the `AcceptLanguage` key; typed-URL history from
//! the `TypedURLs` key. Absent keys mean IE was never configured, which
//! is an empty source, not an error.

use super::registry::{Key, HKEY_CURRENT_USER};
use super::HistoryEntry;

const ACCEPT_LANGUAGE_KEY: &str =
    r"Software\Microsoft\Internet Explorer\International\AcceptLanguage";

const TYPED_URL_KEYS: &[&str] = &[
    r"Software\Microsoft\Internet Explorer\TypedURLs",
    r"Software\Microsoft\Internet Explorer\TypedURLsTime",
];

/// Raw accept-language values configured for Internet Explorer.
pub fn accept_languages() -> Vec<String> {
    let Some(key) = Key::open(HKEY_CURRENT_USER, ACCEPT_LANGUAGE_KEY) else {
        return Vec::new();
    };
    key.string_values()
        .into_iter()
        .map(|(_, value)| value)
        .collect()
}

/// Typed-URL history entries. Only values whose name starts with `url`
/// hold addresses.
pub fn typed_urls() -> Vec<HistoryEntry> {
    let mut entries = Vec::new();
    for path in TYPED_URL_KEYS {
        let Some(key) = Key::open(HKEY_CURRENT_USER, path) else {
            continue;
        };
        for (name, value) in key.string_values() {
            if name.starts_with("url") {
                entries.push(HistoryEntry::from_url(value));
            }
        }
    }
    entries
}
