//! Report builder
//!
//! Orchestrates the evidence sources, feeds their output through the
//! classification core, and assembles the final `LanguageProfile`. A
//! missing or unreadable source contributes an empty evidence set; the
//! builder never aborts mid-collection. The one hard error is an
//! unsupported platform, raised before any collaborator runs.

use crate::classify::{domains, languages, scripts};
use crate::models::{BucketReport, LanguageProfile};
use crate::sources::{music, steam, HistoryEntry, SourceError};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Knobs for one profile run.
#[derive(Debug, Clone, Default)]
pub struct ProfileOptions {
    /// Override of the scanned music folder.
    pub music_dir: Option<PathBuf>,
    /// Skip browser-history classification.
    pub skip_history: bool,
    /// Skip the music-folder scan.
    pub skip_music: bool,
}

/// Raw evidence gathered from every available source before any
/// classification. Items are immutable and live only for this run.
#[derive(Debug, Default)]
struct RawSignals {
    locale: Option<String>,
    keyboard_layouts: Vec<String>,
    installed_locales: Vec<String>,
    browser_languages: BTreeMap<String, Vec<String>>,
    steam_language: Option<String>,
    history: BTreeMap<String, Vec<HistoryEntry>>,
}

/// Build the language profile for this host.
pub fn build(options: &ProfileOptions) -> Result<LanguageProfile, SourceError> {
    #[cfg(any(target_os = "linux", target_os = "windows"))]
    {
        Ok(assemble(collect(options), options))
    }
    #[cfg(not(any(target_os = "linux", target_os = "windows")))]
    {
        let _ = options;
        Err(SourceError::UnsupportedPlatform(
            std::env::consts::OS.to_string(),
        ))
    }
}

#[cfg(target_os = "linux")]
fn collect(options: &ProfileOptions) -> RawSignals {
    use crate::sources::{chrome, firefox, os};

    let mut raw = RawSignals {
        locale: os::primary_locale(),
        keyboard_layouts: os::keyboard_layouts(),
        installed_locales: os::installed_locales(),
        steam_language: steam::language(),
        ..Default::default()
    };
    raw.browser_languages
        .insert("firefox".into(), firefox::accept_languages());
    raw.browser_languages
        .insert("chrome".into(), chrome::accept_languages());
    if !options.skip_history {
        raw.history.insert("firefox".into(), firefox::history());
        raw.history.insert("chrome".into(), chrome::history());
    }
    raw
}

#[cfg(target_os = "windows")]
fn collect(options: &ProfileOptions) -> RawSignals {
    use crate::sources::{ie, os};

    let mut raw = RawSignals {
        locale: os::primary_locale(),
        keyboard_layouts: os::keyboard_layouts(),
        installed_locales: os::installed_locales(),
        steam_language: steam::language(),
        ..Default::default()
    };
    raw.browser_languages
        .insert("internet_explorer".into(), ie::accept_languages());
    if !options.skip_history {
        raw.history
            .insert("internet_explorer".into(), ie::typed_urls());
    }
    raw
}

/// Run the classifiers over collected evidence. Pure and synchronous:
/// identical evidence always yields identical buckets.
fn assemble(raw: RawSignals, options: &ProfileOptions) -> LanguageProfile {
    let mut profile = LanguageProfile::new(std::env::consts::OS);

    // every locale-code observation funnels through one normalization pass
    let mut codes: Vec<&str> = Vec::new();
    codes.extend(raw.locale.as_deref());
    codes.extend(raw.installed_locales.iter().map(String::as_str));
    codes.extend(
        raw.browser_languages
            .values()
            .flatten()
            .map(String::as_str),
    );
    codes.extend(raw.steam_language.as_deref());
    profile.languages = languages::normalize(codes)
        .into_iter()
        .map(str::to_string)
        .collect();

    profile.history = raw
        .history
        .iter()
        .map(|(source, entries)| {
            let urls = entries.iter().map(|e| e.url.as_str());
            (source.clone(), domains::classify_urls(urls))
        })
        .collect();

    profile.music_scripts = if options.skip_music {
        BucketReport::new()
    } else {
        let names = options
            .music_dir
            .clone()
            .or_else(music::default_dir)
            .map(|dir| music::entry_names(&dir))
            .unwrap_or_default();
        scripts::classify_names(names.iter().map(String::as_str))
    };

    profile.locale = raw.locale;
    profile.keyboard_layouts = raw.keyboard_layouts;
    profile.browser_languages = raw.browser_languages;
    profile.steam_language = raw.steam_language;
    profile
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::HistoryEntry;

    fn sample_signals() -> RawSignals {
        let mut raw = RawSignals {
            locale: Some("ru_RU.UTF-8".into()),
            keyboard_layouts: vec!["us".into(), "ru".into()],
            installed_locales: vec!["C".into(), "en_US.utf8".into(), "ru_RU.utf8".into()],
            steam_language: Some("russian".into()),
            ..Default::default()
        };
        raw.browser_languages
            .insert("firefox".into(), vec!["en-US".into(), "en".into()]);
        raw.history.insert(
            "firefox".into(),
            vec![
                HistoryEntry::from_url("https://yandex.ru/"),
                HistoryEntry::from_url("https://yandex.ru/maps"),
                HistoryEntry::from_url("https://google.com/"),
            ],
        );
        raw
    }

    #[test]
    fn test_assemble_normalizes_across_sources() {
        let options = ProfileOptions {
            skip_music: true,
            ..Default::default()
        };
        let profile = assemble(sample_signals(), &options);
        assert!(profile.languages.contains("Russian"));
        assert!(profile.languages.contains("English"));
        // the Steam word and the C locale contribute nothing
        assert_eq!(profile.languages.len(), 2);
    }

    #[test]
    fn test_assemble_classifies_history_per_source() {
        let options = ProfileOptions {
            skip_music: true,
            ..Default::default()
        };
        let profile = assemble(sample_signals(), &options);
        let firefox = &profile.history["firefox"];
        assert_eq!(firefox.len(), 1);
        assert_eq!(firefox["ru"].count, 2);
        assert_eq!(firefox["ru"].examples, vec!["yandex.ru"]);
    }

    #[test]
    fn test_assemble_is_idempotent() {
        let options = ProfileOptions {
            skip_music: true,
            ..Default::default()
        };
        let first = assemble(sample_signals(), &options);
        let second = assemble(sample_signals(), &options);
        assert_eq!(first.languages, second.languages);
        assert_eq!(first.history, second.history);
        assert_eq!(first.music_scripts, second.music_scripts);
    }

    #[test]
    fn test_assemble_empty_signals_is_valid_profile() {
        let options = ProfileOptions {
            skip_music: true,
            ..Default::default()
        };
        let profile = assemble(RawSignals::default(), &options);
        assert!(profile.languages.is_empty());
        assert!(profile.history.is_empty());
        assert!(profile.locale.is_none());
    }

    #[test]
    fn test_music_dir_override_feeds_script_buckets() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(dir.path().join("Ария.mp3"), b"").expect("write");
        std::fs::write(dir.path().join("plain.mp3"), b"").expect("write");

        let options = ProfileOptions {
            music_dir: Some(dir.path().to_path_buf()),
            skip_history: true,
            skip_music: false,
        };
        let profile = assemble(RawSignals::default(), &options);
        assert_eq!(profile.music_scripts["Cyrillic"].count, 1);
        assert_eq!(
            profile.music_scripts["Cyrillic"].examples,
            vec!["Ария.mp3"]
        );
    }
}
