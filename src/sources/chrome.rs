//! Chrome evidence: accept-language preferences and browsing history
//!
//! Profiles live under `~/.config/google-chrome` (`Default`, `Profile 1`,
//! ...). Languages come from the `intl.accept_languages` entry of the
//! `Preferences` JSON; history comes from the `History` SQLite database,
//! which must be copied aside first because a running Chrome holds a lock
//! on it.

use super::HistoryEntry;
use anyhow::{Context, Result};
use rusqlite::OpenFlags;
use std::path::{Path, PathBuf};

pub(crate) fn profiles_root() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".config").join("google-chrome"))
}

/// Raw `intl.accept_languages` codes across every profile, deduplicated
/// in discovery order. Empty when Chrome is not installed.
pub fn accept_languages() -> Vec<String> {
    profiles_root()
        .map(|root| accept_languages_in(&root))
        .unwrap_or_default()
}

pub fn accept_languages_in(root: &Path) -> Vec<String> {
    let mut languages: Vec<String> = Vec::new();
    let Ok(entries) = std::fs::read_dir(root) else {
        return languages;
    };
    for entry in entries.flatten() {
        let preferences = entry.path().join("Preferences");
        let Ok(content) = std::fs::read_to_string(&preferences) else {
            continue;
        };
        let Some(codes) = preference_languages(&content) else {
            tracing::debug!(path = %preferences.display(), "no accept_languages in Preferences");
            continue;
        };
        for code in codes.split(',') {
            let code = code.trim();
            if !code.is_empty() && !languages.iter().any(|l| l == code) {
                languages.push(code.to_string());
            }
        }
    }
    languages
}

/// `intl.accept_languages` from a Preferences JSON blob. Corrupt JSON is
/// treated the same as an absent setting.
fn preference_languages(content: &str) -> Option<String> {
    let prefs: serde_json::Value = serde_json::from_str(content).ok()?;
    prefs
        .pointer("/intl/accept_languages")
        .and_then(|v| v.as_str())
        .map(str::to_string)
}

/// Visited URLs from every profile's `History` database.
pub fn history() -> Vec<HistoryEntry> {
    profiles_root()
        .map(|root| history_in(&root))
        .unwrap_or_default()
}

pub fn history_in(root: &Path) -> Vec<HistoryEntry> {
    let mut entries = Vec::new();
    let Ok(dir) = std::fs::read_dir(root) else {
        return entries;
    };
    for (index, profile) in dir.flatten().enumerate() {
        let db = profile.path().join("History");
        if !db.is_file() {
            continue;
        }
        match read_history(&db, index) {
            Ok(mut rows) => entries.append(&mut rows),
            Err(err) => {
                tracing::debug!(db = %db.display(), %err, "skipping unreadable History database")
            }
        }
    }
    entries
}

fn read_history(db: &Path, index: usize) -> Result<Vec<HistoryEntry>> {
    // Chrome keeps the live database locked; read a throwaway copy.
    let scratch = std::env::temp_dir().join(format!(
        "linguaprint-history-{}-{}",
        std::process::id(),
        index
    ));
    let result = std::fs::copy(db, &scratch)
        .with_context(|| format!("copying {}", db.display()))
        .and_then(|_| read_history_copy(&scratch));
    let _ = std::fs::remove_file(&scratch);
    result
}

fn read_history_copy(db: &Path) -> Result<Vec<HistoryEntry>> {
    let conn = rusqlite::Connection::open_with_flags(db, OpenFlags::SQLITE_OPEN_READ_ONLY)?;
    let mut stmt = conn.prepare("SELECT url, title, last_visit_time FROM urls")?;
    let rows = stmt.query_map([], |row| {
        Ok(HistoryEntry {
            url: row.get(0)?,
            title: row.get(1)?,
            visit_date: row.get(2)?,
        })
    })?;
    Ok(rows.filter_map(|r| r.ok()).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_preference_languages_extraction() {
        let json = r#"{"intl": {"accept_languages": "de-DE,de,en-US"}, "other": 1}"#;
        assert_eq!(
            preference_languages(json),
            Some("de-DE,de,en-US".to_string())
        );
    }

    #[test]
    fn test_corrupt_preferences_json_is_skipped() {
        assert_eq!(preference_languages("{not json"), None);
        assert_eq!(preference_languages(r#"{"intl": {}}"#), None);
    }

    #[test]
    fn test_accept_languages_across_profiles() {
        let dir = tempfile::tempdir().expect("tempdir");
        let default = dir.path().join("Default");
        fs::create_dir_all(&default).expect("mkdir");
        fs::write(
            default.join("Preferences"),
            r#"{"intl": {"accept_languages": "pl-PL,pl"}}"#,
        )
        .expect("write prefs");
        let broken = dir.path().join("Profile 1");
        fs::create_dir_all(&broken).expect("mkdir");
        fs::write(broken.join("Preferences"), "{corrupt").expect("write prefs");

        let mut langs = accept_languages_in(dir.path());
        langs.sort();
        assert_eq!(langs, vec!["pl", "pl-PL"]);
    }

    #[test]
    fn test_history_reads_urls_table() {
        let dir = tempfile::tempdir().expect("tempdir");
        let default = dir.path().join("Default");
        fs::create_dir_all(&default).expect("mkdir");
        let conn = rusqlite::Connection::open(default.join("History")).expect("create db");
        conn.execute_batch(
            "CREATE TABLE urls (id INTEGER PRIMARY KEY, url TEXT, title TEXT, last_visit_time INTEGER);
             INSERT INTO urls VALUES (1, 'https://onet.pl/', 'Onet', 13350000000000000);
             INSERT INTO urls VALUES (2, 'https://google.com/', 'Google', 13350000001000000);",
        )
        .expect("seed db");
        drop(conn);

        let entries = history_in(dir.path());
        assert_eq!(entries.len(), 2);
        assert!(entries.iter().any(|e| e.url == "https://onet.pl/"));
    }

    #[test]
    fn test_missing_root_is_empty() {
        let dir = tempfile::tempdir().expect("tempdir");
        assert!(history_in(&dir.path().join("absent")).is_empty());
        assert!(accept_languages_in(&dir.path().join("absent")).is_empty());
    }
}
