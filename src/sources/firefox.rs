//! Firefox evidence: accept-language preferences and browsing history
//!
//! Profiles live under `~/.mozilla/firefox`, one directory per profile.
//! Languages come from the `intl.accept_languages` pref in `prefs.js`;
//! history comes from `places.sqlite`.

use super::HistoryEntry;
use anyhow::Result;
use rusqlite::OpenFlags;
use std::path::{Path, PathBuf};

pub(crate) fn profiles_root() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".mozilla").join("firefox"))
}

/// Raw `intl.accept_languages` codes across every profile, deduplicated
/// in discovery order. Empty when Firefox is not installed.
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
        let prefs = entry.path().join("prefs.js");
        let Ok(content) = std::fs::read_to_string(&prefs) else {
            continue;
        };
        for line in content.lines() {
            if !line.contains("intl.accept_languages") {
                continue;
            }
            let Some(codes) = pref_value(line) else {
                continue;
            };
            for code in codes.split(',') {
                let code = code.trim();
                if !code.is_empty() && !languages.iter().any(|l| l == code) {
                    languages.push(code.to_string());
                }
            }
        }
    }
    languages
}

/// The second quoted string on a prefs.js line:
/// `user_pref("intl.accept_languages", "en-US,en");` -> `en-US,en`.
fn pref_value(line: &str) -> Option<&str> {
    line.split('"').nth(3)
}

/// Visited URLs from every profile's `places.sqlite`. Unreadable or
/// locked databases are skipped.
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
    for profile in dir.flatten() {
        let db = profile.path().join("places.sqlite");
        if !db.is_file() {
            continue;
        }
        match read_places(&db) {
            Ok(mut rows) => entries.append(&mut rows),
            Err(err) => {
                tracing::debug!(db = %db.display(), %err, "skipping unreadable places.sqlite")
            }
        }
    }
    entries
}

fn read_places(db: &Path) -> Result<Vec<HistoryEntry>> {
    let conn = rusqlite::Connection::open_with_flags(db, OpenFlags::SQLITE_OPEN_READ_ONLY)?;
    let mut stmt = conn.prepare(
        "SELECT p.url, p.title, v.visit_date
         FROM moz_places p
         JOIN moz_historyvisits v ON p.id = v.place_id",
    )?;
    let rows = stmt.query_map([], |row| {
        Ok(HistoryEntry {
            url: row.get(0)?,
            title: row.get(1)?,
            visit_date: row.get(2)?,
        })
    })?;
    // a single bad row is skipped, not fatal for the profile
    Ok(rows.filter_map(|r| r.ok()).collect())
}
