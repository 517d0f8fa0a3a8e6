//! Core data models for Linguaprint
//!
//! These models describe the structured language profile assembled per run.
//! Everything is serde-serializable so the same object backs the text,
//! JSON, and Markdown reporters.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Aggregated count plus bounded top-example list for one classification
/// key (a TLD or a script name).
///
/// Invariants: `examples` holds at most K (currently 3) distinct values,
/// ranked by their own occurrence frequency; `count >= examples.len()`
/// whenever `count > 0`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryBucket {
    pub count: u64,
    pub examples: Vec<String>,
}

/// Map of classification key to its bucket, sorted by key for
/// deterministic output.
pub type BucketReport = BTreeMap<String, CategoryBucket>;

/// The assembled language profile for one host.
///
/// Every field is best-effort: a missing or unreadable source contributes
/// an empty value, never an error. The profile is built fresh per run and
/// carries no state between runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageProfile {
    /// Operating system name (`linux`, `windows`).
    pub os: String,
    pub generated_at: DateTime<Utc>,
    /// Primary locale code (e.g. `en_US.UTF-8`).
    pub locale: Option<String>,
    /// Installed or active keyboard layout labels.
    pub keyboard_layouts: Vec<String>,
    /// Raw accept-language codes per browser, in discovery order.
    pub browser_languages: BTreeMap<String, Vec<String>>,
    /// Language setting extracted from the Steam client config, if present.
    pub steam_language: Option<String>,
    /// Normalized human-readable language names across all code sources.
    pub languages: BTreeSet<String>,
    /// Country-code TLD buckets per browser history source.
    pub history: BTreeMap<String, BucketReport>,
    /// Script buckets from the music-folder name scan.
    pub music_scripts: BucketReport,
}

impl LanguageProfile {
    /// An empty profile shell for the given OS; the builder fills it in.
    pub fn new(os: &str) -> Self {
        Self {
            os: os.to_string(),
            generated_at: Utc::now(),
            locale: None,
            keyboard_layouts: Vec::new(),
            browser_languages: BTreeMap::new(),
            steam_language: None,
            languages: BTreeSet::new(),
            history: BTreeMap::new(),
            music_scripts: BTreeMap::new(),
        }
    }

    /// Total number of classified history visits across all sources.
    pub fn total_history_visits(&self) -> u64 {
        self.history
            .values()
            .flat_map(|buckets| buckets.values())
            .map(|b| b.count)
            .sum()
    }
}
