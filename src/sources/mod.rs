//! Evidence sources - platform and application readers
//!
//! Every reader follows the same contract: a missing source yields an
//! empty evidence set, a malformed record is skipped (logged at debug),
//! and nothing here is fatal. The only hard error in the whole collection
//! layer is running on a platform no reader supports.

pub mod chrome;
pub mod firefox;
#[cfg(target_os = "windows")]
pub mod ie;
pub mod music;
pub mod os;
#[cfg(target_os = "windows")]
pub mod registry;
pub mod steam;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("unsupported operating system: {0}")]
    UnsupportedPlatform(String),
}

/// One visited-page record from a browser history store.
///
/// Only `url` feeds classification; title and visit date are carried so a
/// future consumer can distinguish or order visits without touching the
/// readers again.
#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub url: String,
    pub title: Option<String>,
    pub visit_date: Option<i64>,
}

impl HistoryEntry {
    pub fn from_url(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            title: None,
            visit_date: None,
        }
    }
}
