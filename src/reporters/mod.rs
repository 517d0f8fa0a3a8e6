//! Output reporters for the assembled language profile
//!
//! Supports multiple output formats:
//! - `text` - Terminal output with colors
//! - `json` - Machine-readable JSON
//! - `markdown` - GitHub-flavored Markdown

mod json;
mod markdown;
mod text;

use crate::models::LanguageProfile;
use anyhow::{anyhow, Result};
use std::str::FromStr;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
    Markdown,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" | "terminal" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            _ => Err(anyhow!(
                "Unknown format '{}'. Valid formats: text, json, markdown",
                s
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Markdown => write!(f, "markdown"),
        }
    }
}

/// Render a language profile in the specified format. `color` only
/// affects the text format.
pub fn render(profile: &LanguageProfile, format: OutputFormat, color: bool) -> Result<String> {
    match format {
        OutputFormat::Text => text::render(profile, color),
        OutputFormat::Json => json::render(profile),
        OutputFormat::Markdown => markdown::render(profile),
    }
}

/// Get the recommended file extension for a format
#[allow(dead_code)] // Public API helper
pub fn file_extension(format: OutputFormat) -> &'static str {
    match format {
        OutputFormat::Text => "txt",
        OutputFormat::Json => "json",
        OutputFormat::Markdown => "md",
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Create a small populated LanguageProfile for reporter tests
    pub(crate) fn test_profile() -> LanguageProfile {
        use crate::models::{BucketReport, CategoryBucket};

        let mut profile = LanguageProfile::new("linux");
        profile.locale = Some("ru_RU.UTF-8".into());
        profile.keyboard_layouts = vec!["us".into(), "ru".into()];
        profile
            .browser_languages
            .insert("firefox".into(), vec!["ru-RU".into(), "en-US".into()]);
        profile.steam_language = Some("russian".into());
        profile.languages = ["Russian", "English"]
            .into_iter()
            .map(str::to_string)
            .collect();

        let mut firefox = BucketReport::new();
        firefox.insert(
            "ru".into(),
            CategoryBucket {
                count: 12,
                examples: vec!["yandex.ru".into(), "vk.ru".into()],
            },
        );
        firefox.insert(
            "de".into(),
            CategoryBucket {
                count: 2,
                examples: vec!["spiegel.de".into()],
            },
        );
        profile.history.insert("firefox".into(), firefox);

        profile.music_scripts.insert(
            "Cyrillic".into(),
            CategoryBucket {
                count: 7,
                examples: vec!["Кино".into(), "Ария".into()],
            },
        );
        profile
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!(OutputFormat::from_str("text").unwrap(), OutputFormat::Text);
        assert_eq!(OutputFormat::from_str("JSON").unwrap(), OutputFormat::Json);
        assert_eq!(
            OutputFormat::from_str("md").unwrap(),
            OutputFormat::Markdown
        );
        assert!(OutputFormat::from_str("sarif").is_err());
    }
}
