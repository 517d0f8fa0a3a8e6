//! Markdown reporter for GitHub-flavored Markdown output
//!
//! Generates reports suitable for case notes, tickets, and wikis.

use crate::classify::domains;
use crate::models::{BucketReport, LanguageProfile};
use anyhow::Result;

/// Render profile as GitHub-flavored Markdown
pub fn render(profile: &LanguageProfile) -> Result<String> {
    let mut md = String::new();

    md.push_str(&render_header(profile));
    md.push('\n');
    md.push_str(&render_signals(profile));
    md.push('\n');
    md.push_str(&render_languages(profile));
    md.push('\n');
    md.push_str(&render_history(profile));
    md.push('\n');
    md.push_str(&render_music(profile));

    Ok(md)
}

fn render_header(profile: &LanguageProfile) -> String {
    format!(
        r#"# Linguaprint Language Profile

**OS:** {} | **Locale:** {}

Generated: {}
"#,
        profile.os,
        profile.locale.as_deref().unwrap_or("unknown"),
        profile.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    )
}

fn render_signals(profile: &LanguageProfile) -> String {
    let mut md = String::from("## Raw Signals\n\n| Source | Value |\n|--------|-------|\n");
    md.push_str(&format!(
        "| Keyboard layouts | {} |\n",
        non_empty(&profile.keyboard_layouts.join(", "))
    ));
    for (browser, codes) in &profile.browser_languages {
        md.push_str(&format!(
            "| {} accept-languages | {} |\n",
            browser,
            non_empty(&codes.join(", "))
        ));
    }
    md.push_str(&format!(
        "| Steam language | {} |\n",
        non_empty(profile.steam_language.as_deref().unwrap_or(""))
    ));
    md
}

fn render_languages(profile: &LanguageProfile) -> String {
    let mut md = String::from("## Languages\n\n");
    if profile.languages.is_empty() {
        md.push_str("No language evidence found.\n");
        return md;
    }
    for language in &profile.languages {
        md.push_str(&format!("- {}\n", language));
    }
    md
}

fn render_history(profile: &LanguageProfile) -> String {
    let mut md = String::from("## Browsing History\n\n");
    if profile.history.is_empty() {
        md.push_str("History collection skipped or no browsers found.\n");
        return md;
    }
    for (source, buckets) in &profile.history {
        md.push_str(&format!("### {}\n\n", source));
        if buckets.is_empty() {
            md.push_str("No country-code domains visited.\n\n");
            continue;
        }
        md.push_str(&render_bucket_table(buckets, true));
        md.push('\n');
    }
    md
}

fn render_music(profile: &LanguageProfile) -> String {
    let mut md = String::from("## Music Library Scripts\n\n");
    if profile.music_scripts.is_empty() {
        md.push_str("No non-Latin scripts found.\n");
        return md;
    }
    md.push_str(&render_bucket_table(&profile.music_scripts, false));
    md
}

fn render_bucket_table(buckets: &BucketReport, tld_keys: bool) -> String {
    let mut md = String::from("| Category | Count | Top examples |\n|----------|-------|--------------|\n");
    for (key, bucket) in buckets {
        let label = if tld_keys {
            match domains::tld_tag(key) {
                Some(tag) => format!("`.{}` ({})", key, tag),
                None => format!("`.{}`", key),
            }
        } else {
            key.clone()
        };
        md.push_str(&format!(
            "| {} | {} | {} |\n",
            label,
            bucket.count,
            bucket.examples.join(", ")
        ));
    }
    md
}

fn non_empty(value: &str) -> &str {
    if value.is_empty() {
        "(none)"
    } else {
        value
    }
}
