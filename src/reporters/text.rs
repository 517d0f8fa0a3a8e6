//! Text (terminal) reporter with colors and formatting

use crate::classify::domains;
use crate::models::{BucketReport, LanguageProfile};
use anyhow::Result;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const CYAN: &str = "\x1b[36m";

/// Render the profile as formatted terminal output. `color` off strips
/// every ANSI sequence, for piping and log capture.
pub fn render(profile: &LanguageProfile, color: bool) -> Result<String> {
    let (bold, dim, cyan, reset) = if color {
        (BOLD, DIM, CYAN, RESET)
    } else {
        ("", "", "", "")
    };

    let mut out = String::new();

    // Header
    out.push_str(&format!("\n{bold}Linguaprint Profile{reset}\n"));
    out.push_str(&format!(
        "{dim}──────────────────────────────────────{reset}\n"
    ));
    out.push_str(&format!(
        "OS: {bold}{}{reset}  Locale: {bold}{}{reset}\n",
        profile.os,
        profile.locale.as_deref().unwrap_or("unknown")
    ));
    out.push_str(&format!(
        "{dim}Generated: {}{reset}\n\n",
        profile.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));

    // Normalized languages across every code source
    out.push_str(&format!("{bold}LANGUAGES{reset}\n"));
    if profile.languages.is_empty() {
        out.push_str(&format!("  {dim}no language evidence found{reset}\n"));
    } else {
        let names: Vec<&str> = profile.languages.iter().map(String::as_str).collect();
        out.push_str(&format!("  {cyan}{}{reset}\n", names.join(", ")));
    }
    out.push('\n');

    // Keyboard layouts
    if !profile.keyboard_layouts.is_empty() {
        out.push_str(&format!(
            "{bold}KEYBOARD LAYOUTS{reset}  {}\n\n",
            profile.keyboard_layouts.join(", ")
        ));
    }

    // Raw browser accept-language codes
    if profile.browser_languages.values().any(|v| !v.is_empty()) {
        out.push_str(&format!("{bold}BROWSER LANGUAGES{reset}\n"));
        for (browser, codes) in &profile.browser_languages {
            if !codes.is_empty() {
                out.push_str(&format!("  {:<10} {}\n", browser, codes.join(", ")));
            }
        }
        out.push('\n');
    }

    if let Some(steam) = &profile.steam_language {
        out.push_str(&format!("{bold}STEAM{reset}  {}\n\n", steam));
    }

    // History TLD buckets per source
    if !profile.history.is_empty() {
        out.push_str(&format!(
            "{bold}BROWSING HISTORY{reset} ({} classified visits)\n",
            profile.total_history_visits()
        ));
        for (source, buckets) in &profile.history {
            out.push_str(&format!("  {cyan}{}{reset}\n", source));
            if buckets.is_empty() {
                out.push_str(&format!("    {dim}no country-code domains{reset}\n"));
            }
            out.push_str(&render_buckets(buckets, dim, reset, true));
        }
        out.push('\n');
    }

    // Music-folder scripts
    if !profile.music_scripts.is_empty() {
        out.push_str(&format!("{bold}MUSIC LIBRARY SCRIPTS{reset}\n"));
        out.push_str(&render_buckets(&profile.music_scripts, dim, reset, false));
        out.push('\n');
    }

    Ok(out)
}

/// One `key x count: examples` line per bucket. History keys are TLDs and
/// get their country annotation; script keys stand on their own.
fn render_buckets(buckets: &BucketReport, dim: &str, reset: &str, tld_keys: bool) -> String {
    let mut out = String::new();
    for (key, bucket) in buckets {
        let label = if tld_keys {
            match domains::tld_tag(key) {
                Some(tag) => format!(".{} ({})", key, tag),
                None => format!(".{}", key),
            }
        } else {
            key.clone()
        };
        out.push_str(&format!(
            "    {label} x {}: {dim}{}{reset}\n",
            bucket.count,
            bucket.examples.join(", ")
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporters::tests::test_profile;

    #[test]
    fn test_text_render_sections() {
        let out = render(&test_profile(), true).unwrap();
        assert!(out.contains("Linguaprint Profile"));
        assert!(out.contains("English, Russian"));
        assert!(out.contains("yandex.ru"));
        assert!(out.contains(".ru (Russia / Russian)"));
        assert!(out.contains("Cyrillic"));
    }

    #[test]
    fn test_text_render_no_color_strips_ansi() {
        let out = render(&test_profile(), false).unwrap();
        assert!(!out.contains("\x1b["));
    }

    #[test]
    fn test_text_render_empty_profile() {
        let profile = LanguageProfile::new("linux");
        let out = render(&profile, false).unwrap();
        assert!(out.contains("no language evidence found"));
        assert!(!out.contains("BROWSING HISTORY"));
    }
}
