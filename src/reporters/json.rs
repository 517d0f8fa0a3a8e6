//! JSON reporter
//!
//! Outputs the full LanguageProfile as pretty-printed JSON.
//! Useful for machine consumption, piping to jq, or further processing.

use crate::models::LanguageProfile;
use anyhow::Result;

/// Render profile as JSON
pub fn render(profile: &LanguageProfile) -> Result<String> {
    Ok(serde_json::to_string_pretty(profile)?)
}

/// Render profile as compact JSON (single line)
#[allow(dead_code)] // Public API helper
pub fn render_compact(profile: &LanguageProfile) -> Result<String> {
    Ok(serde_json::to_string(profile)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporters::tests::test_profile;

    #[test]
    fn test_json_render_valid() {
        let profile = test_profile();
        let json_str = render(&profile).expect("render JSON");
        let parsed: serde_json::Value = serde_json::from_str(&json_str).expect("parse JSON");
        assert_eq!(parsed["os"], "linux");
        assert_eq!(parsed["history"]["firefox"]["ru"]["count"], 12);
        assert_eq!(parsed["languages"][0], "English");
    }

    #[test]
    fn test_json_render_compact() {
        let profile = test_profile();
        let json_str = render_compact(&profile).expect("render compact JSON");
        assert!(!json_str.contains('\n'));
        let _: serde_json::Value = serde_json::from_str(&json_str).expect("parse compact JSON");
    }

    #[test]
    fn test_json_round_trips() {
        let profile = test_profile();
        let json_str = render(&profile).expect("render JSON");
        let back: LanguageProfile = serde_json::from_str(&json_str).expect("deserialize");
        assert_eq!(back.languages, profile.languages);
        assert_eq!(back.history, profile.history);
    }
}
