//! Steam client language setting
//!
//! Steam stores the UI language in `config/config.vdf` as a
//! `"Language" "<value>"` pair. The value is a full word ("russian",
//! "schinese"), not an ISO code.

use regex::Regex;
use std::path::PathBuf;
use std::sync::OnceLock;

/// Candidate config.vdf locations for this platform, in probe order.
pub(crate) fn config_paths() -> Vec<PathBuf> {
    if cfg!(windows) {
        std::env::var("ProgramFiles(x86)")
            .map(|pf| vec![PathBuf::from(pf).join(r"Steam\config\config.vdf")])
            .unwrap_or_default()
    } else {
        dirs::home_dir()
            .map(|home| {
                vec![
                    home.join(".steam/steam/config/config.vdf"),
                    home.join(".local/share/Steam/config/config.vdf"),
                ]
            })
            .unwrap_or_default()
    }
}

/// Language code from the first readable config.vdf, if any.
pub fn language() -> Option<String> {
    config_paths()
        .into_iter()
        .find_map(|path| std::fs::read_to_string(path).ok())
        .and_then(|config| extract_language(&config))
}

/// Match the `"Language" "<value>"` line in a VDF blob.
pub fn extract_language(config: &str) -> Option<String> {
    static LANGUAGE_RE: OnceLock<Regex> = OnceLock::new();
    let re = LANGUAGE_RE
        .get_or_init(|| Regex::new(r#""Language"\s+"(\w+)""#).expect("static regex compiles"));
    re.captures(config).map(|caps| caps[1].to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_language_from_vdf_blob() {
        let config = r#""InstallConfigStore"
{
	"Software"
	{
		"Valve"
		{
			"Steam"
			{
				"Language"		"russian"
				"AutoUpdateWindowEnabled"		"0"
			}
		}
	}
}"#;
        assert_eq!(extract_language(config), Some("russian".to_string()));
    }

    #[test]
    fn test_extract_language_absent() {
        assert_eq!(extract_language("\"Steam\" {}"), None);
        assert_eq!(extract_language(""), None);
    }

    #[test]
    fn test_extract_language_ignores_similar_keys() {
        let config = r#""ShaderLanguageVersion"	"5""#;
        assert_eq!(extract_language(config), None);
    }
}
