//! ISO-639 normalization of raw locale codes
//!
//! Maps codes like `en_US` or `fr-FR` to human-readable language names,
//! deduplicating across sources. Unrecognized codes are silently dropped:
//! absence of a match is expected for malformed or unsupported codes.

use std::collections::BTreeSet;

/// ISO 639-1 two-letter codes to English display names. Sorted by code
/// for binary search.
const ISO_639: &[(&str, &str)] = &[
    ("af", "Afrikaans"),
    ("ar", "Arabic"),
    ("be", "Belarusian"),
    ("bg", "Bulgarian"),
    ("bn", "Bengali"),
    ("bs", "Bosnian"),
    ("ca", "Catalan"),
    ("cs", "Czech"),
    ("da", "Danish"),
    ("de", "German"),
    ("el", "Greek"),
    ("en", "English"),
    ("es", "Spanish"),
    ("et", "Estonian"),
    ("fa", "Persian"),
    ("fi", "Finnish"),
    ("fr", "French"),
    ("he", "Hebrew"),
    ("hi", "Hindi"),
    ("hr", "Croatian"),
    ("hu", "Hungarian"),
    ("id", "Indonesian"),
    ("is", "Icelandic"),
    ("it", "Italian"),
    ("ja", "Japanese"),
    ("ka", "Georgian"),
    ("kk", "Kazakh"),
    ("ko", "Korean"),
    ("lt", "Lithuanian"),
    ("lv", "Latvian"),
    ("mk", "Macedonian"),
    ("ms", "Malay"),
    ("nb", "Norwegian Bokmål"),
    ("nl", "Dutch"),
    ("no", "Norwegian"),
    ("pl", "Polish"),
    ("pt", "Portuguese"),
    ("ro", "Romanian"),
    ("ru", "Russian"),
    ("sk", "Slovak"),
    ("sl", "Slovenian"),
    ("sq", "Albanian"),
    ("sr", "Serbian"),
    ("sv", "Swedish"),
    ("sw", "Swahili"),
    ("ta", "Tamil"),
    ("th", "Thai"),
    ("tl", "Tagalog"),
    ("tr", "Turkish"),
    ("uk", "Ukrainian"),
    ("ur", "Urdu"),
    ("vi", "Vietnamese"),
    ("zh", "Chinese"),
];

/// Display name for a two-letter language code, case-insensitive.
pub fn language_name(code: &str) -> Option<&'static str> {
    let lower = code.to_ascii_lowercase();
    ISO_639
        .binary_search_by_key(&lower.as_str(), |&(c, _)| c)
        .ok()
        .map(|i| ISO_639[i].1)
}

/// Normalize raw locale codes into a deduplicated set of display names.
///
/// The language part is the substring before the first `_` or `-`
/// separator; anything the ISO-639 table does not know contributes
/// nothing.
pub fn normalize<'a, I>(codes: I) -> BTreeSet<&'static str>
where
    I: IntoIterator<Item = &'a str>,
{
    codes
        .into_iter()
        .filter_map(|code| {
            let lang = code.split(['_', '-']).next().unwrap_or(code);
            language_name(lang.trim())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iso_table_is_sorted() {
        for pair in ISO_639.windows(2) {
            assert!(pair[0].0 < pair[1].0, "table out of order at {:?}", pair[1]);
        }
    }

    #[test]
    fn test_normalize_drops_unknown_codes() {
        let names = normalize(["en_US", "xx_YY", "fr-FR"]);
        let expected: BTreeSet<&str> = ["English", "French"].into_iter().collect();
        assert_eq!(names, expected);
    }

    #[test]
    fn test_normalize_deduplicates_across_variants() {
        let names = normalize(["en_US", "en_GB", "en"]);
        assert_eq!(names.len(), 1);
        assert!(names.contains("English"));
    }

    #[test]
    fn test_normalize_handles_both_separators_and_case() {
        let names = normalize(["RU_ru", "de-AT", "uk_UA.UTF-8"]);
        assert!(names.contains("Russian"));
        assert!(names.contains("German"));
        assert!(names.contains("Ukrainian"));
    }

    #[test]
    fn test_normalize_empty_input() {
        assert!(normalize([]).is_empty());
    }

    #[test]
    fn test_full_words_are_not_codes() {
        // Steam stores a full word ("russian"); it is not an ISO code and
        // must be dropped here, not mis-mapped
        assert!(normalize(["russian"]).is_empty());
    }
}
