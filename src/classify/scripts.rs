//! Script detection over arbitrary text
//!
//! Matches Unicode code-point ranges against strings (file and folder
//! names) to tag candidate writing systems. Matching is substring-level:
//! a single code point inside a script's range is enough, with no minimum
//! run length, and mixed-script text reports every matching script.

use super::bucket::BucketMap;
use crate::models::BucketReport;
use std::ops::RangeInclusive;

/// Script name to code-point interval(s). A slice per script allows
/// non-contiguous blocks, though every current entry is a single interval.
const SCRIPT_RANGES: &[(&str, &[RangeInclusive<u32>])] = &[
    ("Arabic", &[0x0600..=0x06FF]),
    ("Chinese", &[0x4E00..=0x9FFF]),
    ("Cyrillic", &[0x0400..=0x04FF]),
    ("Devanagari", &[0x0900..=0x097F]),
    ("Greek", &[0x0370..=0x03FF]),
    ("Hangul", &[0xAC00..=0xD7AF]),
    ("Hebrew", &[0x0590..=0x05FF]),
    ("Thai", &[0x0E00..=0x0E7F]),
];

/// Scripts with at least one code point present in `text`, in table order.
/// Plain ASCII matches nothing.
pub fn detect(text: &str) -> Vec<&'static str> {
    SCRIPT_RANGES
        .iter()
        .filter(|(_, ranges)| {
            text.chars()
                .any(|c| ranges.iter().any(|r| r.contains(&(c as u32))))
        })
        .map(|(name, _)| *name)
        .collect()
}

/// Group entry names by detected script, keeping the 3 most frequent
/// names per script. Names are counted once per detected script; a name
/// mixing scripts contributes to each.
pub fn classify_names<'a, I>(names: I) -> BucketReport
where
    I: IntoIterator<Item = &'a str>,
{
    let mut buckets: BucketMap<&'static str, String> = BucketMap::new();
    for name in names {
        for script in detect(name) {
            buckets.record(script, name.to_string());
        }
    }
    buckets.into_report()
}
