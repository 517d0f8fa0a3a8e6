//! Bounded top-K frequency aggregation
//!
//! One generic structure shared by the domain and script classifiers:
//! per-key total counts plus a capped list of the most frequent distinct
//! example values for that key.

use crate::models::{BucketReport, CategoryBucket};
use std::collections::BTreeMap;

/// Number of example values kept per category across the tool.
pub const TOP_K: usize = 3;

/// Frequency tally of example values for one classification key.
///
/// Tallies are kept in first-seen order so that equally-frequent examples
/// rank deterministically by input order.
#[derive(Debug, Clone)]
pub struct FrequencyBucket<E> {
    count: u64,
    tallies: Vec<(E, u64)>,
}

impl<E> Default for FrequencyBucket<E> {
    fn default() -> Self {
        Self {
            count: 0,
            tallies: Vec::new(),
        }
    }
}

impl<E: Eq + Clone> FrequencyBucket<E> {
    /// Record one observation of `example`.
    pub fn record(&mut self, example: E) {
        self.count += 1;
        match self.tallies.iter_mut().find(|(value, _)| *value == example) {
            Some((_, n)) => *n += 1,
            None => self.tallies.push((example, 1)),
        }
    }

    /// Total observations recorded for this key.
    pub fn count(&self) -> u64 {
        self.count
    }

    /// The `k` most frequent distinct examples, ties broken by first-seen
    /// order (stable sort over the insertion-ordered tally list).
    pub fn top(&self, k: usize) -> Vec<E> {
        let mut ranked: Vec<&(E, u64)> = self.tallies.iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.into_iter().take(k).map(|(v, _)| v.clone()).collect()
    }
}

/// Key-to-bucket map with deterministic (sorted) key order.
///
/// Buckets grow for the lifetime of one aggregation pass only; there is no
/// eviction and no cross-run state.
#[derive(Debug, Clone)]
pub struct BucketMap<K: Ord, E> {
    buckets: BTreeMap<K, FrequencyBucket<E>>,
}

impl<K: Ord, E> Default for BucketMap<K, E> {
    fn default() -> Self {
        Self {
            buckets: BTreeMap::new(),
        }
    }
}

impl<K: Ord, E: Eq + Clone> BucketMap<K, E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one (key, example) observation.
    pub fn record(&mut self, key: K, example: E) {
        self.buckets.entry(key).or_default().record(example);
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

impl<K: Ord + Into<String>, E: Eq + Clone + Into<String>> BucketMap<K, E> {
    /// Finalize into the report shape, keeping the `TOP_K` most frequent
    /// examples per key.
    pub fn into_report(self) -> BucketReport {
        self.buckets
            .into_iter()
            .map(|(key, bucket)| {
                let examples = bucket.top(TOP_K).into_iter().map(Into::into).collect();
                (
                    key.into(),
                    CategoryBucket {
                        count: bucket.count(),
                        examples,
                    },
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_tracks_every_observation() {
        let mut bucket = FrequencyBucket::default();
        for _ in 0..5 {
            bucket.record("a");
        }
        bucket.record("b");
        assert_eq!(bucket.count(), 6);
        assert_eq!(bucket.top(3), vec!["a", "b"]);
    }

    #[test]
    fn test_top_ranks_by_frequency_not_arrival() {
        let mut bucket = FrequencyBucket::default();
        // "rare" arrives first but "common" is seen more often
        bucket.record("rare");
        for _ in 0..3 {
            bucket.record("common");
        }
        for _ in 0..2 {
            bucket.record("middle");
        }
        assert_eq!(bucket.top(3), vec!["common", "middle", "rare"]);
    }

    #[test]
    fn test_top_is_capped_and_distinct() {
        let mut bucket = FrequencyBucket::default();
        for value in ["a", "b", "c", "d", "e", "a"] {
            bucket.record(value);
        }
        let top = bucket.top(3);
        assert_eq!(top.len(), 3);
        assert_eq!(top[0], "a");
    }

    #[test]
    fn test_ties_break_by_first_seen_order() {
        let mut bucket = FrequencyBucket::default();
        for value in ["z", "y", "x"] {
            bucket.record(value);
        }
        // all tied at 1: input order must be preserved
        assert_eq!(bucket.top(3), vec!["z", "y", "x"]);
    }

    #[test]
    fn test_bucket_map_report_sorted_by_key() {
        let mut map: BucketMap<String, String> = BucketMap::new();
        map.record("ru".into(), "yandex.ru".into());
        map.record("de".into(), "spiegel.de".into());
        map.record("ru".into(), "yandex.ru".into());

        let report = map.into_report();
        let keys: Vec<&String> = report.keys().collect();
        assert_eq!(keys, vec!["de", "ru"]);
        assert_eq!(report["ru"].count, 2);
        assert_eq!(report["ru"].examples, vec!["yandex.ru"]);
    }

    #[test]
    fn test_empty_map_reports_empty() {
        let map: BucketMap<String, String> = BucketMap::new();
        assert!(map.is_empty());
        assert!(map.into_report().is_empty());
    }
}
