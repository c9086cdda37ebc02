//! In-memory, day-keyed cache for generated insights.
//!
//! One instance is constructed at startup and shared (behind an `Arc`)
//! by every handler; the map is mutex-guarded so the cache is safe
//! under a concurrent server. Entries are keyed by
//! `(sign, language, day)`, so a new calendar day naturally misses.
//! Prior-day entries are not evicted automatically — they linger until
//! [`sweep`](InsightCache::sweep) or [`clear`](InsightCache::clear) is
//! called or the process restarts. That unbounded growth is a known,
//! intentional property of the design.

use std::collections::HashMap;
use std::sync::Mutex;

use chrono::{Local, NaiveDate};

use crate::language::Language;
use crate::zodiac::Sign;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CacheKey {
    sign: Sign,
    language: Language,
    day: NaiveDate,
}

/// Process-wide cache of one insight per (sign, language) per day.
///
/// A disabled cache is a pass-through: every `get` misses and every
/// `set` is a no-op.
#[derive(Debug)]
pub struct InsightCache {
    enabled: bool,
    entries: Mutex<HashMap<CacheKey, String>>,
}

impl InsightCache {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            entries: Mutex::new(HashMap::new()),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Cached insight for `(sign, language)` written today, if any.
    pub fn get(&self, sign: Sign, language: Language) -> Option<String> {
        self.get_on(sign, language, Local::now().date_naive())
    }

    /// Store today's insight for `(sign, language)`. Replaces any
    /// existing same-day entry.
    pub fn set(&self, sign: Sign, language: Language, insight: String) {
        self.set_on(sign, language, insight, Local::now().date_naive());
    }

    /// Drop every entry unconditionally.
    pub fn clear(&self) {
        self.entries.lock().expect("cache mutex poisoned").clear();
    }

    /// Drop entries from previous days, retaining only today's.
    pub fn sweep(&self) {
        self.sweep_on(Local::now().date_naive());
    }

    /// Number of stored entries, stale ones included.
    pub fn len(&self) -> usize {
        self.entries.lock().expect("cache mutex poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // Clock-injected variants, used by the public methods and by tests
    // that simulate day rollover.

    pub fn get_on(&self, sign: Sign, language: Language, day: NaiveDate) -> Option<String> {
        if !self.enabled {
            return None;
        }
        let entries = self.entries.lock().expect("cache mutex poisoned");
        entries.get(&CacheKey { sign, language, day }).cloned()
    }

    pub fn set_on(&self, sign: Sign, language: Language, insight: String, day: NaiveDate) {
        if !self.enabled {
            return;
        }
        let mut entries = self.entries.lock().expect("cache mutex poisoned");
        entries.insert(CacheKey { sign, language, day }, insight);
    }

    pub fn sweep_on(&self, today: NaiveDate) {
        let mut entries = self.entries.lock().expect("cache mutex poisoned");
        entries.retain(|key, _| key.day == today);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_set_then_get_same_day_hits() {
        let cache = InsightCache::new(true);
        let today = day(2024, 7, 10);
        cache.set_on(Sign::Cancer, Language::En, "insight".to_string(), today);

        assert_eq!(
            cache.get_on(Sign::Cancer, Language::En, today),
            Some("insight".to_string())
        );
    }

    #[test]
    fn test_different_language_or_sign_misses() {
        let cache = InsightCache::new(true);
        let today = day(2024, 7, 10);
        cache.set_on(Sign::Cancer, Language::En, "insight".to_string(), today);

        assert_eq!(cache.get_on(Sign::Cancer, Language::Hi, today), None);
        assert_eq!(cache.get_on(Sign::Leo, Language::En, today), None);
    }

    #[test]
    fn test_next_day_misses() {
        let cache = InsightCache::new(true);
        cache.set_on(Sign::Cancer, Language::En, "insight".to_string(), day(2024, 7, 10));

        assert_eq!(cache.get_on(Sign::Cancer, Language::En, day(2024, 7, 11)), None);
    }

    #[test]
    fn test_same_day_set_replaces() {
        let cache = InsightCache::new(true);
        let today = day(2024, 7, 10);
        cache.set_on(Sign::Cancer, Language::En, "first".to_string(), today);
        cache.set_on(Sign::Cancer, Language::En, "second".to_string(), today);

        assert_eq!(
            cache.get_on(Sign::Cancer, Language::En, today),
            Some("second".to_string())
        );
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_disabled_cache_is_passthrough() {
        let cache = InsightCache::new(false);
        let today = day(2024, 7, 10);
        cache.set_on(Sign::Cancer, Language::En, "insight".to_string(), today);

        assert_eq!(cache.get_on(Sign::Cancer, Language::En, today), None);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_sweep_drops_prior_days_only() {
        let cache = InsightCache::new(true);
        let yesterday = day(2024, 7, 9);
        let today = day(2024, 7, 10);
        cache.set_on(Sign::Cancer, Language::En, "old".to_string(), yesterday);
        cache.set_on(Sign::Leo, Language::En, "fresh".to_string(), today);
        assert_eq!(cache.len(), 2);

        cache.sweep_on(today);

        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get_on(Sign::Cancer, Language::En, yesterday), None);
        assert_eq!(cache.get_on(Sign::Leo, Language::En, today), Some("fresh".to_string()));
    }

    #[test]
    fn test_clear_drops_everything() {
        let cache = InsightCache::new(true);
        let today = day(2024, 7, 10);
        cache.set_on(Sign::Cancer, Language::En, "a".to_string(), today);
        cache.set_on(Sign::Leo, Language::Hi, "b".to_string(), day(2024, 7, 9));

        cache.clear();

        assert!(cache.is_empty());
    }

    #[test]
    fn test_stale_entries_accumulate_without_sweep() {
        let cache = InsightCache::new(true);
        cache.set_on(Sign::Cancer, Language::En, "a".to_string(), day(2024, 7, 8));
        cache.set_on(Sign::Cancer, Language::En, "b".to_string(), day(2024, 7, 9));
        cache.set_on(Sign::Cancer, Language::En, "c".to_string(), day(2024, 7, 10));

        // No automatic eviction: all three day-keyed entries remain.
        assert_eq!(cache.len(), 3);
    }
}
