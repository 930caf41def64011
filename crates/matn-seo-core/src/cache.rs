//! Bounded cache for suggestion checks keyed by a content fingerprint.
//!
//! Suggestion mining is the expensive step of an analysis, and editors
//! re-run analyses against unchanged text constantly. The fingerprint
//! hashes a bounded prefix plus the total length, so huge documents pay
//! a fixed hashing cost.

use std::collections::HashMap;
use std::collections::VecDeque;
use std::hash::{DefaultHasher, Hash, Hasher};

use crate::checks::CheckResult;

/// Bytes of content hashed into the fingerprint.
const FINGERPRINT_PREFIX_BYTES: usize = 2048;

/// FIFO cache of suggestion check batteries.
#[derive(Debug)]
pub struct SuggestionCache {
    capacity: usize,
    order: VecDeque<u64>,
    entries: HashMap<u64, Vec<CheckResult>>,
}

impl SuggestionCache {
    /// Create a cache holding up to `capacity` entries.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            order: VecDeque::with_capacity(capacity),
            entries: HashMap::with_capacity(capacity),
        }
    }

    /// Look up the cached checks for this content, if present.
    #[must_use]
    pub fn get(&self, content: &str) -> Option<&Vec<CheckResult>> {
        self.entries.get(&fingerprint(content))
    }

    /// Store the checks for this content, evicting the oldest entry at
    /// capacity.
    pub fn insert(&mut self, content: &str, checks: Vec<CheckResult>) {
        if self.capacity == 0 {
            return;
        }
        let key = fingerprint(content);
        if self.entries.insert(key, checks).is_none() {
            self.order.push_back(key);
            if self.order.len() > self.capacity
                && let Some(oldest) = self.order.pop_front()
            {
                self.entries.remove(&oldest);
            }
        }
    }

    /// Number of cached entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Hash a char-boundary-safe prefix of the content plus its length.
fn fingerprint(content: &str) -> u64 {
    let mut end = content.len().min(FINGERPRINT_PREFIX_BYTES);
    while !content.is_char_boundary(end) {
        end -= 1;
    }
    let mut hasher = DefaultHasher::new();
    content[..end].hash(&mut hasher);
    content.len().hash(&mut hasher);
    hasher.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::{CheckResult, CheckStatus};

    fn checks(title: &str) -> Vec<CheckResult> {
        vec![CheckResult::new(CheckStatus::Success, title, "d")]
    }

    #[test]
    fn round_trips_an_entry() {
        let mut cache = SuggestionCache::new(4);
        cache.insert("content", checks("a"));
        assert_eq!(cache.get("content").unwrap()[0].title, "a");
        assert!(cache.get("other").is_none());
    }

    #[test]
    fn evicts_oldest_at_capacity() {
        let mut cache = SuggestionCache::new(2);
        cache.insert("one", checks("1"));
        cache.insert("two", checks("2"));
        cache.insert("three", checks("3"));
        assert_eq!(cache.len(), 2);
        assert!(cache.get("one").is_none());
        assert!(cache.get("two").is_some());
        assert!(cache.get("three").is_some());
    }

    #[test]
    fn reinserting_same_content_does_not_grow() {
        let mut cache = SuggestionCache::new(2);
        cache.insert("one", checks("1"));
        cache.insert("one", checks("1b"));
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get("one").unwrap()[0].title, "1b");
    }

    #[test]
    fn long_content_differing_past_the_prefix_still_distinguishes_by_length() {
        let base = "x".repeat(4096);
        let longer = "x".repeat(5000);
        let mut cache = SuggestionCache::new(4);
        cache.insert(&base, checks("base"));
        assert!(cache.get(&longer).is_none());
    }

    #[test]
    fn multibyte_boundary_is_respected() {
        let content = "م".repeat(2048);
        let mut cache = SuggestionCache::new(2);
        cache.insert(&content, checks("fa"));
        assert!(cache.get(&content).is_some());
    }

    #[test]
    fn zero_capacity_never_stores() {
        let mut cache = SuggestionCache::new(0);
        cache.insert("one", checks("1"));
        assert!(cache.is_empty());
    }
}
