//! N-gram generation and phrase frequency counting.
//!
//! Useful keyword phrases run 2–4 words, so single-word frequencies are
//! never tracked: the counter folds bigrams, trigrams, and 4-grams into
//! one map keyed by the space-joined phrase.

use std::collections::HashMap;

/// Smallest phrase length worth tracking.
pub const MIN_NGRAM: usize = 2;

/// Largest phrase length worth tracking.
pub const MAX_NGRAM: usize = 4;

/// Sliding-window n-grams over a token sequence, space-joined.
///
/// No wraparound; fewer than `n` tokens yields an empty list.
pub fn generate_ngrams(words: &[String], n: usize) -> Vec<String> {
    if n == 0 || words.len() < n {
        return Vec::new();
    }
    words.windows(n).map(|window| window.join(" ")).collect()
}

/// Count occurrences of every 2–4-word phrase in the token sequence.
#[tracing::instrument(skip_all, fields(word_count = words.len()))]
pub fn count_frequencies(words: &[String]) -> HashMap<String, u32> {
    let mut counts: HashMap<String, u32> = HashMap::new();
    for n in MIN_NGRAM..=MAX_NGRAM {
        for phrase in generate_ngrams(words, n) {
            *counts.entry(phrase).or_insert(0) += 1;
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(s: &[&str]) -> Vec<String> {
        s.iter().map(|w| (*w).to_string()).collect()
    }

    #[test]
    fn bigrams_slide_without_wraparound() {
        let grams = generate_ngrams(&words(&["a", "b", "c"]), 2);
        assert_eq!(grams, vec!["a b", "b c"]);
    }

    #[test]
    fn window_larger_than_input_is_empty() {
        assert!(generate_ngrams(&words(&["a", "b"]), 3).is_empty());
        assert!(generate_ngrams(&[], 2).is_empty());
    }

    #[test]
    fn counts_cover_lengths_two_through_four() {
        let counts = count_frequencies(&words(&["a", "b", "c", "d"]));
        assert_eq!(counts.get("a b"), Some(&1));
        assert_eq!(counts.get("a b c"), Some(&1));
        assert_eq!(counts.get("a b c d"), Some(&1));
        assert!(!counts.contains_key("a"));
    }

    #[test]
    fn repeated_phrases_accumulate() {
        let counts = count_frequencies(&words(&["garden", "design", "x", "garden", "design"]));
        assert_eq!(counts.get("garden design"), Some(&2));
    }
}
