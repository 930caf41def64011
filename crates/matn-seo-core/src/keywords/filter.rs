//! Candidate-phrase filtering.
//!
//! Rejects phrases that cannot work as keywords before any scoring
//! happens: repeated words, non-meaningful constituents, dangling
//! grammatical particles at either edge, and noise below the frequency
//! floor.

use std::collections::HashMap;

use crate::dictionaries::boundary_words::{has_dangling_boundary, is_stop_word};

/// Minimum occurrences for a phrase to survive.
const MIN_FREQUENCY: u32 = 2;

/// Minimum phrase length in characters.
const MIN_PHRASE_CHARS: usize = 3;

/// Mixed-script words shorter than this are treated as typing noise.
const MIN_MIXED_SCRIPT_CHARS: usize = 6;

/// Filter a phrase-frequency map down to plausible keyword candidates.
#[tracing::instrument(skip_all, fields(candidates = counts.len()))]
pub fn filter_candidates(counts: &HashMap<String, u32>) -> HashMap<String, u32> {
    counts
        .iter()
        .filter(|(phrase, frequency)| **frequency >= MIN_FREQUENCY && is_candidate(phrase))
        .map(|(phrase, frequency)| (phrase.clone(), *frequency))
        .collect()
}

/// Check a single phrase against the structural rules.
pub fn is_candidate(phrase: &str) -> bool {
    if phrase.chars().count() < MIN_PHRASE_CHARS {
        return false;
    }

    let words: Vec<String> = phrase.split(' ').map(str::to_string).collect();

    if has_repeated_word(&words) {
        return false;
    }
    if words.iter().any(|word| !is_meaningful_word(word)) {
        return false;
    }
    if has_dangling_boundary(&words) {
        return false;
    }
    // A phrase made entirely of function words says nothing.
    if words.iter().all(|word| is_stop_word(word)) {
        return false;
    }

    true
}

/// Check whether a word can contribute to a keyword phrase.
pub fn is_meaningful_word(word: &str) -> bool {
    let char_count = word.chars().count();
    if char_count <= 1 {
        return false;
    }
    if word.chars().all(|c| c.is_ascii_digit()) {
        return false;
    }
    if has_char_run(word) {
        return false;
    }
    // Short Persian/Latin hybrids are keyboard-layout accidents.
    if char_count > 3
        && char_count < MIN_MIXED_SCRIPT_CHARS
        && word.chars().any(is_perso_arabic)
        && word.chars().any(|c| c.is_ascii_alphabetic())
    {
        return false;
    }
    true
}

fn has_repeated_word(words: &[String]) -> bool {
    words
        .iter()
        .enumerate()
        .any(|(i, word)| words[..i].contains(word))
}

/// Three or more identical consecutive characters ("ههههه", "aaa").
fn has_char_run(word: &str) -> bool {
    let chars: Vec<char> = word.chars().collect();
    chars
        .windows(3)
        .any(|w| w[0] == w[1] && w[1] == w[2])
}

const fn is_perso_arabic(c: char) -> bool {
    matches!(
        c,
        '\u{0600}'..='\u{06FF}'
            | '\u{0750}'..='\u{077F}'
            | '\u{08A0}'..='\u{08FF}'
            | '\u{FB50}'..='\u{FDFF}'
            | '\u{FE70}'..='\u{FEFF}'
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(entries: &[(&str, u32)]) -> HashMap<String, u32> {
        entries
            .iter()
            .map(|(phrase, n)| ((*phrase).to_string(), *n))
            .collect()
    }

    #[test]
    fn keeps_plausible_phrases() {
        let filtered = filter_candidates(&counts(&[("garden design", 3), ("طراحی باغ", 2)]));
        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn drops_below_frequency_floor() {
        let filtered = filter_candidates(&counts(&[("garden design", 1)]));
        assert!(filtered.is_empty());
    }

    #[test]
    fn drops_repeated_word_phrases() {
        assert!(!is_candidate("garden garden"));
        assert!(!is_candidate("باغ طراحی باغ"));
    }

    #[test]
    fn drops_dangling_boundaries() {
        assert!(!is_candidate("for garden design"));
        assert!(!is_candidate("garden design for"));
        assert!(!is_candidate("طراحی باغ برای"));
    }

    #[test]
    fn drops_stop_word_only_phrases() {
        assert!(!is_candidate("چرا شما"));
        assert!(!is_candidate("what when"));
    }

    #[test]
    fn surviving_phrases_have_two_to_four_distinct_words() {
        let filtered = filter_candidates(&counts(&[
            ("garden design tips here", 2),
            ("soil preparation", 4),
        ]));
        for phrase in filtered.keys() {
            let words: Vec<&str> = phrase.split(' ').collect();
            assert!((2..=4).contains(&words.len()));
            let mut unique = words.clone();
            unique.sort_unstable();
            unique.dedup();
            assert_eq!(unique.len(), words.len());
        }
    }

    #[test]
    fn meaningful_word_rules() {
        assert!(is_meaningful_word("garden"));
        assert!(is_meaningful_word("باغبانی"));
        assert!(!is_meaningful_word("x"));
        assert!(!is_meaningful_word("1234"));
        assert!(!is_meaningful_word("ههههه"));
        assert!(!is_meaningful_word("abباغ")); // 4-char hybrid
        assert!(is_meaningful_word("seoسازی")); // 7 chars, long enough
    }
}
