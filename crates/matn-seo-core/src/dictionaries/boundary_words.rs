//! Boundary-word and stop-word tables for candidate filtering.
//!
//! A phrase that starts or ends with a grammatical particle ("tips for",
//! "برای طراحی") is syntactically incomplete and makes a poor keyword, so
//! the filter rejects it outright. The stop-word set additionally rejects
//! phrases made only of function words.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Words that may not begin or end a candidate phrase.
///
/// Persian particles, prepositions, and light verbs plus the English
/// function words that show up in mixed-script content.
pub static BOUNDARY_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    let mut set = HashSet::new();

    // Persian prepositions and particles
    set.extend([
        "از", "در", "به", "با", "برای", "که", "این", "آن", "را", "تا", "بر", "بی", "جز",
    ]);

    // Persian light verbs and auxiliaries
    set.extend([
        "است", "بود", "شد", "شده", "بوده", "خواهد", "می", "نمی", "باید", "نباید", "هست", "نیست",
    ]);

    // Persian connectives and quantifiers
    set.extend([
        "و", "یا", "اما", "ولی", "هم", "همه", "هر", "هیچ", "چند", "لذا", "بنابراین", "همچنین",
    ]);

    // English function words
    set.extend([
        "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
        "is", "are", "was", "were", "be", "this", "that", "these", "those",
    ]);

    set
});

/// Function words that carry no keyword value on their own.
///
/// Superset of [`BOUNDARY_WORDS`] with pronouns and interrogatives; a
/// phrase whose every word is in this set is rejected.
pub static STOP_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    let mut set: HashSet<&'static str> = BOUNDARY_WORDS.iter().copied().collect();

    // Persian pronouns and interrogatives
    set.extend([
        "من", "تو", "او", "ما", "شما", "آنها", "خود", "چه", "چرا", "چگونه", "کجا", "کی", "چقدر",
    ]);

    // English pronouns, auxiliaries, interrogatives
    set.extend([
        "i", "you", "he", "she", "it", "we", "they", "have", "has", "had", "do", "does", "did",
        "will", "would", "could", "should", "can", "may", "must", "not", "what", "when", "where",
        "why", "how", "who", "which", "there", "here",
    ]);

    set
});

/// Check whether a phrase starts or ends with a boundary word.
pub fn has_dangling_boundary(words: &[String]) -> bool {
    let first = words.first().map(String::as_str);
    let last = words.last().map(String::as_str);
    first.is_some_and(|w| BOUNDARY_WORDS.contains(w))
        || last.is_some_and(|w| BOUNDARY_WORDS.contains(w))
}

/// Check whether a word is a stop word.
pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(word)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(s: &[&str]) -> Vec<String> {
        s.iter().map(|w| (*w).to_string()).collect()
    }

    #[test]
    fn rejects_leading_preposition() {
        assert!(has_dangling_boundary(&words(&["برای", "طراحی", "باغ"])));
        assert!(has_dangling_boundary(&words(&["for", "garden", "design"])));
    }

    #[test]
    fn rejects_trailing_preposition() {
        assert!(has_dangling_boundary(&words(&["طراحی", "باغ", "برای"])));
        assert!(has_dangling_boundary(&words(&["garden", "design", "for"])));
    }

    #[test]
    fn accepts_complete_phrase() {
        assert!(!has_dangling_boundary(&words(&["طراحی", "باغ"])));
        assert!(!has_dangling_boundary(&words(&["garden", "design", "tips"])));
    }

    #[test]
    fn stop_words_cover_both_scripts() {
        assert!(is_stop_word("است"));
        assert!(is_stop_word("شما"));
        assert!(is_stop_word("the"));
        assert!(is_stop_word("which"));
        assert!(!is_stop_word("garden"));
        assert!(!is_stop_word("باغ"));
    }
}
