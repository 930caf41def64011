//! Text normalization and tokenization.
//!
//! Persian prose glues compound words with the zero-width non-joiner
//! (ZWNJ, U+200C), so a ZWNJ-joined compound must count as one word while
//! the zero-width joiner (ZWJ, U+200D) and no-break space are stripped or
//! folded to plain spaces.
//!
//! Two tokenizers live here on purpose:
//!
//! - [`count_words`] is the single source of truth for word counts and
//!   every density denominator. It keeps single-letter tokens but drops
//!   pure-digit ones.
//! - [`extract_words`] feeds candidate-phrase mining and is stricter on
//!   the edges: stray single letters are never useful keyword material,
//!   so it drops those too.

use regex::Regex;
use std::sync::LazyLock;

/// Zero-width non-joiner, the Persian half-space.
pub const ZWNJ: char = '\u{200C}';

/// Zero-width joiner.
const ZWJ: char = '\u{200D}';

/// Markup tags (analysis sometimes receives raw fragments).
static TAG_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").expect("valid regex"));

/// Latin and Perso-Arabic punctuation that binds to words.
static PUNCTUATION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"[.!?؟۔،,;:\-_()\[\]{}«»"“”'‘’]"#).expect("valid regex")
});

/// Runs of ZWNJ collapse to a single joiner.
static ZWNJ_RUN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("\u{200C}{2,}").expect("valid regex"));

/// Whitespace runs, including NBSP.
static SPACE_RUN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s\u{00A0}]+").expect("valid regex"));

/// Everything outside the Perso-Arabic blocks, Latin letters, digits,
/// ZWNJ, and the space separator. Used by [`extract_words`] only.
static NON_WORD_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        "[^\u{0600}-\u{06FF}\u{0750}-\u{077F}\u{08A0}-\u{08FF}\u{FB50}-\u{FDFF}\u{FE70}-\u{FEFF}\u{200C} a-zA-Z0-9]",
    )
    .expect("valid regex")
});

/// Canonicalize text for case-insensitive matching.
///
/// Lower-cases, strips ZWJ, folds NBSP/tab/newline runs into single ASCII
/// spaces, collapses repeated ZWNJ, and trims.
pub fn normalize_for_match(text: &str) -> String {
    normalize_for_search(text).to_lowercase()
}

/// Canonicalize text while preserving case, for display and search.
pub fn normalize_for_search(text: &str) -> String {
    let without_zwj: String = text.chars().filter(|&c| c != ZWJ).collect();
    let collapsed = SPACE_RUN_PATTERN.replace_all(&without_zwj, " ");
    let collapsed = ZWNJ_RUN_PATTERN.replace_all(&collapsed, "\u{200C}");
    collapsed.trim().to_string()
}

/// Count words in text.
///
/// Strips markup tags, normalizes, converts punctuation to spaces, and
/// splits on the ASCII space. ZWNJ-joined compounds count as one word;
/// tokens that are empty after ZWNJ removal or purely numeric do not
/// count. This definition is used for every word count and every density
/// denominator in the engine.
pub fn count_words(text: &str) -> usize {
    split_countable(text).count()
}

/// Tokenize text for candidate-phrase mining.
///
/// Lower-cases, strips everything outside the Perso-Arabic blocks, Latin
/// letters, and digits, then drops single-character tokens (unless they
/// are digits) and pure-numeric tokens entirely.
pub fn extract_words(text: &str) -> Vec<String> {
    let stripped = TAG_PATTERN.replace_all(text, " ");
    let normalized = normalize_for_match(&stripped);
    let clean = NON_WORD_PATTERN.replace_all(&normalized, " ");

    clean
        .split(' ')
        .filter(|word| {
            let bare: String = word.chars().filter(|&c| c != ZWNJ).collect();
            if bare.trim().is_empty() {
                return false;
            }
            if bare.chars().count() == 1 && !bare.chars().any(|c| c.is_ascii_digit()) {
                return false;
            }
            !bare.chars().all(|c| c.is_ascii_digit())
        })
        .map(str::to_string)
        .collect()
}

/// Find all occurrences of a keyword in text after match normalization.
///
/// Returns byte offsets into the normalized haystack. An empty keyword
/// matches nothing.
pub fn find_keyword(text: &str, keyword: &str) -> Vec<usize> {
    let haystack = normalize_for_match(text);
    let needle = normalize_for_match(keyword);
    if needle.is_empty() {
        return Vec::new();
    }

    let mut positions = Vec::new();
    let mut start = 0;
    while let Some(pos) = haystack[start..].find(&needle) {
        positions.push(start + pos);
        start += pos + needle.len();
    }
    positions
}

/// Iterator over countable word tokens, shared by [`count_words`].
fn split_countable(text: &str) -> impl Iterator<Item = String> {
    let stripped = TAG_PATTERN.replace_all(text, " ");
    let normalized = normalize_for_search(&stripped);
    let depunctuated = PUNCTUATION_PATTERN.replace_all(&normalized, " ");
    let collapsed = SPACE_RUN_PATTERN
        .replace_all(&depunctuated, " ")
        .trim()
        .to_string();

    collapsed
        .split(' ')
        .map(str::to_string)
        .collect::<Vec<_>>()
        .into_iter()
        .filter(|word| {
            let bare: String = word.chars().filter(|&c| c != ZWNJ).collect();
            let bare = bare.trim();
            !bare.is_empty() && !bare.chars().all(|c| c.is_ascii_digit())
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_words_empty_is_zero() {
        assert_eq!(count_words(""), 0);
        assert_eq!(count_words("   \t\n"), 0);
    }

    #[test]
    fn count_words_basic() {
        assert_eq!(count_words("garden design tips for beginners"), 5);
    }

    #[test]
    fn count_words_persian_with_zwnj() {
        // بهینه‌سازی is one ZWNJ-joined compound
        assert_eq!(count_words("بهینه\u{200C}سازی محتوا برای موتور جستجو"), 5);
    }

    #[test]
    fn count_words_strips_tags_and_punctuation() {
        assert_eq!(count_words("<p>Hello, world!</p>"), 2);
    }

    #[test]
    fn count_words_ignores_pure_digits() {
        assert_eq!(count_words("chapter 12 begins"), 2);
    }

    #[test]
    fn count_words_keeps_single_letters() {
        // "a" counts as a word for density purposes
        assert_eq!(count_words("a garden"), 2);
    }

    #[test]
    fn extract_words_drops_single_letters_and_numbers() {
        let words = extract_words("a garden of 250 roses");
        assert_eq!(words, vec!["garden", "of", "roses"]);
    }

    #[test]
    fn extract_words_lowercases() {
        let words = extract_words("Garden Design");
        assert_eq!(words, vec!["garden", "design"]);
    }

    #[test]
    fn extract_words_keeps_persian() {
        let words = extract_words("طراحی باغ و فضای سبز");
        assert_eq!(words, vec!["طراحی", "باغ", "فضای", "سبز"]);
    }

    #[test]
    fn normalize_collapses_whitespace_and_zwj() {
        let input = "hello\u{200D}  \t world\u{00A0}again";
        assert_eq!(normalize_for_match(input), "hello world again");
    }

    #[test]
    fn normalize_collapses_zwnj_runs() {
        let input = "بهینه\u{200C}\u{200C}سازی";
        assert_eq!(normalize_for_match(input), "بهینه\u{200C}سازی");
    }

    #[test]
    fn normalize_for_search_preserves_case() {
        assert_eq!(normalize_for_search("Garden  Design"), "Garden Design");
    }

    #[test]
    fn find_keyword_positions() {
        let positions = find_keyword("the garden in the garden", "garden");
        assert_eq!(positions.len(), 2);
    }

    #[test]
    fn find_keyword_case_insensitive() {
        assert_eq!(find_keyword("Garden Design", "garden design").len(), 1);
    }

    #[test]
    fn find_keyword_empty_needle() {
        assert!(find_keyword("some text", "").is_empty());
    }
}
