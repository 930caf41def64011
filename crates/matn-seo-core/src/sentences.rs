//! Sentence segmentation for mixed Persian/Latin prose.
//!
//! A single left-to-right scan with context checks at each terminator.
//! Recognized terminators are `.`, `!`, `?`, the Arabic question mark
//! `؟`, and the Urdu full stop `۔`. A terminator does not end a sentence
//! when it sits inside an abbreviation, a decimal number, or an ellipsis
//! run.
//!
//! A post-pass folds fragments shorter than 3 words into the following
//! sentence and discards punctuation-only fragments, so every surviving
//! sentence carries at least one countable word.

use crate::dictionaries::abbreviations::is_abbreviation;
use crate::text;

/// Minimum words per sentence after the merge pass.
const MIN_SENTENCE_WORDS: usize = 3;

/// Split text into sentences.
///
/// Empty input yields an empty list. Surface text is preserved (after
/// whitespace normalization) for display and highlighting.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn split_sentences(text: &str) -> Vec<String> {
    let normalized = text::normalize_for_search(text);
    if normalized.is_empty() {
        return Vec::new();
    }

    let chars: Vec<char> = normalized.chars().collect();
    let mut raw = Vec::new();
    let mut current = String::new();
    let mut i = 0;

    while i < chars.len() {
        let ch = chars[i];
        current.push(ch);

        if is_terminator(ch) && is_boundary(&chars, i) {
            let sentence = current.trim().to_string();
            if !sentence.is_empty() {
                raw.push(sentence);
            }
            current.clear();

            // Absorb trailing whitespace into the closed sentence.
            while i + 1 < chars.len() && chars[i + 1].is_whitespace() {
                i += 1;
            }
        }

        i += 1;
    }

    let tail = current.trim().to_string();
    if !tail.is_empty() {
        raw.push(tail);
    }

    merge_short_sentences(raw)
}

const fn is_terminator(ch: char) -> bool {
    matches!(ch, '.' | '!' | '?' | '؟' | '۔')
}

/// Decide whether the terminator at `pos` ends a sentence.
fn is_boundary(chars: &[char], pos: usize) -> bool {
    // First of three consecutive terminators: an ellipsis is forming.
    if pos + 2 < chars.len() && is_terminator(chars[pos + 1]) && is_terminator(chars[pos + 2]) {
        return false;
    }

    // Middle of a terminator run: wait for the last one.
    if pos > 0
        && pos + 1 < chars.len()
        && is_terminator(chars[pos - 1])
        && is_terminator(chars[pos + 1])
    {
        return false;
    }

    if chars[pos] == '.' {
        // Period flanked by digits is a decimal point.
        if pos > 0
            && pos + 1 < chars.len()
            && chars[pos - 1].is_ascii_digit()
            && chars[pos + 1].is_ascii_digit()
        {
            return false;
        }

        // Period attached to a known abbreviation.
        if is_abbreviation(&word_before(chars, pos)) {
            return false;
        }
    }

    true
}

/// Collect the token immediately before `pos`, including interior periods
/// so dotted abbreviations like `e.g` and `ق.م` survive intact.
fn word_before(chars: &[char], pos: usize) -> String {
    let mut collected = Vec::new();
    let mut i = pos;
    while i > 0 {
        i -= 1;
        let ch = chars[i];
        if ch.is_alphanumeric() || ch == '.' || ch == text::ZWNJ || ch == 'ـ' {
            collected.push(ch);
        } else {
            break;
        }
    }
    collected.reverse();
    collected.into_iter().collect()
}

/// Fold fragments below [`MIN_SENTENCE_WORDS`] into the following
/// sentence. A short final sentence has no follower and is kept as-is.
/// Punctuation-only fragments are dropped.
fn merge_short_sentences(mut raw: Vec<String>) -> Vec<String> {
    let mut merged: Vec<String> = Vec::with_capacity(raw.len());

    let mut i = 0;
    while i < raw.len() {
        let word_count = text::count_words(&raw[i]);
        if word_count == 0 {
            i += 1;
            continue;
        }
        if word_count < MIN_SENTENCE_WORDS && i + 1 < raw.len() {
            let fragment = std::mem::take(&mut raw[i]);
            raw[i + 1] = format!("{fragment} {}", raw[i + 1]);
        } else {
            merged.push(raw[i].clone());
        }
        i += 1;
    }

    merged
}
