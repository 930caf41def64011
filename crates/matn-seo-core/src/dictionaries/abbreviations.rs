//! Abbreviation dictionary for sentence boundary detection.
//!
//! A period after any of these forms does not end a sentence. Persian
//! scholarly and calendar abbreviations sit alongside the Latin set
//! because Persian web prose mixes both scripts freely.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Abbreviations that must not trigger a sentence break.
pub static ABBREVIATIONS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    let mut set = HashSet::new();

    // Persian calendar and scholarly forms
    set.extend([
        "ق.م",   // قبل از میلاد
        "هـ.ش",  // هجری شمسی
        "هـ.ق",  // هجری قمری
        "ه.ش",
        "ه.ق",
        "ص",     // صفحه
        "صص",    // صفحات
        "ج",     // جلد
        "ر.ک",   // رجوع کنید
    ]);

    // Latin titles and honorifics
    set.extend([
        "mr", "mrs", "ms", "dr", "prof", "rev", "sr", "jr", "capt", "col", "gen", "lt", "sgt",
    ]);

    // Latin common abbreviations
    set.extend(["etc", "vs", "e.g", "i.e", "cf", "viz", "n.b", "p.s"]);

    // Time, units, references
    set.extend([
        "a.m", "p.m", "no", "vol", "pp", "fig", "est", "approx", "min", "max",
    ]);

    // Business forms
    set.extend(["inc", "corp", "ltd", "llc", "co"]);

    set
});

/// Check if a word is a known abbreviation.
///
/// Leading/trailing periods are ignored so both `"e.g"` and `"e.g."`
/// match.
pub fn is_abbreviation(word: &str) -> bool {
    let word_lower = word.to_lowercase();
    let trimmed = word_lower.trim_matches('.');
    !trimmed.is_empty() && ABBREVIATIONS.contains(trimmed)
}
