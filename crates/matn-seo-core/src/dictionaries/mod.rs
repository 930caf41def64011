//! Static dictionaries backing tokenization and candidate filtering.
//!
//! Each table is data, not logic: the segmenter and the phrase filter
//! consult these sets but never embed the entries themselves.

pub mod abbreviations;
pub mod boundary_words;
