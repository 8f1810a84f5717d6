//! Shared text helpers for the matchers.
//!
//! These utilities normalise OCR output, split it into whitespace tokens, and
//! build whole-word patterns from literal label text.

use regex::{Regex, RegexBuilder};

/// Lowercase raw OCR text.
///
/// Whitespace, punctuation, and OCR noise are left untouched.
///
/// # Examples
///
/// ```
/// use activity_points::matching::text::normalize;
///
/// assert_eq!(normalize("NCC  C-Certificate\n"), "ncc  c-certificate\n");
/// ```
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.to_lowercase()
}

/// Split text on whitespace, keeping punctuation attached to tokens.
///
/// # Examples
///
/// ```
/// use activity_points::matching::text::tokens;
///
/// let toks: Vec<&str> = tokens("ncc, nss\tmooc").collect();
/// assert_eq!(toks, vec!["ncc,", "nss", "mooc"]);
/// ```
pub fn tokens(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace()
}

/// Build a case-insensitive pattern matching `label` as a whole phrase.
///
/// The label is escaped, so characters such as `+` or `(` match literally.
/// Word boundaries apply only at the start and end of the phrase.
///
/// # Examples
///
/// ```
/// use activity_points::matching::text::whole_word_pattern;
///
/// let re = whole_word_pattern("nptel + 4 week").unwrap();
/// assert!(re.is_match("NPTEL + 4 Week"));
/// assert!(!re.is_match("nptel  4 week"));
/// ```
///
/// # Errors
///
/// Returns an error if the compiled pattern exceeds the regex size limit.
pub fn whole_word_pattern(label: &str) -> Result<Regex, regex::Error> {
    RegexBuilder::new(&format!(r"\b{}\b", regex::escape(label)))
        .case_insensitive(true)
        .build()
}
