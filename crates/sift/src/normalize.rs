//! Text normalization for accent-, case- and punctuation-insensitive matching.
//!
//! [`normalize`] turns arbitrary text into a canonical comparison key. Keys are
//! only ever compared with each other, never displayed.
//!
//! The pipeline is fixed:
//!
//! ```text
//! NFD decompose → drop U+0300..=U+036F → drop listed punctuation → lowercase
//!   → NFD again (canonical mark order) → trim
//! ```

use std::fmt;

use unicode_normalization::UnicodeNormalization;

/// Punctuation and symbol characters removed during normalization.
///
/// This is the complete set. Anything not listed here (including other
/// punctuation such as `'`, `"`, `@` or `+`) is kept.
pub const STRIPPED_PUNCTUATION: &[char] = &[
    '.', ',', '/', '#', '!', '$', '%', '^', '&', '*', ';', ':', '{', '}', '=', '-', '_', '`', '~',
    '(', ')', '¿', '?', '¡',
];

/// Returns `true` for characters in the Combining Diacritical Marks block.
#[inline]
pub fn is_combining_diacritic(c: char) -> bool {
    ('\u{0300}'..='\u{036F}').contains(&c)
}

/// Returns `true` if `c` is one of [`STRIPPED_PUNCTUATION`].
#[inline]
pub fn is_stripped_punctuation(c: char) -> bool {
    STRIPPED_PUNCTUATION.contains(&c)
}

/// Converts text into its canonical comparison key.
///
/// # Examples
///
/// ```
/// use sift::normalize;
///
/// assert_eq!(normalize("  Café!  "), "cafe");
/// assert_eq!(normalize("¿Niño?"), "nino");
/// assert_eq!(normalize("Crème Brûlée"), "creme brulee");
/// assert_eq!(normalize(""), "");
/// ```
pub fn normalize(text: &str) -> String {
    let stripped: String = text
        .nfd()
        .filter(|&c| !is_combining_diacritic(c) && !is_stripped_punctuation(c))
        .collect();

    // Removing characters can leave neighbouring marks out of canonical
    // order, so the lowercased text is decomposed and reordered once more.
    let canonical: String = stripped
        .to_lowercase()
        .nfd()
        .filter(|&c| !is_combining_diacritic(c))
        .nfd()
        .collect();
    canonical.trim().to_string()
}

/// Returns `true` if the normalized `field_text` contains the normalized `query`.
///
/// An empty normalized query is contained in every field.
pub fn matches(field_text: &str, query: &str) -> bool {
    NormalizedKey::new(field_text).contains(&NormalizedKey::new(query))
}

/// A string that has been through [`normalize`].
///
/// The only way to build one is from raw text, so holding a `NormalizedKey`
/// guarantees the contents are already canonical.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct NormalizedKey(String);

impl NormalizedKey {
    /// Normalizes `text` into a key.
    pub fn new(text: &str) -> Self {
        NormalizedKey(normalize(text))
    }

    /// The normalized text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if normalization left nothing behind.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Substring containment of `needle` within this key.
    pub fn contains(&self, needle: &NormalizedKey) -> bool {
        self.0.contains(needle.as_str())
    }

    /// Consumes the key, returning the normalized string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for NormalizedKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NormalizedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NormalizedKey {
    fn from(text: &str) -> Self {
        NormalizedKey::new(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_precomposed_accents() {
        assert_eq!(normalize("é"), "e");
        assert_eq!(normalize("ñ"), "n");
        assert_eq!(normalize("Ångström"), "angstrom");
        assert_eq!(normalize("Zürich"), "zurich");
    }

    #[test]
    fn strips_already_decomposed_accents() {
        assert_eq!(normalize("e\u{0301}"), "e");
        assert_eq!(normalize("n\u{0303}o"), "no");
    }

    #[test]
    fn keeps_letters_without_decomposition() {
        // No canonical decomposition, so these survive.
        assert_eq!(normalize("Łódź"), "łodz");
        assert_eq!(normalize("Straße"), "straße");
        assert_eq!(normalize("Ø"), "ø");
    }

    #[test]
    fn strips_listed_punctuation_only() {
        assert_eq!(normalize(".,/#!$%^&*;:{}=-_`~()¿?¡"), "");
        assert_eq!(normalize("a-b_c.d"), "abcd");
        assert_eq!(normalize("it's \"quoted\" @home +1"), "it's \"quoted\" @home +1");
        assert_eq!(normalize("[x]|<y>"), "[x]|<y>");
    }

    #[test]
    fn lowercases() {
        assert_eq!(normalize("BANANA"), "banana");
        assert_eq!(normalize("BANANA"), normalize("banana"));
        assert_eq!(normalize("ΣΟΦΙΑ"), "σοφια");
    }

    #[test]
    fn trims_outer_whitespace_only() {
        assert_eq!(normalize("  two  words \t"), "two  words");
        assert_eq!(normalize("\n"), "");
    }

    #[test]
    fn trims_after_punctuation_removal() {
        assert_eq!(normalize("¡ hola !"), "hola");
        assert_eq!(normalize("- x -"), "x");
    }

    #[test]
    fn empty_input() {
        assert_eq!(normalize(""), "");
        assert!(NormalizedKey::new("").is_empty());
    }

    #[test]
    fn idempotent_on_samples() {
        for s in ["Café", "  ¿Niño?  ", "ŒUVRE", "İstanbul", "a\u{0308}\u{0301}b", "ΣΑΣ"] {
            let once = normalize(s);
            assert_eq!(normalize(&once), once, "input {s:?}");
        }
    }

    #[test]
    fn marks_joined_by_stripped_punctuation_are_reordered() {
        // '{' separates two marks of different combining classes; once it is
        // gone the marks must come out in canonical order.
        let once = normalize("\u{1e026}{\u{1133b}");
        assert_eq!(once, "\u{1133b}\u{1e026}");
        assert_eq!(normalize(&once), once);
    }

    #[test]
    fn combining_range_bounds() {
        assert!(is_combining_diacritic('\u{0300}'));
        assert!(is_combining_diacritic('\u{036F}'));
        assert!(!is_combining_diacritic('\u{02FF}'));
        assert!(!is_combining_diacritic('\u{0370}'));
        // Combining marks outside the block are kept.
        assert!(!is_combining_diacritic('\u{1AB0}'));
    }

    #[test]
    fn matches_accent_insensitive() {
        assert!(matches("Café", "cafe"));
        assert!(matches("Niño", "nino"));
        assert!(matches("Pineapple", "APP"));
        assert!(!matches("Orange", "app"));
    }

    #[test]
    fn matches_empty_query() {
        assert!(matches("anything", ""));
        assert!(matches("anything", "?!"));
        assert!(matches("", ""));
    }

    #[test]
    fn key_contains() {
        let haystack = NormalizedKey::new("Crème Brûlée");
        assert!(haystack.contains(&NormalizedKey::new("BRULE")));
        assert!(!haystack.contains(&NormalizedKey::new("tart")));
        assert_eq!(haystack.to_string(), "creme brulee");
    }
}
