//! Language Detection
//!
//! Picks the language of the local apology shown when an exchange fails.
//! Nothing else in the system branches on language.

/// First code point of the Bengali Unicode block
const BANGLA_START: char = '\u{0980}';
/// Last code point of the Bengali Unicode block
const BANGLA_END: char = '\u{09FF}';

/// Shown when an exchange fails and the user wrote in English
pub const ENGLISH_APOLOGY: &str = "Sorry, there was an error. Please try again.";

/// Shown when an exchange fails and the user wrote any Bangla
pub const BANGLA_APOLOGY: &str = "দুঃখিত, একটি ত্রুটি হয়েছে। অনুগ্রহ করে আবার চেষ্টা করুন।";

/// Language of a piece of user text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    English,
    Bangla,
}

/// True if any character falls in the Bengali block
pub fn contains_bangla(text: &str) -> bool {
    text.chars().any(|c| (BANGLA_START..=BANGLA_END).contains(&c))
}

/// Mixed text counts as Bangla
pub fn detect(text: &str) -> Language {
    if contains_bangla(text) {
        Language::Bangla
    } else {
        Language::English
    }
}

/// Apology to show in place of a failed reply to `text`
pub fn fallback_apology(text: &str) -> &'static str {
    match detect(text) {
        Language::Bangla => BANGLA_APOLOGY,
        Language::English => ENGLISH_APOLOGY,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_text() {
        assert_eq!(fallback_apology("hello"), ENGLISH_APOLOGY);
        assert_eq!(detect("hello"), Language::English);
    }

    #[test]
    fn test_bangla_text() {
        assert_eq!(fallback_apology("হ্যালো"), BANGLA_APOLOGY);
    }

    #[test]
    fn test_mixed_text_counts_as_bangla() {
        assert_eq!(fallback_apology("hello হ্যালো"), BANGLA_APOLOGY);
    }

    #[test]
    fn test_block_boundaries() {
        assert!(contains_bangla("\u{0980}"));
        assert!(contains_bangla("\u{09FF}"));
        assert!(!contains_bangla("\u{097F}"));
        assert!(!contains_bangla("\u{0A00}"));
        // Devanagari is not Bangla
        assert!(!contains_bangla("नमस्ते"));
        assert!(!contains_bangla(""));
    }
}
