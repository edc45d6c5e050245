use std::sync::LazyLock;

use regex::Regex;

const SENTENCE_END_MULTIPLIER: f64 = 2.5;
const CLAUSE_BREAK_MULTIPLIER: f64 = 1.8;
const COMMA_MULTIPLIER: f64 = 1.3;
const VERY_LONG_WORD_CHARS: usize = 12;
const VERY_LONG_WORD_FACTOR: f64 = 1.3;
const LONG_WORD_CHARS: usize = 8;
const LONG_WORD_FACTOR: f64 = 1.15;
const COMPOUND_FACTOR: f64 = 1.15;
const URL_MULTIPLIER: f64 = 3.0;

static HYPHENATED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_]+(?:-[A-Za-z0-9_]+)+$").expect("valid compound pattern")
});
static URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^https?://\S+$").expect("valid url pattern"));

pub(crate) fn ends_sentence(ch: char) -> bool {
    matches!(ch, '.' | '!' | '?')
}

/// Display-time multiplier for `word`.
///
/// Rules are applied in order on a running value: trailing punctuation sets
/// the base, length and hyphenation scale it, and a URL replaces it outright.
pub fn delay_multiplier(word: &str) -> f64 {
    let mut multiplier = match word.chars().next_back() {
        Some(ch) if ends_sentence(ch) => SENTENCE_END_MULTIPLIER,
        Some(';' | ':' | '—' | '–') => CLAUSE_BREAK_MULTIPLIER,
        Some(',') => COMMA_MULTIPLIER,
        _ => 1.0,
    };

    let char_count = word.chars().count();
    if char_count > VERY_LONG_WORD_CHARS {
        multiplier *= VERY_LONG_WORD_FACTOR;
    } else if char_count > LONG_WORD_CHARS {
        multiplier *= LONG_WORD_FACTOR;
    }

    if HYPHENATED.is_match(word) {
        multiplier *= COMPOUND_FACTOR;
    }

    if URL.is_match(word) {
        multiplier = URL_MULTIPLIER;
    }

    multiplier
}
