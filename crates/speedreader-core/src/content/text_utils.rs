use std::sync::LazyLock;

use regex::Regex;

// Private-use code points: never whitespace, never present in real prose.
const GROUPING_COMMA_MARK: char = '\u{E000}';
const DECIMAL_POINT_MARK: char = '\u{E001}';
const ABBREVIATION_DOT_MARK: char = '\u{E002}';

static GROUPING_COMMA: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]),([0-9])").expect("valid grouping comma pattern"));
static DECIMAL_POINT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9])\.([0-9])").expect("valid decimal point pattern"));
static ABBREVIATION_DOT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([A-Z])\.([A-Z])").expect("valid abbreviation pattern"));
static PARAGRAPH_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s*\n").expect("valid paragraph break pattern"));

pub(super) fn normalize_line_endings(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Swap punctuation that sits between two digits or two capitals for marker
/// characters so it survives paragraph and word splitting untouched.
pub(super) fn protect_inner_punctuation(text: &str) -> String {
    let text = GROUPING_COMMA.replace_all(text, format!("${{1}}{GROUPING_COMMA_MARK}${{2}}"));
    let text = DECIMAL_POINT.replace_all(&text, format!("${{1}}{DECIMAL_POINT_MARK}${{2}}"));
    let text = ABBREVIATION_DOT.replace_all(&text, format!("${{1}}{ABBREVIATION_DOT_MARK}${{2}}"));
    text.into_owned()
}

pub(super) fn restore_inner_punctuation(word: &str) -> String {
    word.chars()
        .map(|ch| match ch {
            GROUPING_COMMA_MARK => ',',
            DECIMAL_POINT_MARK | ABBREVIATION_DOT_MARK => '.',
            other => other,
        })
        .collect()
}

pub(super) fn split_paragraphs(text: &str) -> impl Iterator<Item = &str> {
    PARAGRAPH_BREAK
        .split(text)
        .map(str::trim)
        .filter(|paragraph| !paragraph.is_empty())
}
