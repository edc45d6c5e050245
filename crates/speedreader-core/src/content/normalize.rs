//! Cleanup applied to extracted text before tokenization.

use std::sync::LazyLock;

use regex::Regex;

static EXTRA_BLANK_LINES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").expect("valid blank line pattern"));
static INLINE_WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\S\n]+").expect("valid inline whitespace pattern"));
static SPACE_AROUND_NEWLINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" *\n *").expect("valid newline padding pattern"));
static PAGE_NUMBER_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[^\S\n]*\d+[^\S\n]*$").expect("valid page number pattern"));
static PAGE_OF_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^.{0,50}Page \d+ of \d+.{0,50}$").expect("valid page footer pattern")
});
static DASH_RULE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-{5,}").expect("valid dash rule pattern"));
static BULLET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[•◦▪▸►][^\S\n]*").expect("valid bullet pattern"));
static LONE_L: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bl\b").expect("valid lone l pattern"));
static LONE_RN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\brn\b").expect("valid lone rn pattern"));

/// Where a piece of text came from, which decides the extra cleanup passes.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct NormalizeOptions {
    pub from_pdf: bool,
    pub from_ocr: bool,
    /// Fold en/em dashes to `-`. Off by default: the tokenizer paces a
    /// trailing dash like a clause break.
    pub fold_dashes: bool,
}

/// Collapse inline whitespace, keep at most one blank line between
/// paragraphs, and trim the result.
pub fn normalize_whitespace(text: &str) -> String {
    let text = text.replace("\r\n", "\n").replace('\r', "\n");
    let text = EXTRA_BLANK_LINES.replace_all(&text, "\n\n");
    let text = INLINE_WHITESPACE.replace_all(&text, " ");
    let text = SPACE_AROUND_NEWLINE.replace_all(&text, "\n");
    text.trim().to_owned()
}

pub fn normalize_quotes(text: &str) -> String {
    text.chars()
        .map(|ch| match ch {
            '\u{2018}' | '\u{2019}' | '\u{201A}' | '\u{201B}' | '\u{2032}' => '\'',
            '\u{201C}' | '\u{201D}' | '\u{201E}' | '\u{201F}' | '\u{2033}' => '"',
            other => other,
        })
        .collect()
}

/// Expand the ellipsis character, drop zero-width characters, and fold
/// en/em dashes to `-` when `fold_dashes` is set.
pub fn normalize_special_chars(text: &str, fold_dashes: bool) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\u{2013}' | '\u{2014}' if fold_dashes => out.push('-'),
            '\u{2026}' => out.push_str("..."),
            '\u{200B}' | '\u{200C}' | '\u{200D}' | '\u{FEFF}' => {}
            other => out.push(other),
        }
    }
    out
}

/// Strip page numbers, running "Page N of M" footers, dash rules and bullet
/// glyphs left behind by PDF extraction.
pub fn clean_pdf_artifacts(text: &str) -> String {
    let text = PAGE_NUMBER_LINE.replace_all(text, "");
    let text = PAGE_OF_LINE.replace_all(&text, "");
    let text = DASH_RULE.replace_all(&text, "");
    BULLET.replace_all(&text, "").into_owned()
}

pub fn fix_ocr_errors(text: &str) -> String {
    let text = LONE_L.replace_all(text, "I");
    let text = LONE_RN.replace_all(&text, "m");
    text.replace(['|', '¦'], "")
}

pub fn normalize_text(text: &str, options: NormalizeOptions) -> String {
    let mut result = normalize_special_chars(&normalize_quotes(text), options.fold_dashes);

    if options.from_pdf {
        result = clean_pdf_artifacts(&result);
    }
    if options.from_ocr {
        result = fix_ocr_errors(&result);
    }

    normalize_whitespace(&result)
}
